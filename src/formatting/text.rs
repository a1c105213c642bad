//! String helpers for indentation and one-sided whitespace trimming

/// Prepend `level * indent` spaces to the given text. Callers handle
/// multi-line text themselves by combining this with the trim helpers at
/// newline boundaries.
pub fn pad_left(text: &str, level: usize, indent: usize) -> String {
    format!("{}{}", " ".repeat(level * indent), text)
}

/// Append `level * indent` spaces to the given text, aligning whatever
/// follows a trailing newline.
pub fn pad_right(text: &str, level: usize, indent: usize) -> String {
    format!("{}{}", text, " ".repeat(level * indent))
}

/// Remove spaces and tabs, and only spaces and tabs, from the left edge.
/// Newlines are preserved so callers can still detect a leading hard break.
pub fn trim_spaces_and_tabs_left(text: &str) -> &str {
    text.trim_start_matches([' ', '\t'])
}

/// Remove spaces and tabs, and only spaces and tabs, from the right edge,
/// leaving any trailing newline intact.
pub fn trim_spaces_and_tabs_right(text: &str) -> &str {
    text.trim_end_matches([' ', '\t'])
}
