use owo_colors::OwoColorize;
use std::path::Path;

use crate::decoding::DecodingError;
use crate::formatting::Diagnostic;
use crate::language::LoadingError;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a DecodingError with concise single-line output
pub fn concise_decoding_error(error: &DecodingError, filename: &Path) -> String {
    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.display(),
        error.line,
        error.column,
        error
            .problem
            .bold()
    )
}

/// Format a diagnostic collected during a format pass as a warning
pub fn concise_diagnostic(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::UnmatchedNodeType { tag } => format!(
            "{}: no format rule matches node type \"{}\"; subtree omitted",
            "warning".bright_yellow(),
            tag
        ),
    }
}
