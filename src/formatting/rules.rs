//! Format rules, one per block type
//!
//! Each rule controls how blocks of its type render their delimiters and how
//! the text of neighboring siblings is adjusted around them. Rules are
//! stateless; anything they need (options, recursion) arrives through the
//! dispatcher parameter.

use crate::formatting::formatter::{stitch_children, Formatter};
use crate::formatting::text::{
    pad_left, pad_right, trim_spaces_and_tabs_left, trim_spaces_and_tabs_right,
};
use crate::language::{CodeBlock, Tag};

/// The capability set every rule implements. All hooks except [`matches`]
/// have pass-through defaults, so concrete rules override only what differs.
///
/// [`matches`]: Rule::matches
pub trait Rule {
    fn matches(&self, block: &CodeBlock) -> bool;

    /// Text emitted for the block's opening literal. Only called when the
    /// block actually carries one.
    fn format_start(&self, _fmt: &Formatter, block: &CodeBlock, _level: usize) -> String {
        block
            .start
            .clone()
            .unwrap_or_default()
    }

    /// Text emitted for the block's closing literal. Only called when the
    /// block actually carries one.
    fn format_end(&self, _fmt: &Formatter, block: &CodeBlock, _level: usize) -> String {
        block
            .end
            .clone()
            .unwrap_or_default()
    }

    fn format_children(&self, fmt: &Formatter, parent: &CodeBlock, level: usize) -> String {
        stitch_children(fmt, parent, level)
    }

    /// Rewrite the preceding sibling's rendered text before it is appended.
    /// `new_line` reports whether, horizontal whitespace aside, the output
    /// so far ends at a line start.
    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, _new_line: bool) -> String {
        prev.to_string()
    }

    /// Rewrite the following sibling's rendered text before it is appended.
    fn after_self(&self, _fmt: &Formatter, next: &str, _level: usize) -> String {
        next.to_string()
    }

    /// Rewrite a child's rendered text before it is appended.
    fn before_child(&self, _fmt: &Formatter, child: &str, _level: usize) -> String {
        child.to_string()
    }

    /// Whether a line overflowing the configured width may be broken just
    /// before a block of this type.
    fn allow_break(&self, _block: &CodeBlock) -> bool {
        false
    }
}

/// The canonical dispatch list. First match wins, so the order here is a
/// correctness contract: the specific rules come first and [`FallbackRule`]
/// closes the list as the universal catch-all.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RootRule),
        Box::new(BlockRule),
        Box::new(KeywordBlockRule),
        Box::new(InlineBlockRule),
        Box::new(DotRule),
        Box::new(KeywordsRule),
        Box::new(OperatorsRule),
        Box::new(DelimitersRule),
        Box::new(FallbackRule),
    ]
}

// Join onto the preceding text with exactly one space, unless the output is
// already at a fresh line. Shared by the brace blocks and keywords.
fn glue_with_space(prev: &str, new_line: bool) -> String {
    if new_line {
        prev.to_string()
    } else {
        format!(
            "{} ",
            prev.trim_end()
        )
    }
}

// Re-align a body child at the given level: a leading hard break gets the
// line after it padded, and a trailing hard break gets padding appended so
// whatever follows starts aligned.
fn indent_body_child(fmt: &Formatter, child: &str, level: usize) -> String {
    let indent = fmt
        .options()
        .indent;
    let mut text = child.to_string();

    let trimmed = trim_spaces_and_tabs_left(&text);
    if trimmed.starts_with('\n') {
        text = format!(
            "\n{}",
            pad_left(trimmed.trim_start(), level, indent)
        );
    }

    let trimmed = trim_spaces_and_tabs_right(&text);
    if trimmed.ends_with('\n') {
        text = pad_right(trimmed, level, indent);
    }

    text
}

// Render children one level deeper and wrap them in hard breaks, the shape
// shared by brace bodies and multiline groups.
fn format_body(fmt: &Formatter, block: &CodeBlock, level: usize) -> String {
    let indent = fmt
        .options()
        .indent;
    let body = stitch_children(fmt, block, level + 1);
    format!(
        "\n{}\n",
        pad_left(body.trim(), level + 1, indent)
    )
}

/// The top of the tree. Collapses trailing horizontal whitespace whenever a
/// child's text ends in a hard break.
pub struct RootRule;

impl Rule for RootRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Root
    }

    fn before_child(&self, _fmt: &Formatter, child: &str, _level: usize) -> String {
        let trimmed = trim_spaces_and_tabs_right(child);
        if trimmed.ends_with('\n') {
            trimmed.to_string()
        } else {
            child.to_string()
        }
    }
}

/// A brace-delimited body introduced by an inline head, `stage('Build') {`
/// and the like. Always rendered multi-line, one level deeper.
pub struct BlockRule;

impl Rule for BlockRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Block
    }

    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, new_line: bool) -> String {
        glue_with_space(prev, new_line)
    }

    fn before_child(&self, fmt: &Formatter, child: &str, level: usize) -> String {
        indent_body_child(fmt, child, level)
    }

    fn format_end(&self, fmt: &Formatter, block: &CodeBlock, level: usize) -> String {
        match &block.end {
            Some(end) => pad_left(
                end,
                level,
                fmt.options()
                    .indent,
            ),
            None => String::new(),
        }
    }

    fn format_children(&self, fmt: &Formatter, block: &CodeBlock, level: usize) -> String {
        format_body(fmt, block, level)
    }
}

/// The bare-brace idiom: a brace body with no inline head. Whatever the
/// parser captured as delimiters, this renders `{` and a padded `}` with a
/// trailing break.
pub struct KeywordBlockRule;

impl Rule for KeywordBlockRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::KeywordBlock
    }

    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, new_line: bool) -> String {
        glue_with_space(prev, new_line)
    }

    fn before_child(&self, fmt: &Formatter, child: &str, level: usize) -> String {
        indent_body_child(fmt, child, level)
    }

    fn format_start(&self, _fmt: &Formatter, _block: &CodeBlock, _level: usize) -> String {
        "{".to_string()
    }

    fn format_end(&self, fmt: &Formatter, _block: &CodeBlock, level: usize) -> String {
        pad_left(
            "}\n",
            level,
            fmt.options()
                .indent,
        )
    }

    fn format_children(&self, fmt: &Formatter, block: &CodeBlock, level: usize) -> String {
        format_body(fmt, block, level)
    }
}

/// Parenthesized and bracketed groups. Stays on one line unless the parser
/// captured a hard break inside one of the direct children's opening
/// literals, in which case it gets the full block treatment.
pub struct InlineBlockRule;

impl InlineBlockRule {
    fn is_multiline(&self, block: &CodeBlock) -> bool {
        block
            .children
            .iter()
            .any(|child| {
                child
                    .start
                    .as_deref()
                    .is_some_and(|start| start.contains('\n'))
            })
    }
}

impl Rule for InlineBlockRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Round || block.tag == Tag::Square
    }

    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, new_line: bool) -> String {
        if new_line {
            trim_spaces_and_tabs_right(prev).to_string()
        } else {
            prev.to_string()
        }
    }

    fn before_child(&self, fmt: &Formatter, child: &str, level: usize) -> String {
        indent_body_child(fmt, child, level)
    }

    fn format_end(&self, fmt: &Formatter, block: &CodeBlock, level: usize) -> String {
        if self.is_multiline(block) {
            match &block.end {
                Some(end) => pad_left(
                    end,
                    level,
                    fmt.options()
                        .indent,
                ),
                None => String::new(),
            }
        } else {
            block
                .end
                .clone()
                .unwrap_or_default()
        }
    }

    fn format_children(&self, fmt: &Formatter, block: &CodeBlock, level: usize) -> String {
        if self.is_multiline(block) {
            format_body(fmt, block, level)
        } else {
            stitch_children(fmt, block, level)
                .trim()
                .to_string()
        }
    }
}

/// Member-access continuation in a chain of calls. A dot arriving at a
/// fresh line is aligned one level deeper than its owning statement;
/// otherwise it stays glued to its receiver.
pub struct DotRule;

impl Rule for DotRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Dot
    }

    fn before_self(&self, fmt: &Formatter, prev: &str, level: usize, new_line: bool) -> String {
        if new_line {
            pad_right(
                trim_spaces_and_tabs_right(prev),
                level + 1,
                fmt.options()
                    .indent,
            )
        } else {
            prev.to_string()
        }
    }
}

/// Infix and assignment tokens: one space on either side, and the
/// designated point to break an overlong line.
pub struct OperatorsRule;

impl Rule for OperatorsRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Operators
    }

    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, _new_line: bool) -> String {
        format!(
            "{} ",
            trim_spaces_and_tabs_right(prev)
        )
    }

    fn after_self(&self, _fmt: &Formatter, next: &str, _level: usize) -> String {
        format!(
            " {}",
            next.trim_start()
        )
    }

    fn allow_break(&self, _block: &CodeBlock) -> bool {
        true
    }
}

/// Separator tokens. A delimiter hugs the token before it and pushes one
/// space onto whatever follows. Not a break point.
pub struct DelimitersRule;

impl Rule for DelimitersRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Delimiters
    }

    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, _new_line: bool) -> String {
        trim_spaces_and_tabs_right(prev).to_string()
    }

    fn after_self(&self, _fmt: &Formatter, next: &str, _level: usize) -> String {
        format!(
            " {}",
            trim_spaces_and_tabs_left(next)
        )
    }
}

/// Reserved words: joined onto the preceding text with one space when
/// mid-line, and followed by one space. Breakable on overflow.
pub struct KeywordsRule;

impl Rule for KeywordsRule {
    fn matches(&self, block: &CodeBlock) -> bool {
        block.tag == Tag::Keywords
    }

    fn before_self(&self, _fmt: &Formatter, prev: &str, _level: usize, new_line: bool) -> String {
        glue_with_space(prev, new_line)
    }

    fn after_self(&self, _fmt: &Formatter, next: &str, _level: usize) -> String {
        format!(
            " {}",
            next.trim_start()
        )
    }

    fn allow_break(&self, _block: &CodeBlock) -> bool {
        true
    }
}

/// The universal catch-all, registered last. Identity behavior for every
/// hook, so plain tokens render their literals untouched.
pub struct FallbackRule;

impl Rule for FallbackRule {
    fn matches(&self, _block: &CodeBlock) -> bool {
        true
    }
}
