//! The rule dispatcher and the sibling-stitching fold at its heart

use std::cell::RefCell;

use crate::formatting::rules::{default_rules, Rule};
use crate::formatting::text::trim_spaces_and_tabs_right;
use crate::language::{CodeBlock, Tag};

/// Configuration read by every rule when deciding to wrap or pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Wrap threshold, in columns.
    pub width: usize,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        FormatterOptions {
            width: 80,
            indent: 2,
        }
    }
}

/// A problem noticed while formatting. These are collected rather than
/// raised; a formatter's output is always best-effort text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No rule in the dispatch list matched a node of this type, so the
    /// node (and everything below it) contributed nothing to the output.
    UnmatchedNodeType { tag: Tag },
}

/// Walks a [`CodeBlock`] tree and renders it to a string, dispatching each
/// node to the first rule that matches it. Rule registration order matters:
/// specific rules must precede generic ones, with [`FallbackRule`] last.
///
/// [`FallbackRule`]: crate::formatting::FallbackRule
pub struct Formatter {
    rules: Vec<Box<dyn Rule>>,
    options: FormatterOptions,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Formatter {
    pub fn new() -> Formatter {
        Formatter::with_options(FormatterOptions::default())
    }

    pub fn with_options(options: FormatterOptions) -> Formatter {
        Formatter::with_rules(default_rules(), options)
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>, options: FormatterOptions) -> Formatter {
        Formatter {
            rules,
            options,
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Render a whole tree. Equivalent to [`Formatter::format_at`] with an
    /// indentation level of zero.
    pub fn format(&self, block: &CodeBlock) -> String {
        self.format_at(block, 0)
    }

    /// Render one node at the given indentation level: its start literal if
    /// present, then its children, then its end literal if present. A node
    /// no rule matches contributes nothing, and the miss is recorded.
    pub fn format_at(&self, block: &CodeBlock, level: usize) -> String {
        let rule = match self.lookup(block) {
            Some(rule) => rule,
            None => {
                self.diagnostics
                    .borrow_mut()
                    .push(Diagnostic::UnmatchedNodeType {
                        tag: block
                            .tag
                            .clone(),
                    });
                return String::new();
            }
        };

        let mut text = String::new();
        if block
            .start
            .is_some()
        {
            text += &rule.format_start(self, block, level);
        }
        text += &rule.format_children(self, block, level);
        if block
            .end
            .is_some()
        {
            text += &rule.format_end(self, block, level);
        }
        text
    }

    /// First matching rule wins.
    pub(crate) fn lookup(&self, block: &CodeBlock) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .find(|rule| rule.matches(block))
    }

    /// Drain the diagnostics collected by format passes so far.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self
            .diagnostics
            .borrow_mut())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new()
    }
}

/// Fold a node's children into a single string, threading the sibling and
/// parent rule callbacks between them. This is the default behavior of
/// [`Rule::format_children`]; block rules call it at a deeper level and wrap
/// the result.
///
/// Per child, in order: the previous sibling's rule rewrites the rendered
/// text via `after_self`, the parent's rule via `before_child`, and the next
/// sibling's rule via `before_self` (told whether the output is currently at
/// a fresh line). Finally, if appending the child would push the current
/// line past the configured width and the child's own rule allows breaking,
/// a newline is forced in front of it and the parent re-indents it one level
/// deeper. The overflow check deliberately compares only the last line of
/// the accumulated text against the first line of the child; for multi-line
/// children this under-counts, and that is the documented behavior.
pub fn stitch_children(fmt: &Formatter, parent: &CodeBlock, level: usize) -> String {
    let children = &parent.children;
    let mut result = String::new();

    for (i, child) in children
        .iter()
        .enumerate()
    {
        let child_rule = fmt.lookup(child);
        let parent_rule = fmt.lookup(parent);
        let prev_rule = i
            .checked_sub(1)
            .and_then(|h| children.get(h))
            .and_then(|prev| fmt.lookup(prev));
        let next_rule = children
            .get(i + 1)
            .and_then(|next| fmt.lookup(next));

        let mut text = fmt.format_at(child, level);

        if let Some(rule) = prev_rule {
            text = rule.after_self(fmt, &text, level);
        }
        if let Some(rule) = parent_rule {
            text = rule.before_child(fmt, &text, level);
        }
        if let Some(rule) = next_rule {
            let mut joined = result.clone();
            joined.push_str(&text);
            let trimmed = trim_spaces_and_tabs_right(&joined);
            let new_line = trimmed.is_empty() || trimmed.ends_with('\n');
            text = rule.before_self(fmt, &text, level, new_line);
        }

        let last_line_length = result
            .rsplit('\n')
            .next()
            .unwrap_or("")
            .chars()
            .count();
        let first_line_length = text
            .split('\n')
            .next()
            .unwrap_or("")
            .chars()
            .count();
        if last_line_length + first_line_length
            > fmt.options()
                .width
            && child_rule
                .map(|rule| rule.allow_break(child))
                .unwrap_or(false)
        {
            text = format!(
                "\n{}",
                text.trim_start()
            );
            if let Some(rule) = parent_rule {
                text = rule.before_child(fmt, &text, level + 1);
            }
        }

        result.push_str(&text);
    }

    result
}
