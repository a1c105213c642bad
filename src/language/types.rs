//! Types representing the block tree of a Groovy pipeline script

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The syntactic category of a block. Unknown tags survive decoding as
/// [`Tag::Other`] so that trees from a newer parser still round-trip.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Root,
    Block,
    KeywordBlock,
    Round,
    Square,
    Dot,
    Operators,
    Delimiters,
    Keywords,
    Other(String),
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Root => "root",
            Tag::Block => "block",
            Tag::KeywordBlock => "keywordblock",
            Tag::Round => "round",
            Tag::Square => "square",
            Tag::Dot => "dot",
            Tag::Operators => "operators",
            Tag::Delimiters => "delimiters",
            Tag::Keywords => "keywords",
            Tag::Other(other) => other,
        }
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Tag {
        match text.as_str() {
            "root" => Tag::Root,
            "block" => Tag::Block,
            "keywordblock" => Tag::KeywordBlock,
            "round" => Tag::Round,
            "square" => Tag::Square,
            "dot" => Tag::Dot,
            "operators" => Tag::Operators,
            "delimiters" => Tag::Delimiters,
            "keywords" => Tag::Keywords,
            _ => Tag::Other(text),
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> String {
        match tag {
            Tag::Other(other) => other,
            tag => tag
                .name()
                .to_string(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One syntactic unit of source. The `start` and `end` literals carry the
/// text exactly as the parser captured it, including any newlines; `children`
/// are in render order. The formatter never mutates a tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(rename = "type")]
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CodeBlock>,
}

impl CodeBlock {
    pub fn new(tag: Tag) -> CodeBlock {
        CodeBlock {
            tag,
            start: None,
            end: None,
            children: Vec::new(),
        }
    }

    /// A node carrying only an opening literal, the shape of token nodes.
    pub fn leaf(tag: Tag, start: &str) -> CodeBlock {
        CodeBlock {
            tag,
            start: Some(start.to_string()),
            end: None,
            children: Vec::new(),
        }
    }

    pub fn with_start(mut self, text: &str) -> CodeBlock {
        self.start = Some(text.to_string());
        self
    }

    pub fn with_end(mut self, text: &str) -> CodeBlock {
        self.end = Some(text.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<CodeBlock>) -> CodeBlock {
        self.children = children;
        self
    }

    /// Count of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.size())
            .sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}
