//! A code formatter for Groovy pipeline scripts.
//!
//! The formatter consumes a tree of [`language::CodeBlock`] nodes produced by
//! an external parser and renders it back to text. Rendering is driven by an
//! ordered list of rules, one per block type; see [`formatting`].

pub mod decoding;
pub mod formatting;
pub mod language;
pub mod problem;
