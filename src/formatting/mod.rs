// Rule-driven rendering of block trees into formatted source

mod formatter;
mod rules;
mod text;

// Re-export all public symbols
pub use formatter::*;
pub use rules::*;
pub use text::*;
