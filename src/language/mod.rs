// Types representing the block tree of a Groovy pipeline script

mod types;

// Re-export all public symbols
pub use types::*;
