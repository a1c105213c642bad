//! Loading and decoding of block trees
//!
//! The parser that produces block trees lives in the editor process, not
//! here; trees arrive JSON-encoded, one object per node with `type`,
//! optional `start`/`end` literals, and a `children` array.

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{CodeBlock, LoadingError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingError {
    pub problem: String,
    pub line: usize,
    pub column: usize,
}

/// Read a file and return an owned String. Passing "-" reads standard
/// input instead, which is how editor integrations hand us their buffer.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Decode text into a CodeBlock tree, or report where decoding failed.
pub fn decode(content: &str) -> Result<CodeBlock, DecodingError> {
    match serde_json::from_str::<CodeBlock>(content) {
        Ok(tree) => {
            debug!(
                "Decoded tree of {} node{}",
                tree.size(),
                if tree.size() == 1 { "" } else { "s" }
            );
            Ok(tree)
        }
        Err(error) => {
            debug!(?error);
            Err(DecodingError {
                problem: error.to_string(),
                line: error.line(),
                column: error.column(),
            })
        }
    }
}
