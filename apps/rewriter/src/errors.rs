use std::path::PathBuf;

use thiserror::Error;

/// Failures the rewriter can hit. None are recovered locally.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The target could not be opened, read as UTF-8, or written back.
    #[error("Cannot access {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layout pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RewriteError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RewriteError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
