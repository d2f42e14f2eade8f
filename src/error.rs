//! Errors raised by the indexer.
//!
//! Only conditions that stop a whole run live here. Per-file problems
//! (missing fields, bad frontmatter, unreadable files) are logged and the
//! file is dropped, so they never surface as an `IndexError`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an indexing run
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Content root does not exist: {}", .0.display())]
    MissingContentRoot(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

pub type IndexResult<T> = std::result::Result<T, IndexError>;
