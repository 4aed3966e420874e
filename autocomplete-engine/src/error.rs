//! Error types for option sources

use std::path::PathBuf;

/// Errors that can occur while building an option source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read option list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("option list is not a JSON array of strings")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
