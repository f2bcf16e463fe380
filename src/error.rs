// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuffsightError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("not a valid ruff JSON report (expected an array of messages with a `code` field)")]
    InvalidReport,

    #[error("no report given (pass a file path with --report, or pipe one in with --stdin)")]
    NoInput,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RuffsightError>;

// Allow `?` on std::io::Error by converting with an unknown path (stdin reads).
impl From<std::io::Error> for RuffsightError {
    fn from(source: std::io::Error) -> Self {
        RuffsightError::Io {
            source,
            path: PathBuf::from("<stdin>"),
        }
    }
}
