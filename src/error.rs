//! Error taxonomy shared by every subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse category of a [`SaveError`], used by callers that only care
/// about which class of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Io,
    Transport,
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("application not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    RawIo(#[from] std::io::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("knowledge source error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SaveError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SaveError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SaveError::NotFound(_) => ErrorKind::NotFound,
            SaveError::Validation(_) => ErrorKind::Validation,
            SaveError::Io { .. } | SaveError::RawIo(_) | SaveError::Walk(_) | SaveError::Archive(_) => {
                ErrorKind::Io
            }
            SaveError::Transport(_) | SaveError::Http(_) | SaveError::Json(_) => {
                ErrorKind::Transport
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SaveError>;
