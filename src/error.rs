//! Error types for inbox ingestion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, shaping or clearing the inbox
#[derive(Error, Debug)]
pub enum InboxError {
    /// I/O failure on the backing inbox file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A candidate failed output schema shaping
    #[error("Invalid lead field {field}: {details}")]
    InvalidLead {
        field: &'static str,
        details: String,
    },
}

impl InboxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(field: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidLead {
            field,
            details: details.into(),
        }
    }
}

/// Result type for inbox operations
pub type Result<T> = std::result::Result<T, InboxError>;
