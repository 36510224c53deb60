use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the extraction core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A URL match whose host could not be turned into a domain.
    #[error("Malformed URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("Unknown extraction kind: {0} (expected email, url, domain or mobile)")]
    UnknownKind(String),
}

impl ExtractError {
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        ExtractError::MalformedUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors raised while persisting match sets.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}
