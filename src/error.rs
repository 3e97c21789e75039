// Error types for folio.
// Covers GitHub API failures, record store failures, cache I/O, and configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid repository identifier: {0:?} (expected owner/name)")]
    InvalidRepo(String),

    #[error("Could not load project records from {path}: {reason}")]
    RecordStore { path: PathBuf, reason: String },

    #[error("An aggregation pass is already running")]
    PassInFlight,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Suggestion shown next to the error, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FolioError::RateLimited { .. } => {
                Some("Unauthenticated GitHub requests are limited per hour. Try again later.")
            }
            FolioError::RecordStore { .. } => {
                Some("Check that projects.json exists and every entry has the required fields.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_only_for_actionable_errors() {
        let limited = FolioError::RateLimited {
            reset_at: "12:00:00".to_string(),
        };
        assert!(limited.hint().is_some());
        assert!(FolioError::PassInFlight.hint().is_none());
    }

    #[test]
    fn test_display_includes_identifier() {
        let err = FolioError::InvalidRepo("nope".to_string());
        assert!(err.to_string().contains("\"nope\""));
    }
}
