//! Error types for pattern canonicalization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("The pattern must be of type 'string', 'number' or 'object' (found {found} at {path})")]
    InvalidPatternType { path: String, found: &'static str },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl RouteError {
    pub(crate) fn invalid(path: impl Into<String>, found: &'static str) -> Self {
        Self::InvalidPatternType {
            path: path.into(),
            found,
        }
    }
}
