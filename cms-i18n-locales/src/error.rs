//! Error types for locale store operations

use thiserror::Error;

/// Errors raised while decoding actions or store snapshots.
///
/// Transitions themselves never fail; these only surface at the boundary
/// where host data is turned into typed values.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Action object with a known type but a malformed payload, or no type at all
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
