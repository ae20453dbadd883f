//! Error types for link localization

use thiserror::Error;

/// Errors raised while localizing navigation links.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The link target does not contain the `/{kind}/` segment
    #[error("Link target {to:?} does not contain the {marker:?} segment")]
    MissingKindMarker { to: String, marker: String },

    /// The link's query string could not be decoded
    #[error("Failed to parse query string: {0}")]
    QueryParse(String),

    /// Invalid localizer configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
