//! Error types for the feature state store.

use thiserror::Error;

/// Main error type for feature state operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// The top-level state handed to an update was not an object.
    #[error("Feature state must be an object (layer {source_layer:?}, feature {feature_id:?})")]
    NotAnObject {
        source_layer: String,
        feature_id: String,
    },

    #[error("Invalid JSON state: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for StateError {
    fn from(e: serde_json::Error) -> Self {
        StateError::InvalidJson(e.to_string())
    }
}

/// Result type for feature state operations.
pub type Result<T> = std::result::Result<T, StateError>;
