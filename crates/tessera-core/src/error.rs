//! Error types for layout descriptions.

use thiserror::Error;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while constructing or loading a layout description.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid aspect ratio {ratio}: ratio must be finite and positive")]
    InvalidAspectRatio { ratio: f64 },

    #[error("Title must show at least one line")]
    InvalidLineCount,

    #[error("Custom space of {size} cannot be the first child of a stack")]
    LeadingCustomSpace { size: f64 },

    #[error("Invalid {dimension} {value}: must be finite and non-negative")]
    NegativeDimension { dimension: &'static str, value: f64 },

    /// Malformed JSON layout description.
    #[cfg(feature = "serde")]
    #[error("Invalid layout description: {0}")]
    Json(#[from] serde_json::Error),
}
