//! Error types for pestviz.
//!
//! Every fallible operation in the crate returns [`PestvizError`]. Numeric
//! failures are raised at the point of computation; nothing is retried.

use thiserror::Error;

/// The main error type for pestviz operations.
#[derive(Error, Debug)]
pub enum PestvizError {
    /// Degenerate numeric input (empty, non-finite, or a zero data span)
    #[error("Domain error: {message}")]
    Domain { message: String },

    /// Recentering bounds violate `0 <= start <= midpoint <= stop <= 1`
    #[error("Invalid range: start={start}, midpoint={midpoint}, stop={stop}")]
    InvalidRange { start: f64, midpoint: f64, stop: f64 },

    /// Too few samples to build a gradient
    #[error("Invalid resolution: {resolution} (must be at least 2)")]
    InvalidResolution { resolution: usize },

    /// Malformed gradient stops
    #[error("Invalid gradient: {message}")]
    InvalidGradient { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Colorbar rasterization errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience type alias for Results with PestvizError
pub type Result<T> = std::result::Result<T, PestvizError>;
