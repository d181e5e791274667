//! Error types for the aurora gridding services.

use thiserror::Error;

/// Result type alias using AuroraError.
pub type AuroraResult<T> = Result<T, AuroraError>;

/// Primary error type for aurora processing operations.
#[derive(Debug, Error)]
pub enum AuroraError {
    // === Input Errors ===
    #[error("Malformed input record: {0}")]
    MalformedInput(String),

    #[error("Malformed sample at index {index}: {message}")]
    MalformedSample { index: usize, message: String },

    // === Gridding Errors ===
    #[error("Insufficient samples for interpolation: {usable} usable point(s), need 3 spanning a triangle")]
    InsufficientSamples { usable: usize },

    #[error("Raster encoding failed: {0}")]
    EncodingFailure(String),

    // === Infrastructure Errors ===
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AuroraError {
    /// Create a MalformedSample error.
    pub fn malformed_sample(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedSample {
            index,
            message: message.into(),
        }
    }
}

// Conversion from common error types
impl From<serde_json::Error> for AuroraError {
    fn from(err: serde_json::Error) -> Self {
        AuroraError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = AuroraError::malformed_sample(4, "longitude 200 out of [-180, 180]");
        assert_eq!(
            err.to_string(),
            "Malformed sample at index 4: longitude 200 out of [-180, 180]"
        );

        let err = AuroraError::InsufficientSamples { usable: 2 };
        assert!(err.to_string().contains("2 usable"));
    }

    #[test]
    fn json_errors_map_to_malformed_input() {
        let err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        assert!(matches!(
            AuroraError::from(err),
            AuroraError::MalformedInput(_)
        ));
    }
}
