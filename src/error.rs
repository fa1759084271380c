use thiserror::Error;

/// Wiring and configuration faults.
///
/// These indicate a caller bug (mismatched buffer shapes, nonsensical
/// parameters) rather than a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spectrum slice has {actual} rows but the spectrogram height is {expected}")]
    HeightMismatch { expected: usize, actual: usize },

    #[error("buffer holds {actual} cells but the spectrogram is {width}x{height}")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("analysis window has {actual} taps, expected {expected}")]
    WindowLength { expected: usize, actual: usize },

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("malformed velocity trace: {0}")]
    MalformedTrace(String),
}

impl ConfigError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject non-finite or non-positive scalars.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::invalid(name, format!("expected a positive number, got {}", value)))
    }
}
