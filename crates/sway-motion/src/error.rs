//! Configuration errors.
//!
//! Sensor processing itself never fails; the only fallible step is
//! validating a [`MotionConfig`](crate::MotionConfig) before use.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "stopped threshold {stopped} must be non-negative and below driving threshold {driving}"
    )]
    InvalidThresholds { driving: f32, stopped: f32 },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("min_data_count must be at least 2, got {0}")]
    MinDataCount(usize),

    #[error("excitation delta window must be at least 2 samples, got {0}")]
    DeltaWindow(usize),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidThresholds {
            driving: 0.1,
            stopped: 0.2,
        };
        assert_eq!(
            err.to_string(),
            "stopped threshold 0.2 must be non-negative and below driving threshold 0.1"
        );

        let err = ConfigError::ZeroDuration("excitation_interval_ms");
        assert_eq!(err.to_string(), "excitation_interval_ms must be greater than zero");

        let err = ConfigError::MinDataCount(1);
        assert_eq!(err.to_string(), "min_data_count must be at least 2, got 1");
    }
}
