/// Construction errors.

use thiserror::Error;

/// Raised when a gradient engine is built without its range bounds.
///
/// Only absence is an error; a bound of `0` is valid.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Minimum and maximum value range must be provided (min is missing)")]
    MissingMin,

    #[error("Minimum and maximum value range must be provided (max is missing)")]
    MissingMax,

    #[error("Minimum and maximum value range must be provided")]
    MissingRange,
}

impl ConfigurationError {
    /// Check both bounds are present.
    pub fn require_range(min: Option<f64>, max: Option<f64>) -> Result<(f64, f64), Self> {
        match (min, max) {
            (Some(min), Some(max)) => Ok((min, max)),
            (None, None) => Err(ConfigurationError::MissingRange),
            (None, Some(_)) => Err(ConfigurationError::MissingMin),
            (Some(_), None) => Err(ConfigurationError::MissingMax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bounds_are_present() {
        assert_eq!(ConfigurationError::require_range(Some(0.0), Some(0.0)), Ok((0.0, 0.0)));
    }

    #[test]
    fn test_missing_bounds() {
        assert_eq!(
            ConfigurationError::require_range(None, None),
            Err(ConfigurationError::MissingRange)
        );
        assert_eq!(
            ConfigurationError::require_range(None, Some(1.0)),
            Err(ConfigurationError::MissingMin)
        );
        assert_eq!(
            ConfigurationError::require_range(Some(1.0), None),
            Err(ConfigurationError::MissingMax)
        );
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ConfigurationError::MissingRange.to_string(),
            "Minimum and maximum value range must be provided"
        );
        assert!(ConfigurationError::MissingMax
            .to_string()
            .starts_with("Minimum and maximum value range must be provided"));
    }
}
