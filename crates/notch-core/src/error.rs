//! Slider configuration error types

use thiserror::Error;

/// Errors raised when a setter would break a slider invariant
///
/// These are configuration mistakes, not runtime data errors. The setter that
/// returns one leaves the slider untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    /// Minimum is not strictly lower than maximum (or one of them is NaN)
    #[error("minimum value {minimum} must be lower than maximum value {maximum}")]
    InvalidRange { minimum: f64, maximum: f64 },

    /// A value that must be strictly positive was zero, negative or NaN
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A value that must not be negative was negative or NaN
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// Result type for slider configuration
pub type SliderResult<T> = Result<T, SliderError>;

/// Reject anything that is not `> 0`
pub(crate) fn require_positive(name: &'static str, value: f64) -> SliderResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SliderError::NonPositive { name, value })
    }
}

/// Reject anything that is not `>= 0`
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> SliderResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(SliderError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("thumb size", 32.0), Ok(32.0));
        assert!(require_positive("thumb size", 0.0).is_err());
        assert!(require_positive("thumb size", f64::NAN).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("border width", 0.0), Ok(0.0));
        assert_eq!(
            require_non_negative("border width", -1.0),
            Err(SliderError::Negative {
                name: "border width",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = SliderError::InvalidRange {
            minimum: 10.0,
            maximum: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "minimum value 10 must be lower than maximum value 5"
        );
    }
}
