// ============================================================================
// Numeric Errors
// Error kinds surfaced by arithmetic, conversion and random generation
// ============================================================================

use std::fmt;

/// Errors that can occur across the numeric toolkit.
///
/// Clamp/CastClamp conversions and rejection-sampling redraws are normal
/// control flow and never produce one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the destination's maximum value
    Overflow,
    /// Result below the destination's minimum value
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string or byte buffer is invalid
    InvalidInput,
    /// Argument outside its documented domain (rounding digits, random
    /// bounds, shift counts)
    ArgumentOutOfRange,
    /// Unrecognized discriminant for a mode enum
    InvalidMode,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ArgumentOutOfRange => {
                write!(f, "argument out of range")
            },
            NumericError::InvalidMode => write!(f, "invalid mode discriminant"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::ArgumentOutOfRange.to_string(),
            "argument out of range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&NumericError::InvalidMode);
    }
}
