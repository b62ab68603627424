//! Error types for geomly operations.
//!
//! Construction and parameter validation return these instead of relying on
//! debug-only assertions, so release builds keep the same checks.

use std::fmt;

/// Errors that can occur while building or querying geometric primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Bounding-box corners that do not satisfy `min <= max` on every axis,
    /// or contain NaN.
    InvalidBounds {
        /// Human-readable error message.
        message: String,
    },
    /// A curve/segment parameter outside its documented domain.
    ParameterOutOfRange {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidBounds { message } => {
                write!(f, "Invalid bounds: {}", message)
            }
            GeometryError::ParameterOutOfRange { message } => {
                write!(f, "Parameter out of range: {}", message)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type alias for geomly operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Creates an invalid-bounds error.
pub fn invalid_bounds(message: impl Into<String>) -> GeometryError {
    GeometryError::InvalidBounds {
        message: message.into(),
    }
}

/// Creates a parameter-out-of-range error.
pub fn parameter_out_of_range(message: impl Into<String>) -> GeometryError {
    GeometryError::ParameterOutOfRange {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_display() {
        let error = invalid_bounds("min (2, 0, 0) exceeds max (1, 1, 1) on axis x");
        let display = format!("{}", error);
        assert!(display.contains("Invalid bounds"));
        assert!(display.contains("axis x"));
    }

    #[test]
    fn test_parameter_out_of_range_display() {
        let error = parameter_out_of_range("t = -0.5 but rays only extend forward");
        let display = format!("{}", error);
        assert!(display.contains("Parameter out of range"));
        assert!(display.contains("-0.5"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = invalid_bounds("test");
        let error2 = invalid_bounds("test");
        let error3 = parameter_out_of_range("test");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = invalid_bounds("test error");

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
