//! Error handling for sandkit
//!
//! Provides the errors shared by every layer of the pipeline:
//! - Config errors (invalid bed geometry, rejected before generation)
//! - Parse errors (malformed coordinate-list or G-code input)
//!
//! Higher crates wrap both in their own error enums.
//!
//! A point outside the bed is not an error; it is reported by
//! [`crate::transform::BoundaryReport`].
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry configuration error type
///
/// Raised by [`crate::GeometryConfig::validate`] before any path is generated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Bounds on one axis are empty or inverted
    #[error("Invalid {axis} bounds: max ({max}) must be greater than min ({min})")]
    InvalidBounds {
        /// The axis name ("x" or "y").
        axis: &'static str,
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },

    /// A numeric field is NaN or infinite
    #[error("Configuration field '{field}' must be a finite number")]
    NonFinite {
        /// The offending field name.
        field: &'static str,
    },

    /// Motor speed is zero or negative
    #[error("Motor speed must be > 0, got {value}")]
    InvalidMotorSpeed {
        /// The configured motor speed.
        value: f64,
    },
}

/// Parse error type
///
/// Reported for the first malformed line of a coordinate list or G-code text.
/// Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Parse error at line {line} ('{content}'): {reason}")]
pub struct ParseError {
    /// The 1-based line number.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    /// Why the line was rejected.
    pub reason: String,
}

impl ParseError {
    /// Create a parse error for the given line
    pub fn new(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidBounds {
            axis: "x",
            min: 10.0,
            max: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid x bounds: max (5) must be greater than min (10)"
        );

        let err = ConfigError::InvalidMotorSpeed { value: 0.0 };
        assert_eq!(err.to_string(), "Motor speed must be > 0, got 0");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(3, "10;20", "expected 'x,y'");
        assert_eq!(
            err.to_string(),
            "Parse error at line 3 ('10;20'): expected 'x,y'"
        );
    }
}
