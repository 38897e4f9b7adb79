//! Error types for the pattern crate.
//!
//! This module provides structured error types for pattern generation,
//! parameter validation, and pattern selection.

use sandkit_core::{ConfigError, ParseError};
use thiserror::Error;

/// Errors that can occur while generating a pattern.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The bed geometry is invalid.
    #[error("Invalid geometry: {0}")]
    Config(#[from] ConfigError),

    /// Free-text input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A parameter failed validation.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// No generator is registered under the requested key.
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// Parameters for one pattern were handed to another pattern's generator.
    #[error("Pattern '{expected}' cannot use parameters for '{found}'")]
    ParamsMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors related to pattern parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The pattern has no parameter with this name.
    #[error("Pattern '{pattern}' has no parameter '{name}'")]
    Unknown { pattern: String, name: String },

    /// A numeric value is outside its domain.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A value is not acceptable for its parameter.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// A value has the wrong type for its parameter.
    #[error("Parameter '{name}' expects {expected}")]
    TypeMismatch { name: String, expected: &'static str },
}

/// Result type alias for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
