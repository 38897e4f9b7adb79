//! Export errors.

use sandkit_core::ConfigError;
use thiserror::Error;

/// Errors raised before any G-code is written
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The bed geometry is invalid
    #[error("Invalid geometry: {0}")]
    Config(#[from] ConfigError),

    /// A path point has a NaN or infinite coordinate
    #[error("Point {index} ({x}, {y}) is not a finite coordinate pair")]
    NonFinitePoint { index: usize, x: f64, y: f64 },
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
