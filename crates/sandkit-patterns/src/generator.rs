//! The pattern generator contract.

use sandkit_core::{GeometryConfig, Path};

use crate::error::{PatternError, PatternResult};
use crate::params::{ParameterSet, PatternParams, PatternSpec};

/// A pluggable algorithm that turns bed geometry plus parameters into a path.
///
/// Implementations are deterministic: the same config and parameters always
/// produce the same path. Points are in centered coordinates and depend only
/// on the geometry bounds.
pub trait PatternGenerator: Send + Sync {
    /// Identity and parameter table
    fn spec(&self) -> PatternSpec;

    /// Parameters loaded when the pattern is selected
    fn default_params(&self) -> PatternParams;

    /// Produces a path from validated inputs
    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path>;

    /// Registry key
    fn key(&self) -> &'static str {
        self.spec().key
    }
}

/// Error for parameters that belong to a different pattern.
pub(crate) fn mismatch(expected: &'static str, params: &PatternParams) -> PatternError {
    PatternError::ParamsMismatch {
        expected,
        found: params.key(),
    }
}

/// Validates config and parameters before a generator runs.
pub(crate) fn prepare<P: ParameterSet>(config: &GeometryConfig, params: &P) -> PatternResult<()> {
    config.validate()?;
    params.validate()?;
    Ok(())
}
