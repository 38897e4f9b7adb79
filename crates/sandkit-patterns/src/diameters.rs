use sandkit_core::{GeometryConfig, Path, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{ParameterError, ParameterResult, PatternResult};
use crate::generator::{mismatch, prepare, PatternGenerator};
use crate::params::{ParamDomain, ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec};

pub const KEY: &str = "diameters";

/// Parameters for the diameters pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiametersParams {
    /// Number of distinct diameters, 2 to 60
    pub num_spokes: i64,
}

impl Default for DiametersParams {
    fn default() -> Self {
        Self { num_spokes: 12 }
    }
}

impl ParameterSet for DiametersParams {
    fn specs() -> Vec<ParamSpec> {
        vec![ParamSpec::new(
            "num_spokes",
            "Spokes",
            ParamDomain::Integer { min: 2, max: 60 },
            12i64,
        )]
    }

    fn values(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("num_spokes", self.num_spokes.into())]
    }

    fn assign(&mut self, name: &str, value: ParamValue) -> ParameterResult<()> {
        match name {
            "num_spokes" => {
                self.num_spokes = value.as_i64().ok_or_else(|| ParameterError::TypeMismatch {
                    name: name.to_string(),
                    expected: "an integer",
                })?;
                Ok(())
            }
            _ => Err(ParameterError::Unknown {
                pattern: KEY.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

/// Generator for a pen sweeping back and forth across the bed center
#[derive(Debug, Default, Clone, Copy)]
pub struct DiametersGenerator;

impl DiametersGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the diameters path without validation.
    ///
    /// Step `s` lies on spoke `s / 2` at angle `(s / 2) · π / num_spokes`,
    /// at the table radius, on alternating sides of the center. The spokes
    /// cover one half turn, so every diameter is drawn once.
    pub fn diameters(&self, config: &GeometryConfig, p: &DiametersParams) -> Path {
        let radius = config.table_radius();
        let spokes = p.num_spokes.max(0) as usize;
        let spacing = PI / spokes as f64;

        let mut path = Path::with_capacity(spokes * 2);
        let mut step = 0usize;
        while step / 2 < spokes {
            let theta = (step / 2) as f64 * spacing;
            let sign = if step % 2 == 0 { 1.0 } else { -1.0 };
            path.push(Point::new(
                sign * radius * theta.cos(),
                sign * radius * theta.sin(),
            ));
            step += 1;
        }
        path
    }
}

impl PatternGenerator for DiametersGenerator {
    fn spec(&self) -> PatternSpec {
        PatternSpec {
            key: KEY,
            name: "Diameters",
            parameters: DiametersParams::specs(),
        }
    }

    fn default_params(&self) -> PatternParams {
        PatternParams::Diameters(DiametersParams::default())
    }

    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path> {
        let PatternParams::Diameters(p) = params else {
            return Err(mismatch(KEY, params));
        };
        prepare(config, p)?;
        let path = self.diameters(config, p);
        tracing::debug!(
            "Generated {} diameters: {} points, distance {:.2}",
            p.num_spokes,
            path.len(),
            path.distance()
        );
        Ok(path)
    }
}
