//! Archimedean spiral growing from the bed center.
//!
//! At step `s` the angle is `θ = (s / sides) · 2π` and the radius is
//! `r = offset · θ / 2π`, so the spiral grows by `offset` per revolution.
//! Generation stops once `r` reaches the table radius. `twist` multiplies
//! the drawn angle, distorting the spiral into a flower-like shape.

use sandkit_core::{GeometryConfig, Path, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{ParameterError, ParameterResult, PatternResult};
use crate::generator::{mismatch, prepare, PatternGenerator};
use crate::params::{ParamDomain, ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec};

pub const KEY: &str = "spiral";

/// Hard limit on spiral steps; tiny offsets would otherwise take forever
pub const MAX_SPIRAL_STEPS: usize = 200_000;

/// Parameters for the spiral pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    /// Radius growth per revolution
    pub offset: f64,
    /// Steps per revolution
    pub sides: i64,
    /// Angular multiplier
    pub twist: f64,
    /// Draw from the outside in
    pub reverse: bool,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            offset: 10.0,
            sides: 60,
            twist: 1.0,
            reverse: false,
        }
    }
}

impl ParameterSet for SpiralParams {
    fn specs() -> Vec<ParamSpec> {
        vec![
            ParamSpec::new(
                "offset",
                "Offset per revolution",
                ParamDomain::Real {
                    min: 0.0,
                    max: 1000.0,
                },
                10.0,
            ),
            ParamSpec::new(
                "sides",
                "Steps per revolution",
                ParamDomain::Integer { min: 3, max: 720 },
                60i64,
            ),
            ParamSpec::new(
                "twist",
                "Twist",
                ParamDomain::Real {
                    min: -10.0,
                    max: 10.0,
                },
                1.0,
            ),
            ParamSpec::new("reverse", "Reverse", ParamDomain::Boolean, false),
        ]
    }

    fn values(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("offset", self.offset.into()),
            ("sides", self.sides.into()),
            ("twist", self.twist.into()),
            ("reverse", self.reverse.into()),
        ]
    }

    fn assign(&mut self, name: &str, value: ParamValue) -> ParameterResult<()> {
        let wrong_type = |expected| ParameterError::TypeMismatch {
            name: name.to_string(),
            expected,
        };
        match name {
            "offset" => self.offset = value.as_f64().ok_or_else(|| wrong_type("a number"))?,
            "sides" => self.sides = value.as_i64().ok_or_else(|| wrong_type("an integer"))?,
            "twist" => self.twist = value.as_f64().ok_or_else(|| wrong_type("a number"))?,
            "reverse" => self.reverse = value.as_bool().ok_or_else(|| wrong_type("a boolean"))?,
            _ => {
                return Err(ParameterError::Unknown {
                    pattern: KEY.to_string(),
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// Generator for an outward spiral
#[derive(Debug, Default, Clone, Copy)]
pub struct SpiralGenerator;

impl SpiralGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the spiral path without validation.
    ///
    /// A zero offset never grows, so it yields the single center point.
    pub fn spiral(&self, config: &GeometryConfig, p: &SpiralParams) -> Path {
        let max_r = config.table_radius();
        let sides = p.sides as f64;
        let mut path = Path::new();

        let mut step = 0usize;
        loop {
            let theta = (step as f64 / sides) * TAU;
            let r = p.offset * (theta / TAU);
            if r >= max_r {
                break;
            }
            let angle = theta * p.twist;
            path.push(Point::new(r * angle.cos(), r * angle.sin()));

            if p.offset == 0.0 {
                break;
            }
            step += 1;
            if step >= MAX_SPIRAL_STEPS {
                tracing::warn!(
                    "Spiral stopped after {} steps at radius {:.3} of {:.3}",
                    MAX_SPIRAL_STEPS,
                    r,
                    max_r
                );
                break;
            }
        }

        if p.reverse {
            path.reversed()
        } else {
            path
        }
    }
}

impl PatternGenerator for SpiralGenerator {
    fn spec(&self) -> PatternSpec {
        PatternSpec {
            key: KEY,
            name: "Spiral",
            parameters: SpiralParams::specs(),
        }
    }

    fn default_params(&self) -> PatternParams {
        PatternParams::Spiral(SpiralParams::default())
    }

    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path> {
        let PatternParams::Spiral(p) = params else {
            return Err(mismatch(KEY, params));
        };
        prepare(config, p)?;
        let path = self.spiral(config, p);
        tracing::debug!(
            "Generated spiral: {} points, distance {:.2}",
            path.len(),
            path.distance()
        );
        Ok(path)
    }
}
