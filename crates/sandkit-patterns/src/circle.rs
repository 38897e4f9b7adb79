use sandkit_core::{GeometryConfig, Path, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParameterError, ParameterResult, PatternResult};
use crate::generator::{mismatch, prepare, PatternGenerator};
use crate::params::{
    check_values, ParamDomain, ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec,
};

pub const KEY: &str = "circle";

/// Number of straight sides used to approximate the circle
pub const CIRCLE_SIDES: usize = 60;

/// Direction of travel around the circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    /// Counter-clockwise (+1)
    #[default]
    Ccw,
    /// Clockwise (-1)
    Cw,
}

impl RotationDirection {
    pub fn sign(self) -> f64 {
        match self {
            Self::Ccw => 1.0,
            Self::Cw => -1.0,
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ccw => write!(f, "ccw"),
            Self::Cw => write!(f, "cw"),
        }
    }
}

impl FromStr for RotationDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ccw" | "+1" | "1" => Ok(Self::Ccw),
            "cw" | "-1" => Ok(Self::Cw),
            _ => Err(format!("Unknown rotation direction: {}", s)),
        }
    }
}

/// Parameters for the circle pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Center X (centered coordinates)
    pub center_x: f64,
    /// Center Y (centered coordinates)
    pub center_y: f64,
    pub radius: f64,
    /// Start angle in radians, in `[0, 2π)`
    pub start_theta: f64,
    pub direction: RotationDirection,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius: 100.0,
            start_theta: 0.0,
            direction: RotationDirection::Ccw,
        }
    }
}

impl ParameterSet for CircleParams {
    fn specs() -> Vec<ParamSpec> {
        let coordinate = ParamDomain::Real {
            min: -10_000.0,
            max: 10_000.0,
        };
        vec![
            ParamSpec::new("center_x", "Center X", coordinate, 0.0),
            ParamSpec::new("center_y", "Center Y", coordinate, 0.0),
            ParamSpec::new(
                "radius",
                "Radius",
                ParamDomain::Real {
                    min: 0.0,
                    max: 10_000.0,
                },
                100.0,
            ),
            ParamSpec::new(
                "start_theta",
                "Start angle (rad)",
                ParamDomain::Real { min: 0.0, max: TAU },
                0.0,
            ),
            ParamSpec::new(
                "direction",
                "Rotation",
                ParamDomain::Choice(&["ccw", "cw"]),
                "ccw",
            ),
        ]
    }

    fn values(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("center_x", self.center_x.into()),
            ("center_y", self.center_y.into()),
            ("radius", self.radius.into()),
            ("start_theta", self.start_theta.into()),
            ("direction", self.direction.to_string().into()),
        ]
    }

    fn assign(&mut self, name: &str, value: ParamValue) -> ParameterResult<()> {
        let number = || {
            value.as_f64().ok_or_else(|| ParameterError::TypeMismatch {
                name: name.to_string(),
                expected: "a number",
            })
        };
        match name {
            "center_x" => self.center_x = number()?,
            "center_y" => self.center_y = number()?,
            "radius" => self.radius = number()?,
            "start_theta" => self.start_theta = number()?,
            "direction" => {
                self.direction = value
                    .as_str()
                    .unwrap_or_default()
                    .parse()
                    .map_err(|reason| ParameterError::InvalidValue {
                        name: name.to_string(),
                        reason,
                    })?
            }
            _ => {
                return Err(ParameterError::Unknown {
                    pattern: KEY.to_string(),
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    fn validate(&self) -> ParameterResult<()> {
        check_values(&Self::specs(), &self.values())?;
        // The full turn itself is excluded.
        if self.start_theta >= TAU {
            return Err(ParameterError::OutOfRange {
                name: "start_theta".to_string(),
                value: self.start_theta,
                min: 0.0,
                max: TAU,
            });
        }
        Ok(())
    }
}

/// Generator for a single revolution around a center point
#[derive(Debug, Default, Clone, Copy)]
pub struct CircleGenerator;

impl CircleGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the circle path without validation.
    ///
    /// Point `i` sits at `dir * (start_theta + i/sides * 2π)`; the duplicate
    /// endpoint at a full revolution is not emitted.
    pub fn circle(&self, p: &CircleParams) -> Path {
        let mut path = Path::with_capacity(CIRCLE_SIDES);
        let sign = p.direction.sign();
        for i in 0..CIRCLE_SIDES {
            let theta = sign * (p.start_theta + (i as f64 / CIRCLE_SIDES as f64) * TAU);
            path.push(Point::new(
                p.center_x + p.radius * theta.cos(),
                p.center_y + p.radius * theta.sin(),
            ));
        }
        path
    }
}

impl PatternGenerator for CircleGenerator {
    fn spec(&self) -> PatternSpec {
        PatternSpec {
            key: KEY,
            name: "Circle",
            parameters: CircleParams::specs(),
        }
    }

    fn default_params(&self) -> PatternParams {
        PatternParams::Circle(CircleParams::default())
    }

    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path> {
        let PatternParams::Circle(p) = params else {
            return Err(mismatch(KEY, params));
        };
        prepare(config, p)?;
        let path = self.circle(p);
        tracing::debug!(
            "Generated circle: {} points, radius {:.2}, distance {:.2}",
            path.len(),
            p.radius,
            path.distance()
        );
        Ok(path)
    }
}
