//! Plotter bed geometry
//!
//! Describes the reachable area of the plotter, the coordinate format the
//! machine speaks, and the motor speed used for draw-time estimates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Coordinate format of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFormat {
    /// Rectangular X/Y bed
    Cartesian,
    /// Round sand table (radius derived from the bounds)
    Polar,
}

impl Default for CoordinateFormat {
    fn default() -> Self {
        Self::Cartesian
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartesian => write!(f, "cartesian"),
            Self::Polar => write!(f, "polar"),
        }
    }
}

impl FromStr for CoordinateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cartesian" | "xy" => Ok(Self::Cartesian),
            "polar" | "round" => Ok(Self::Polar),
            _ => Err(format!("Unknown coordinate format: {}", s)),
        }
    }
}

/// Bed bounds in bed coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum reachable X
    pub min_x: f64,
    /// Maximum reachable X
    pub max_x: f64,
    /// Minimum reachable Y
    pub min_y: f64,
    /// Maximum reachable Y
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from explicit limits
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds of a `width` x `height` bed with its corner at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    /// Width of the bed (`max_x - min_x`)
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bed (`max_y - min_y`)
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_size(400.0, 400.0)
    }
}

/// Geometry and units configuration for a plotter bed
///
/// Pure data. Call [`GeometryConfig::validate`] before generating a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Coordinate format of the machine
    #[serde(default)]
    pub format: CoordinateFormat,
    /// Reachable area
    pub bounds: Bounds,
    /// Unit label (display only)
    #[serde(default = "default_units")]
    pub units: String,
    /// Motor speed in units per minute (used for time estimation only)
    pub motor_speed: f64,
}

fn default_units() -> String {
    "mm".to_string()
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            format: CoordinateFormat::default(),
            bounds: Bounds::default(),
            units: default_units(),
            motor_speed: 1000.0,
        }
    }
}

impl GeometryConfig {
    /// Create a cartesian config with default units and motor speed
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Create a polar (round table) config
    pub fn polar(bounds: Bounds) -> Self {
        Self {
            format: CoordinateFormat::Polar,
            bounds,
            ..Self::default()
        }
    }

    /// Set the motor speed
    pub fn with_motor_speed(mut self, motor_speed: f64) -> Self {
        self.motor_speed = motor_speed;
        self
    }

    /// Set the unit label
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Bed width
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    /// Bed height
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Radius of the largest circle centered on the bed
    pub fn table_radius(&self) -> f64 {
        self.width().min(self.height()) / 2.0
    }

    /// Estimated draw time in minutes for the given distance
    pub fn estimate_draw_time(&self, distance: f64) -> f64 {
        distance / self.motor_speed
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        for (field, value) in [
            ("min_x", b.min_x),
            ("max_x", b.max_x),
            ("min_y", b.min_y),
            ("max_y", b.max_y),
            ("motor_speed", self.motor_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if b.max_x <= b.min_x {
            return Err(ConfigError::InvalidBounds {
                axis: "x",
                min: b.min_x,
                max: b.max_x,
            });
        }

        if b.max_y <= b.min_y {
            return Err(ConfigError::InvalidBounds {
                axis: "y",
                min: b.min_y,
                max: b.max_y,
            });
        }

        if self.motor_speed <= 0.0 {
            return Err(ConfigError::InvalidMotorSpeed {
                value: self.motor_speed,
            });
        }

        Ok(())
    }
}
