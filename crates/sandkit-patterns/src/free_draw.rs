//! Free-hand drawing from pointer drag events.
//!
//! The drawing starts as the sentinel path `[(0, 0)]`. The first drag point
//! inside the bed replaces the sentinel; later points are appended. Points
//! outside the bed are ignored, both when dragged and when a stored point
//! list is replayed.

use sandkit_core::{is_centered_exceeded, GeometryConfig, Path, Point};
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult, PatternResult};
use crate::generator::{mismatch, prepare, PatternGenerator};
use crate::params::{ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec};

pub const KEY: &str = "free_draw";

/// Parameters for the free-draw pattern: the points drawn so far
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeDrawParams {
    /// Drawn points in centered coordinates
    pub points: Vec<Point>,
}

impl FreeDrawParams {
    /// Applies a drag event. Returns true if the point was recorded.
    pub fn drag_to(&mut self, config: &GeometryConfig, point: Point) -> bool {
        if !point.x.is_finite() || !point.y.is_finite() || is_centered_exceeded(config, point) {
            return false;
        }
        if self.points.len() == 1 && self.points[0] == Point::origin() {
            self.points[0] = point;
        } else {
            self.points.push(point);
        }
        true
    }

    /// Returns to the sentinel drawing.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl ParameterSet for FreeDrawParams {
    fn specs() -> Vec<ParamSpec> {
        Vec::new()
    }

    fn values(&self) -> Vec<(&'static str, ParamValue)> {
        Vec::new()
    }

    fn assign(&mut self, name: &str, _value: ParamValue) -> ParameterResult<()> {
        Err(ParameterError::Unknown {
            pattern: KEY.to_string(),
            name: name.to_string(),
        })
    }

    fn validate(&self) -> ParameterResult<()> {
        if let Some(index) = self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(ParameterError::InvalidValue {
                name: "points".to_string(),
                reason: format!("point {} is not a finite coordinate pair", index + 1),
            });
        }
        Ok(())
    }

    fn entries(&self) -> Vec<(String, String)> {
        vec![("points".to_string(), self.points.len().to_string())]
    }
}

fn sentinel() -> Path {
    vec![Point::origin()].into()
}

/// Replays points the way drag events record them.
fn replay(config: &GeometryConfig, points: &[Point]) -> Path {
    let mut path = sentinel();
    for &point in points {
        if is_centered_exceeded(config, point) {
            tracing::debug!(
                "Dropping free-draw point ({}, {}) outside the bed",
                point.x,
                point.y
            );
            continue;
        }
        if path.is_sentinel() {
            path.replace_last(point);
        } else {
            path.push(point);
        }
    }
    path
}

/// Generator that replays free-drawn points
#[derive(Debug, Default, Clone, Copy)]
pub struct FreeDrawGenerator;

impl FreeDrawGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PatternGenerator for FreeDrawGenerator {
    fn spec(&self) -> PatternSpec {
        PatternSpec {
            key: KEY,
            name: "Free Draw",
            parameters: FreeDrawParams::specs(),
        }
    }

    fn default_params(&self) -> PatternParams {
        PatternParams::FreeDraw(FreeDrawParams::default())
    }

    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path> {
        let PatternParams::FreeDraw(p) = params else {
            return Err(mismatch(KEY, params));
        };
        prepare(config, p)?;
        Ok(replay(config, &p.points))
    }
}
