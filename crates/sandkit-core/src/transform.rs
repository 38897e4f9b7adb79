//! Coordinate transforms between centered and bed space.
//!
//! Generators work in centered coordinates (origin at the bed center). The
//! exporter and the boundary checks work in bed coordinates (origin at the
//! bed's lower-left corner, as the firmware expects):
//!
//! ```text
//! bed_x = centered_x + (max_x - min_x) / 2
//! bed_y = centered_y + (max_y - min_y) / 2
//! ```

use crate::geometry::{CoordinateFormat, GeometryConfig};
use crate::path::{Path, Point};

const RADIUS_TOLERANCE: f64 = 1e-9;

/// Converts a centered point to bed coordinates.
pub fn centered_to_bed(config: &GeometryConfig, point: Point) -> Point {
    Point::new(
        point.x + config.width() / 2.0,
        point.y + config.height() / 2.0,
    )
}

/// Converts a bed point to centered coordinates.
pub fn bed_to_centered(config: &GeometryConfig, point: Point) -> Point {
    Point::new(
        point.x - config.width() / 2.0,
        point.y - config.height() / 2.0,
    )
}

/// Converts every point of a centered path to bed coordinates.
pub fn path_to_bed(config: &GeometryConfig, path: &Path) -> Vec<Point> {
    path.iter().map(|p| centered_to_bed(config, *p)).collect()
}

/// True when a bed point lies outside the bounds. Bounds are inclusive.
pub fn is_exceeded(config: &GeometryConfig, bed_point: Point) -> bool {
    let b = &config.bounds;
    bed_point.x < b.min_x || bed_point.x > b.max_x || bed_point.y < b.min_y || bed_point.y > b.max_y
}

/// True when a centered point is off the bed for the configured format.
///
/// Polar tables also reject points beyond the table radius.
pub fn is_centered_exceeded(config: &GeometryConfig, point: Point) -> bool {
    if is_exceeded(config, centered_to_bed(config, point)) {
        return true;
    }
    match config.format {
        CoordinateFormat::Cartesian => false,
        CoordinateFormat::Polar => point.radius() > config.table_radius() + RADIUS_TOLERANCE,
    }
}

/// Points of a path that fall outside the bed.
///
/// This is a warning for the renderer, never a reason to refuse generation
/// or export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryReport {
    exceeded: Vec<usize>,
}

impl BoundaryReport {
    /// Checks every point of a centered path.
    pub fn check(config: &GeometryConfig, path: &Path) -> Self {
        let exceeded = path
            .iter()
            .enumerate()
            .filter(|(_, p)| is_centered_exceeded(config, **p))
            .map(|(i, _)| i)
            .collect();
        Self { exceeded }
    }

    /// True if any point is off the bed.
    pub fn any(&self) -> bool {
        !self.exceeded.is_empty()
    }

    /// Indices of the offending points, in path order.
    pub fn exceeded_indices(&self) -> &[usize] {
        &self.exceeded
    }

    pub fn count(&self) -> usize {
        self.exceeded.len()
    }
}
