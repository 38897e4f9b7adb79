//! Path model shared by every pattern generator.
//!
//! A [`Path`] is an ordered list of points in centered coordinates together
//! with its own traversed length. Totals across several generations are kept
//! in a [`DistanceAccumulator`] owned by the caller.

use serde::{Deserialize, Serialize};

/// A 2D point in centered coordinates (origin at the bed center).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, also used as the free-draw sentinel.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered sequence of points plus the length travelled along them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
    distance: f64,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            distance: 0.0,
        }
    }

    /// Appends a point, adding the segment from the previous point to the distance.
    pub fn push(&mut self, point: Point) {
        if let Some(last) = self.points.last() {
            self.distance += last.distance_to(&point);
        }
        self.points.push(point);
    }

    /// Replaces the last point (or pushes if empty), keeping the distance consistent.
    pub fn replace_last(&mut self, point: Point) {
        if self.points.pop().is_some() {
            self.distance = total_distance(&self.points);
        }
        self.push(point);
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the points in drawing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Sum of the Euclidean distances between consecutive points.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the same points in reverse order.
    pub fn reversed(&self) -> Self {
        self.points.iter().rev().copied().collect()
    }

    /// True when the path is exactly the free-draw sentinel `[(0, 0)]`.
    pub fn is_sentinel(&self) -> bool {
        self.points.len() == 1 && self.points[0] == Point::origin()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut path = Path::new();
        for point in iter {
            path.push(point);
        }
        path
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        let distance = total_distance(&points);
        Self { points, distance }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn total_distance(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

/// Running total of path distance across several generations.
///
/// The owner decides when a measurement starts: call [`reset`](Self::reset)
/// between independent measurements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistanceAccumulator {
    total: f64,
}

impl DistanceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw distance.
    pub fn add(&mut self, distance: f64) {
        self.total += distance;
    }

    /// Adds the length of a path.
    pub fn add_path(&mut self, path: &Path) {
        self.add(path.distance());
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Starts a new measurement.
    pub fn reset(&mut self) {
        self.total = 0.0;
    }
}
