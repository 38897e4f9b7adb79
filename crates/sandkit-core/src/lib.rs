//! # sandkit Core
//!
//! Core types for sandkit: the plotter bed geometry, the common [`Path`]
//! produced by every pattern generator, the explicit distance accumulator,
//! and the transforms between centered and bed coordinates.

pub mod error;
pub mod geometry;
pub mod path;
pub mod transform;

pub use error::{ConfigError, ParseError};
pub use geometry::{Bounds, CoordinateFormat, GeometryConfig};
pub use path::{DistanceAccumulator, Path, Point};
pub use transform::{
    bed_to_centered, centered_to_bed, is_centered_exceeded, is_exceeded, path_to_bed,
    BoundaryReport,
};
