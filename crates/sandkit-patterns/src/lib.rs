//! # sandkit Patterns
//!
//! Parametric path generators for sand tables and polargraph plotters.
//!
//! ## Patterns Included
//!
//! - **Circle**: one revolution approximated by 60 sides
//! - **Spiral**: Archimedean spiral with optional twist, grown to the table radius
//! - **Diameters**: a pen sweeping back and forth through the bed center
//! - **Coordinate List**: literal `x,y` points
//! - **G-code Import**: the `G0`/`G1` moves of an existing program
//! - **Free Draw**: points collected from pointer drag events
//!
//! ## Supporting Infrastructure
//!
//! - **Parameters**: typed parameter sets with explicit domains
//! - **Registry**: pattern key to generator lookup
//! - **Session**: the active-pattern state machine

pub mod circle;
pub mod coordinate_list;
pub mod diameters;
pub mod error;
pub mod free_draw;
pub mod gcode_import;
pub mod generator;
pub mod params;
pub mod registry;
pub mod session;
pub mod spiral;

pub use circle::{CircleGenerator, CircleParams, RotationDirection, CIRCLE_SIDES};
pub use coordinate_list::{parse_coordinates, CoordinateListGenerator, CoordinateListParams};
pub use diameters::{DiametersGenerator, DiametersParams};
pub use error::{ParameterError, ParameterResult, PatternError, PatternResult};
pub use free_draw::{FreeDrawGenerator, FreeDrawParams};
pub use gcode_import::{parse_gcode, GcodeImportGenerator, GcodeImportParams};
pub use generator::PatternGenerator;
pub use params::{ParamDomain, ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec};
pub use registry::PatternRegistry;
pub use session::PatternSession;
pub use spiral::{SpiralGenerator, SpiralParams, MAX_SPIRAL_STEPS};
