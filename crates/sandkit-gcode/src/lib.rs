//! # sandkit G-code
//!
//! Turns a centered [`Path`](sandkit_core::Path) into a G-code program:
//! a commented header, a user start block, one motion line per point in bed
//! coordinates, and a user finish block.

pub mod command;
pub mod error;
pub mod exporter;
pub mod program;

pub use command::{MotionCommand, UnknownCommand};
pub use error::{ExportError, ExportResult};
pub use exporter::{format_coordinate, GcodeExporter, PatternMetadata, FIXED_HEADER_LINES};
pub use program::GcodeProgram;
