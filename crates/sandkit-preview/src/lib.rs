//! # sandkit Preview
//!
//! Screen-space data for drawing a path preview: the [`Viewport`] mapping
//! between bed and screen coordinates, and the [`PreviewScene`] handed to a
//! renderer. Nothing here draws.

pub mod scene;
pub mod viewport;

pub use scene::{Marker, MarkerKind, OutlineStyle, PlotArea, PreviewScene};
pub use viewport::{ScreenPoint, Viewport, DEFAULT_MARGIN};
