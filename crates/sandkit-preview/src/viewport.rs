//! Viewport mapping between bed coordinates and screen pixels.
//!
//! Bed coordinates have (0,0) at the lower-left corner with +Y up. Screen
//! coordinates have (0,0) at the top-left with +Y down. The mapping is a
//! uniform scale plus a translation:
//!
//! ```text
//! screen_x = bed_x * zoom + pan_x
//! screen_y = canvas_height - (bed_y * zoom + pan_y)
//! ```

use sandkit_core::{bed_to_centered, centered_to_bed, Bounds, GeometryConfig, Point};
use serde::{Deserialize, Serialize};

/// Pixels kept free around the bed when fitting
pub const DEFAULT_MARGIN: f64 = 5.0;

/// A position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scale and offset of the bed inside a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a 1:1 viewport with the bed origin at the bottom-left margin.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: DEFAULT_MARGIN,
            pan_y: DEFAULT_MARGIN,
            canvas_width,
            canvas_height,
        }
    }

    /// Creates a viewport that fits the whole bed into the canvas.
    pub fn fit(config: &GeometryConfig, canvas_width: f64, canvas_height: f64) -> Self {
        let mut viewport = Self::new(canvas_width, canvas_height);
        viewport.fit_to_bounds(&config.bounds, DEFAULT_MARGIN);
        viewport
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions.
    ///
    /// Call [`fit_to_bounds`](Self::fit_to_bounds) afterwards to refit.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Pixels per bed unit
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Scales and centers `bounds` inside the canvas, leaving `margin`
    /// pixels on the tighter axis.
    ///
    /// Degenerate bounds, or a canvas too small for the margin, leave the
    /// viewport unchanged.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, margin: f64) {
        let width = bounds.width();
        let height = bounds.height();
        let available_w = self.canvas_width - 2.0 * margin;
        let available_h = self.canvas_height - 2.0 * margin;
        if width <= 0.0 || height <= 0.0 || available_w <= 0.0 || available_h <= 0.0 {
            tracing::debug!(
                "Skipping viewport fit: bed {}x{}, canvas {}x{}",
                width,
                height,
                self.canvas_width,
                self.canvas_height
            );
            return;
        }

        let zoom = (available_w / width).min(available_h / height);
        let content_w = width * zoom;
        let content_h = height * zoom;
        let left = (self.canvas_width - content_w) / 2.0;
        let top = (self.canvas_height - content_h) / 2.0;

        self.zoom = zoom;
        self.pan_x = left - bounds.min_x * zoom;
        self.pan_y = self.canvas_height - top - content_h - bounds.min_y * zoom;
    }

    /// Bed coordinates to screen pixels
    pub fn bed_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            point.x * self.zoom + self.pan_x,
            self.canvas_height - (point.y * self.zoom + self.pan_y),
        )
    }

    /// Screen pixels to bed coordinates
    pub fn screen_to_bed(&self, point: ScreenPoint) -> Point {
        Point::new(
            (point.x - self.pan_x) / self.zoom,
            (self.canvas_height - point.y - self.pan_y) / self.zoom,
        )
    }

    pub fn centered_to_screen(&self, config: &GeometryConfig, point: Point) -> ScreenPoint {
        self.bed_to_screen(centered_to_bed(config, point))
    }

    /// Screen pixels to centered coordinates, as fed to free drawing
    pub fn screen_to_centered(&self, config: &GeometryConfig, point: ScreenPoint) -> Point {
        bed_to_centered(config, self.screen_to_bed(point))
    }

    /// A bed length in pixels
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.zoom
    }
}
