//! Renderer-independent preview scene.
//!
//! A [`PreviewScene`] is everything a renderer needs to draw one frame of a
//! path preview, already in screen pixels.

use sandkit_core::{BoundaryReport, CoordinateFormat, GeometryConfig, Path, Point};
use serde::{Deserialize, Serialize};

use crate::viewport::{ScreenPoint, Viewport};

/// Styling of the bed outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineStyle {
    #[default]
    Normal,
    /// At least one path point lies outside the plottable area
    Exceeded,
}

/// Plottable region of the machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum PlotArea {
    Rect {
        top_left: ScreenPoint,
        width: f64,
        height: f64,
    },
    Circle {
        center: ScreenPoint,
        radius: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Start,
    Current,
    End,
}

/// A point of interest along the polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: ScreenPoint,
}

/// One preview frame in screen space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewScene {
    /// Bed corners, clockwise from top-left
    pub outline: [ScreenPoint; 4],
    pub outline_style: OutlineStyle,
    pub plot_area: PlotArea,
    pub polyline: Vec<ScreenPoint>,
    pub markers: Vec<Marker>,
    /// Indices of path points outside the plottable area
    pub exceeded: Vec<usize>,
}

impl PreviewScene {
    /// Builds the scene for `path`.
    ///
    /// `current` is the index of the point the machine is drawing, if any;
    /// an index past the end of the path is ignored.
    pub fn build(
        config: &GeometryConfig,
        path: &Path,
        viewport: &Viewport,
        current: Option<usize>,
    ) -> Self {
        let b = &config.bounds;
        let outline = [
            viewport.bed_to_screen(Point::new(b.min_x, b.max_y)),
            viewport.bed_to_screen(Point::new(b.max_x, b.max_y)),
            viewport.bed_to_screen(Point::new(b.max_x, b.min_y)),
            viewport.bed_to_screen(Point::new(b.min_x, b.min_y)),
        ];

        let plot_area = match config.format {
            CoordinateFormat::Cartesian => PlotArea::Rect {
                top_left: outline[0],
                width: viewport.scale_length(b.width()),
                height: viewport.scale_length(b.height()),
            },
            CoordinateFormat::Polar => PlotArea::Circle {
                center: viewport.centered_to_screen(config, Point::origin()),
                radius: viewport.scale_length(config.table_radius()),
            },
        };

        let polyline: Vec<ScreenPoint> = path
            .iter()
            .map(|&p| viewport.centered_to_screen(config, p))
            .collect();

        let mut markers = Vec::with_capacity(3);
        if let (Some(first), Some(last)) = (polyline.first(), polyline.last()) {
            markers.push(Marker {
                kind: MarkerKind::Start,
                position: *first,
            });
            if let Some(position) = current.and_then(|i| polyline.get(i)) {
                markers.push(Marker {
                    kind: MarkerKind::Current,
                    position: *position,
                });
            }
            markers.push(Marker {
                kind: MarkerKind::End,
                position: *last,
            });
        }

        let report = BoundaryReport::check(config, path);
        let outline_style = if report.any() {
            OutlineStyle::Exceeded
        } else {
            OutlineStyle::Normal
        };
        tracing::trace!(
            "Built preview scene: {} points, {} exceeded",
            polyline.len(),
            report.count()
        );

        Self {
            outline,
            outline_style,
            plot_area,
            polyline,
            markers,
            exceeded: report.exceeded_indices().to_vec(),
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.outline_style == OutlineStyle::Exceeded
    }

    pub fn marker(&self, kind: MarkerKind) -> Option<ScreenPoint> {
        self.markers
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.position)
    }
}
