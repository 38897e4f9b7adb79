//! G-code generation from centered paths.

use chrono::{Local, NaiveDateTime};
use sandkit_core::{centered_to_bed, BoundaryReport, GeometryConfig, Path};
use sandkit_patterns::{PatternParams, PatternSpec};

use crate::command::MotionCommand;
use crate::error::{ExportError, ExportResult};
use crate::program::GcodeProgram;

/// Header lines present in every export, before and after the parameter lines
pub const FIXED_HEADER_LINES: usize = 8;

/// Pattern name and parameter entries written into the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMetadata {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl PatternMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Metadata for a registered pattern and its current parameters
    pub fn from_params(spec: &PatternSpec, params: &PatternParams) -> Self {
        Self {
            name: spec.name.to_string(),
            entries: params.entries(),
        }
    }
}

/// G-code exporter for sand tables and polargraph plotters.
///
/// Points are converted from centered to bed coordinates and written as
/// `<command> X<x> Y<y>` with two decimals.
#[derive(Debug, Clone, Default)]
pub struct GcodeExporter {
    command: MotionCommand,
    start_block: Vec<String>,
    finish_block: Vec<String>,
    timestamp: Option<NaiveDateTime>,
}

impl GcodeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, command: MotionCommand) -> Self {
        self.command = command;
        self
    }

    /// Lines emitted after the header, before any motion
    pub fn with_start_block<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.start_block = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Lines emitted after the last motion line
    pub fn with_finish_block<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.finish_block = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Pins the header timestamp instead of using the local clock
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn command(&self) -> MotionCommand {
        self.command
    }

    /// Builds the program for `path`.
    ///
    /// The config is validated first and every point must be finite. Points
    /// outside the bed are still exported; they are reported once with a
    /// warning.
    pub fn export(
        &self,
        config: &GeometryConfig,
        path: &Path,
        metadata: &PatternMetadata,
    ) -> ExportResult<GcodeProgram> {
        config.validate()?;
        if let Some((index, point)) = path
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(ExportError::NonFinitePoint {
                index,
                x: point.x,
                y: point.y,
            });
        }

        let report = BoundaryReport::check(config, path);
        if report.any() {
            tracing::warn!(
                "{} of {} points lie outside the bed; exporting anyway",
                report.count(),
                path.len()
            );
        }

        let motion: Vec<String> = path
            .iter()
            .map(|&point| {
                let bed = centered_to_bed(config, point);
                format!(
                    "{} X{} Y{}",
                    self.command,
                    format_coordinate(bed.x),
                    format_coordinate(bed.y)
                )
            })
            .collect();

        tracing::debug!(
            "Exported '{}': {} motion lines, {:.2} {}",
            metadata.name,
            motion.len(),
            path.distance(),
            config.units
        );

        Ok(GcodeProgram {
            header: self.header(config, path, metadata),
            start: self.start_block.clone(),
            motion,
            finish: self.finish_block.clone(),
        })
    }

    fn header(
        &self,
        config: &GeometryConfig,
        path: &Path,
        metadata: &PatternMetadata,
    ) -> Vec<String> {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local());
        let b = &config.bounds;
        let units = &config.units;
        let distance = path.distance();

        let mut header = Vec::with_capacity(FIXED_HEADER_LINES + metadata.entries.len());
        header.push(format!("; Generated by sandkit {}", env!("CARGO_PKG_VERSION")));
        header.push(format!("; Date: {}", timestamp.format("%Y-%m-%d %H:%M:%S")));
        header.push(format!(
            "; Bed: X {:.2}..{:.2} Y {:.2}..{:.2} {}",
            b.min_x, b.max_x, b.min_y, b.max_y, units
        ));
        header.push(format!("; Format: {}", config.format));
        header.push(format!("; Motor speed: {:.2} {}/min", config.motor_speed, units));
        header.push(format!("; Pattern: {}", metadata.name));
        for (key, value) in &metadata.entries {
            header.push(format!("; {}: {}", key, value));
        }
        header.push(format!("; Distance: {:.2} {}", distance, units));
        header.push(format!(
            "; Estimated time: {:.2} min",
            config.estimate_draw_time(distance)
        ));
        header
    }
}

/// Two-decimal coordinate with negative zero written as `0.00`
pub fn format_coordinate(value: f64) -> String {
    let text = format!("{:.2}", value);
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}
