//! Re-import of G-code motion lines.
//!
//! Recognized lines are linear moves carrying both axes:
//!
//! ```text
//! G0 X<float> Y<float>
//! G1 Y<float> X<float>
//! ```
//!
//! `G00`/`G01` and lowercase words are accepted, either axis order is
//! accepted, and anything after the second coordinate (feed words, comments)
//! is ignored. Every other line is skipped. Coordinates are read as bed
//! coordinates and converted to centered coordinates. A recognized line whose
//! coordinate overflows `f64` is a parse error.

use regex::Regex;
use sandkit_core::{bed_to_centered, GeometryConfig, ParseError, Path, Point};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{ParameterError, ParameterResult, PatternResult};
use crate::generator::{mismatch, prepare, PatternGenerator};
use crate::params::{ParamDomain, ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec};

pub const KEY: &str = "gcode_import";

fn motion_regex() -> &'static Regex {
    static MOTION_REGEX: OnceLock<Regex> = OnceLock::new();
    MOTION_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*G0?[01]\s+([XY])\s*([-+]?(?:\d+\.?\d*|\.\d+))\s*([XY])\s*([-+]?(?:\d+\.?\d*|\.\d+))",
        )
        .expect("invalid motion regex")
    })
}

/// Parameters for the G-code import pattern
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeImportParams {
    pub text: String,
}

impl ParameterSet for GcodeImportParams {
    fn specs() -> Vec<ParamSpec> {
        vec![ParamSpec::new("text", "G-code", ParamDomain::Text, "")]
    }

    fn values(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("text", self.text.clone().into())]
    }

    fn assign(&mut self, name: &str, value: ParamValue) -> ParameterResult<()> {
        match (name, value) {
            ("text", ParamValue::Text(text)) => {
                self.text = text;
                Ok(())
            }
            ("text", _) => Err(ParameterError::TypeMismatch {
                name: name.to_string(),
                expected: "text",
            }),
            _ => Err(ParameterError::Unknown {
                pattern: KEY.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

/// Extracts the bed coordinates of one motion line, if it is one.
pub fn parse_motion_line(line_number: usize, line: &str) -> Result<Option<Point>, ParseError> {
    let Some(caps) = motion_regex().captures(line) else {
        return Ok(None);
    };

    let first_axis = caps[1].to_ascii_uppercase();
    let second_axis = caps[3].to_ascii_uppercase();
    if first_axis == second_axis {
        tracing::trace!("Skipping line {}: axis {} repeated", line_number, first_axis);
        return Ok(None);
    }

    // Digit runs past f64 range parse to infinity.
    let parse = |text: &str| {
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                ParseError::new(
                    line_number,
                    line.trim(),
                    format!("coordinate '{}' is not a finite number", text),
                )
            })
    };
    let first = parse(&caps[2])?;
    let second = parse(&caps[4])?;

    let point = if first_axis == "X" {
        Point::new(first, second)
    } else {
        Point::new(second, first)
    };
    Ok(Some(point))
}

/// Parses G-code text into a centered path.
pub fn parse_gcode(config: &GeometryConfig, text: &str) -> Result<Path, ParseError> {
    let mut path = Path::new();
    let mut skipped = 0usize;
    for (index, line) in text.lines().enumerate() {
        match parse_motion_line(index + 1, line)? {
            Some(bed_point) => path.push(bed_to_centered(config, bed_point)),
            None => skipped += 1,
        }
    }
    tracing::debug!(
        "Imported {} motion lines, skipped {} other lines",
        path.len(),
        skipped
    );
    Ok(path)
}

/// Generator that replays the moves of an existing G-code program
#[derive(Debug, Default, Clone, Copy)]
pub struct GcodeImportGenerator;

impl GcodeImportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PatternGenerator for GcodeImportGenerator {
    fn spec(&self) -> PatternSpec {
        PatternSpec {
            key: KEY,
            name: "G-code Import",
            parameters: GcodeImportParams::specs(),
        }
    }

    fn default_params(&self) -> PatternParams {
        PatternParams::GcodeImport(GcodeImportParams::default())
    }

    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path> {
        let PatternParams::GcodeImport(p) = params else {
            return Err(mismatch(KEY, params));
        };
        prepare(config, p)?;
        Ok(parse_gcode(config, &p.text)?)
    }
}
