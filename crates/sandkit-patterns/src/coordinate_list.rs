//! Literal point lists.
//!
//! Input is one `x,y` pair per line in centered coordinates. Blank lines are
//! skipped. Any other line that is not exactly two finite numbers separated
//! by a comma aborts the parse with a [`ParseError`] naming the line.

use sandkit_core::{GeometryConfig, ParseError, Path, Point};
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult, PatternResult};
use crate::generator::{mismatch, prepare, PatternGenerator};
use crate::params::{ParamDomain, ParamSpec, ParamValue, ParameterSet, PatternParams, PatternSpec};

pub const KEY: &str = "coordinate_list";

const DEFAULT_TEXT: &str = "-50,-50\n50,-50\n50,50\n-50,50\n-50,-50";

/// Parameters for the coordinate list pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateListParams {
    pub text: String,
}

impl Default for CoordinateListParams {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

impl ParameterSet for CoordinateListParams {
    fn specs() -> Vec<ParamSpec> {
        vec![ParamSpec::new(
            "text",
            "Coordinates (x,y per line)",
            ParamDomain::Text,
            DEFAULT_TEXT,
        )]
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

/// Parses `x,y` lines into a centered path.
pub fn parse_coordinates(text: &str) -> Result<Path, ParseError> {
    let mut path = Path::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        path.push(parse_line(index + 1, line)?);
    }
    Ok(path)
}

fn parse_line(line_number: usize, line: &str) -> Result<Point, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [x, y] = fields.as_slice() else {
        return Err(ParseError::new(
            line_number,
            line,
            format!("expected 'x,y', found {} field(s)", fields.len()),
        ));
    };
    Ok(Point::new(
        parse_number(line_number, line, "x", x)?,
        parse_number(line_number, line, "y", y)?,
    ))
}

fn parse_number(
    line_number: usize,
    line: &str,
    axis: &str,
    field: &str,
) -> Result<f64, ParseError> {
    let value = field.parse::<f64>().map_err(|e| {
        ParseError::new(
            line_number,
            line,
            format!("invalid {} value '{}': {}", axis, field, e),
        )
    })?;
    if !value.is_finite() {
        return Err(ParseError::new(
            line_number,
            line,
            format!("{} value must be finite", axis),
        ));
    }
    Ok(value)
}

/// Generator that draws a literal list of points
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateListGenerator;

impl CoordinateListGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PatternGenerator for CoordinateListGenerator {
    fn spec(&self) -> PatternSpec {
        PatternSpec {
            key: KEY,
            name: "Coordinate List",
            parameters: CoordinateListParams::specs(),
        }
    }

    fn default_params(&self) -> PatternParams {
        PatternParams::CoordinateList(CoordinateListParams::default())
    }

    fn generate(&self, config: &GeometryConfig, params: &PatternParams) -> PatternResult<Path> {
        let PatternParams::CoordinateList(p) = params else {
            return Err(mismatch(KEY, params));
        };
        prepare(config, p)?;
        let path = parse_coordinates(&p.text)?;
        tracing::debug!("Parsed coordinate list: {} points", path.len());
        Ok(path)
    }
}
