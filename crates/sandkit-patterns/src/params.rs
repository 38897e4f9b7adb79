//! Pattern parameter model.
//!
//! Every pattern describes its parameters with a [`PatternSpec`]: a list of
//! [`ParamSpec`]s, each with an explicit [`ParamDomain`]. Values arrive either
//! as typed structs wrapped in [`PatternParams`], or as a string-keyed map of
//! [`ParamValue`]s that is applied on top of the pattern defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::circle::CircleParams;
use crate::coordinate_list::CoordinateListParams;
use crate::diameters::DiametersParams;
use crate::error::{ParameterError, ParameterResult, PatternError, PatternResult};
use crate::free_draw::FreeDrawParams;
use crate::gcode_import::GcodeImportParams;
use crate::spiral::SpiralParams;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric view of the value (integers widen to f64)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Single-line rendering, safe for a G-code comment
    pub fn summary(&self) -> String {
        match self {
            Self::Text(s) if s.contains('\n') => format!("<{} lines>", s.lines().count()),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Valid input domain of a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDomain {
    /// Inclusive integer range
    Integer { min: i64, max: i64 },
    /// Inclusive real range
    Real { min: f64, max: f64 },
    /// Free text
    Text,
    Boolean,
    /// One of a fixed set of lowercase words
    Choice(&'static [&'static str]),
}

impl ParamDomain {
    /// Converts a value into this domain, checking ranges.
    ///
    /// Text is accepted for every domain so command-line input can be fed
    /// through unchanged.
    pub fn coerce(&self, name: &str, value: ParamValue) -> ParameterResult<ParamValue> {
        match *self {
            Self::Integer { min, max } => {
                let n = match value {
                    ParamValue::Integer(n) => n,
                    ParamValue::Real(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
                    ParamValue::Text(ref s) => {
                        s.trim()
                            .parse::<i64>()
                            .map_err(|e| ParameterError::InvalidValue {
                                name: name.to_string(),
                                reason: e.to_string(),
                            })?
                    }
                    _ => return Err(type_mismatch(name, "an integer")),
                };
                if n < min || n > max {
                    return Err(ParameterError::OutOfRange {
                        name: name.to_string(),
                        value: n as f64,
                        min: min as f64,
                        max: max as f64,
                    });
                }
                Ok(ParamValue::Integer(n))
            }
            Self::Real { min, max } => {
                let v = match value {
                    ParamValue::Real(f) => f,
                    ParamValue::Integer(n) => n as f64,
                    ParamValue::Text(ref s) => {
                        s.trim()
                            .parse::<f64>()
                            .map_err(|e| ParameterError::InvalidValue {
                                name: name.to_string(),
                                reason: e.to_string(),
                            })?
                    }
                    _ => return Err(type_mismatch(name, "a number")),
                };
                if !v.is_finite() {
                    return Err(ParameterError::InvalidValue {
                        name: name.to_string(),
                        reason: "must be a finite number".to_string(),
                    });
                }
                if v < min || v > max {
                    return Err(ParameterError::OutOfRange {
                        name: name.to_string(),
                        value: v,
                        min,
                        max,
                    });
                }
                Ok(ParamValue::Real(v))
            }
            Self::Text => match value {
                ParamValue::Text(s) => Ok(ParamValue::Text(s)),
                _ => Err(type_mismatch(name, "text")),
            },
            Self::Boolean => match value {
                ParamValue::Bool(b) => Ok(ParamValue::Bool(b)),
                ParamValue::Text(s) => match s.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => Ok(ParamValue::Bool(true)),
                    "false" | "no" | "off" | "0" => Ok(ParamValue::Bool(false)),
                    _ => Err(type_mismatch(name, "a boolean")),
                },
                _ => Err(type_mismatch(name, "a boolean")),
            },
            Self::Choice(options) => match value {
                ParamValue::Text(s) => {
                    let word = s.trim().to_lowercase();
                    if options.contains(&word.as_str()) {
                        Ok(ParamValue::Text(word))
                    } else {
                        Err(ParameterError::InvalidValue {
                            name: name.to_string(),
                            reason: format!("expected one of: {}", options.join(", ")),
                        })
                    }
                }
                _ => Err(type_mismatch(name, "one of a fixed set of words")),
            },
        }
    }
}

impl fmt::Display for ParamDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { min, max } => write!(f, "integer {}..={}", min, max),
            Self::Real { min, max } => write!(f, "number {}..={}", min, max),
            Self::Text => write!(f, "text"),
            Self::Boolean => write!(f, "true|false"),
            Self::Choice(options) => write!(f, "{}", options.join("|")),
        }
    }
}

fn type_mismatch(name: &str, expected: &'static str) -> ParameterError {
    ParameterError::TypeMismatch {
        name: name.to_string(),
        expected,
    }
}

/// Description of one pattern parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub domain: ParamDomain,
    pub default: ParamValue,
}

impl ParamSpec {
    pub fn new(
        name: &'static str,
        label: &'static str,
        domain: ParamDomain,
        default: impl Into<ParamValue>,
    ) -> Self {
        Self {
            name,
            label,
            domain,
            default: default.into(),
        }
    }
}

/// Identity and parameter table of a pattern
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSpec {
    /// Unique registry key
    pub key: &'static str,
    /// Display label
    pub name: &'static str,
    pub parameters: Vec<ParamSpec>,
}

impl PatternSpec {
    /// Looks up a parameter by name
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Typed parameter struct of one pattern
pub trait ParameterSet {
    /// Parameter table, in display order
    fn specs() -> Vec<ParamSpec>
    where
        Self: Sized;

    /// Current values, in the same order as [`specs`](Self::specs)
    fn values(&self) -> Vec<(&'static str, ParamValue)>;

    /// Stores an already-coerced value
    fn assign(&mut self, name: &str, value: ParamValue) -> ParameterResult<()>;

    /// Checks every value against its domain
    fn validate(&self) -> ParameterResult<()>
    where
        Self: Sized,
    {
        check_values(&Self::specs(), &self.values())
    }

    /// Header entries as `(key, value)` strings
    fn entries(&self) -> Vec<(String, String)> {
        self.values()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.summary()))
            .collect()
    }
}

/// Checks values against the domains in `specs`
pub fn check_values(
    specs: &[ParamSpec],
    values: &[(&'static str, ParamValue)],
) -> ParameterResult<()> {
    for (name, value) in values {
        if let Some(spec) = specs.iter().find(|s| s.name == *name) {
            spec.domain.coerce(name, value.clone())?;
        }
    }
    Ok(())
}

/// Parameters of one pattern, tagged by pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum PatternParams {
    Circle(CircleParams),
    Spiral(SpiralParams),
    Diameters(DiametersParams),
    CoordinateList(CoordinateListParams),
    GcodeImport(GcodeImportParams),
    FreeDraw(FreeDrawParams),
}

impl PatternParams {
    /// Registry key of the pattern these parameters belong to
    pub fn key(&self) -> &'static str {
        match self {
            Self::Circle(_) => crate::circle::KEY,
            Self::Spiral(_) => crate::spiral::KEY,
            Self::Diameters(_) => crate::diameters::KEY,
            Self::CoordinateList(_) => crate::coordinate_list::KEY,
            Self::GcodeImport(_) => crate::gcode_import::KEY,
            Self::FreeDraw(_) => crate::free_draw::KEY,
        }
    }

    /// Default parameters for a pattern key
    pub fn defaults_for(key: &str) -> Option<Self> {
        let params = match key {
            crate::circle::KEY => Self::Circle(CircleParams::default()),
            crate::spiral::KEY => Self::Spiral(SpiralParams::default()),
            crate::diameters::KEY => Self::Diameters(DiametersParams::default()),
            crate::coordinate_list::KEY => Self::CoordinateList(CoordinateListParams::default()),
            crate::gcode_import::KEY => Self::GcodeImport(GcodeImportParams::default()),
            crate::free_draw::KEY => Self::FreeDraw(FreeDrawParams::default()),
            _ => return None,
        };
        Some(params)
    }

    /// Defaults for `key` with `values` applied on top
    pub fn from_values(key: &str, values: &BTreeMap<String, ParamValue>) -> PatternResult<Self> {
        let mut params =
            Self::defaults_for(key).ok_or_else(|| PatternError::UnknownPattern(key.to_string()))?;
        for (name, value) in values {
            params.set(name, value.clone())?;
        }
        Ok(params)
    }

    /// Parameter table of the pattern
    pub fn specs(&self) -> Vec<ParamSpec> {
        match self {
            Self::Circle(_) => CircleParams::specs(),
            Self::Spiral(_) => SpiralParams::specs(),
            Self::Diameters(_) => DiametersParams::specs(),
            Self::CoordinateList(_) => CoordinateListParams::specs(),
            Self::GcodeImport(_) => GcodeImportParams::specs(),
            Self::FreeDraw(_) => FreeDrawParams::specs(),
        }
    }

    /// Validates, coerces, and stores one named value
    pub fn set(&mut self, name: &str, value: ParamValue) -> ParameterResult<()> {
        let specs = self.specs();
        let spec = specs
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ParameterError::Unknown {
                pattern: self.key().to_string(),
                name: name.to_string(),
            })?;
        let value = spec.domain.coerce(name, value)?;
        self.as_set_mut().assign(name, value)
    }

    /// Checks every value against its domain
    pub fn validate(&self) -> ParameterResult<()> {
        match self {
            Self::Circle(p) => p.validate(),
            Self::Spiral(p) => p.validate(),
            Self::Diameters(p) => p.validate(),
            Self::CoordinateList(p) => p.validate(),
            Self::GcodeImport(p) => p.validate(),
            Self::FreeDraw(p) => p.validate(),
        }
    }

    /// Header entries as `(key, value)` strings
    pub fn entries(&self) -> Vec<(String, String)> {
        self.as_set().entries()
    }

    fn as_set(&self) -> &dyn ParameterSet {
        match self {
            Self::Circle(p) => p,
            Self::Spiral(p) => p,
            Self::Diameters(p) => p,
            Self::CoordinateList(p) => p,
            Self::GcodeImport(p) => p,
            Self::FreeDraw(p) => p,
        }
    }

    fn as_set_mut(&mut self) -> &mut dyn ParameterSet {
        match self {
            Self::Circle(p) => p,
            Self::Spiral(p) => p,
            Self::Diameters(p) => p,
            Self::CoordinateList(p) => p,
            Self::GcodeImport(p) => p,
            Self::FreeDraw(p) => p,
        }
    }
}
