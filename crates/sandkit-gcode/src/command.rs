//! Motion command selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word emitted at the start of every motion line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionCommand {
    /// Rapid move (the default for sand tables)
    #[default]
    G0,
    /// Linear feed move
    G1,
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::G0 => write!(f, "G0"),
            Self::G1 => write!(f, "G1"),
        }
    }
}

/// Error for motion command names other than `G0`/`G1`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown motion command '{0}' (expected G0 or G1)")]
pub struct UnknownCommand(pub String);

impl FromStr for MotionCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G0" | "G00" => Ok(Self::G0),
            "G1" | "G01" => Ok(Self::G1),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}
