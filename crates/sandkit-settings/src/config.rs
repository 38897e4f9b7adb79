//! Application configuration.
//!
//! A [`Config`] holds the machine geometry, the export blocks, and the
//! pattern loaded at startup. Files are JSON or TOML, chosen by extension.

use sandkit_core::GeometryConfig;
use sandkit_gcode::{GcodeExporter, MotionCommand};
use sandkit_patterns::{ParamValue, PatternParams};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, SettingsError};

/// File name used inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// G-code export settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Motion word for every path point
    pub command: MotionCommand,
    /// Lines emitted before the first move
    pub start_block: Vec<String>,
    /// Lines emitted after the last move
    pub finish_block: Vec<String>,
}

impl ExportSettings {
    /// Exporter configured from these settings
    pub fn exporter(&self) -> GcodeExporter {
        GcodeExporter::new()
            .with_command(self.command)
            .with_start_block(self.start_block.iter().cloned())
            .with_finish_block(self.finish_block.iter().cloned())
    }
}

/// Pattern selected at startup and its parameter overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    pub key: String,
    /// Values applied on top of the pattern defaults
    pub values: BTreeMap<String, ParamValue>,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            key: "spiral".to_string(),
            values: BTreeMap::new(),
        }
    }
}

impl PatternSettings {
    /// Typed parameters for the configured pattern
    pub fn params(&self) -> Result<PatternParams> {
        PatternParams::from_values(&self.key, &self.values).map_err(|e| {
            SettingsError::InvalidSetting {
                key: format!("pattern.{}", self.key),
                reason: e.to_string(),
            }
        })
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bed geometry and motor speed
    pub machine: GeometryConfig,
    pub export: ExportSettings,
    pub pattern: PatternSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Load(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = FileFormat::from_path(path)?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::Save(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.machine.validate()?;

        if self.machine.units.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "machine.units".to_string(),
                reason: "unit label must not be empty".to_string(),
            });
        }

        self.pattern.params()?;
        Ok(())
    }
}

/// Default settings file: `<platform config dir>/sandkit/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
    })?;
    Ok(base.join("sandkit").join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
