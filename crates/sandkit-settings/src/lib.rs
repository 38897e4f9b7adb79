//! sandkit Settings Crate
//!
//! Handles application configuration: machine geometry, export blocks, and
//! the startup pattern, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, ExportSettings, PatternSettings, CONFIG_FILE_NAME};
pub use error::{Result, SettingsError};
