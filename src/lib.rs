//! # sandkit
//!
//! Pattern generation and G-code export for sand tables and polargraph
//! plotters.
//!
//! ## Architecture
//!
//! sandkit is organized as a workspace with multiple crates:
//!
//! 1. **sandkit-core** - Bed geometry, paths, distance accounting, coordinate transforms
//! 2. **sandkit-patterns** - Pattern generators, parameter model, registry, session
//! 3. **sandkit-gcode** - G-code export
//! 4. **sandkit-preview** - Screen-space preview scenes for a renderer
//! 5. **sandkit-settings** - JSON/TOML configuration
//! 6. **sandkit** - Re-exports, logging setup, and the command-line tool
//!
//! ## Example
//!
//! ```no_run
//! use sandkit::{GcodeExporter, GeometryConfig, PatternMetadata, PatternRegistry};
//!
//! let config = GeometryConfig::default();
//! let registry = PatternRegistry::with_defaults();
//! let generator = registry.require("spiral")?;
//! let params = generator.default_params();
//! let path = generator.generate(&config, &params)?;
//! let metadata = PatternMetadata::from_params(&generator.spec(), &params);
//! let program = GcodeExporter::new().export(&config, &path, &metadata)?;
//! print!("{}", program.to_gcode_string());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub use sandkit_core::{
    bed_to_centered, centered_to_bed, is_centered_exceeded, is_exceeded, path_to_bed,
    BoundaryReport, Bounds, ConfigError, CoordinateFormat, DistanceAccumulator, GeometryConfig,
    ParseError, Path, Point,
};

pub use sandkit_patterns::{
    parse_coordinates, parse_gcode, CircleGenerator, CircleParams, CoordinateListGenerator,
    CoordinateListParams, DiametersGenerator, DiametersParams, FreeDrawGenerator, FreeDrawParams,
    GcodeImportGenerator, GcodeImportParams, ParamDomain, ParamSpec, ParamValue, ParameterError,
    PatternError, PatternGenerator, PatternParams, PatternRegistry, PatternResult, PatternSession,
    PatternSpec, RotationDirection, SpiralGenerator, SpiralParams,
};

pub use sandkit_gcode::{ExportError, GcodeExporter, GcodeProgram, MotionCommand, PatternMetadata};

pub use sandkit_preview::{
    Marker, MarkerKind, OutlineStyle, PlotArea, PreviewScene, ScreenPoint, Viewport,
};

pub use sandkit_settings::{
    default_config_path, Config, ExportSettings, PatternSettings, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Initialize logging with the default configuration
///
/// Logs go to stderr so G-code written to stdout stays clean. The level is
/// taken from `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Text)
}

/// Initialize logging with the given line format
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
