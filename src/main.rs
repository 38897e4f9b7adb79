//! sandkit CLI - generate a pattern and write it as G-code.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sandkit::{
    default_config_path, init_logging_with, Config, LogFormat, MotionCommand, ParamValue,
    PatternMetadata, PatternRegistry,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sandkit")]
#[command(version = sandkit::VERSION)]
#[command(about = "Generate sand table and polargraph patterns as G-code", long_about = None)]
struct Cli {
    /// Settings file (.toml or .json); defaults to the platform config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pattern key (see --list)
    #[arg(short, long, value_name = "KEY")]
    pattern: Option<String>,

    /// Pattern parameter override, repeatable
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// File loaded into the pattern's `text` parameter
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Motion command for every point (g0 or g1)
    #[arg(long, value_name = "CMD")]
    command: Option<MotionCommand>,

    /// List patterns and their parameters, then exit
    #[arg(long)]
    list: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogArg::Text)]
    log_format: LogArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogArg {
    Text,
    Json,
}

impl From<LogArg> for LogFormat {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Text => LogFormat::Text,
            LogArg::Json => LogFormat::Json,
        }
    }
}

fn parse_param(arg: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{}'", arg));
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log_format.into())?;
    tracing::debug!("sandkit {} (built {})", sandkit::VERSION, sandkit::BUILD_DATE);

    let registry = PatternRegistry::with_defaults();
    if cli.list {
        return list_patterns(&registry);
    }

    let config = load_config(cli.config.as_deref())?;

    let key = cli
        .pattern
        .clone()
        .unwrap_or_else(|| config.pattern.key.clone());
    let mut values: BTreeMap<String, ParamValue> = if key == config.pattern.key {
        config.pattern.values.clone()
    } else {
        BTreeMap::new()
    };
    if let Some(input) = &cli.input {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file {}", input.display()))?;
        values.insert("text".to_string(), ParamValue::Text(text));
    }
    for (name, value) in &cli.params {
        values.insert(name.clone(), ParamValue::Text(value.clone()));
    }

    let generator = registry.require(&key)?;
    let mut params = generator.default_params();
    for (name, value) in &values {
        params
            .set(name, value.clone())
            .with_context(|| format!("Invalid parameter for pattern '{}'", key))?;
    }
    let path = generator
        .generate(&config.machine, &params)
        .with_context(|| format!("Failed to generate pattern '{}'", key))?;

    let mut exporter = config.export.exporter();
    if let Some(command) = cli.command {
        exporter = exporter.with_command(command);
    }
    let metadata = PatternMetadata::from_params(&generator.spec(), &params);
    let program = exporter
        .export(&config.machine, &path, &metadata)
        .with_context(|| format!("Failed to export pattern '{}'", key))?;

    match &cli.output {
        Some(output) => {
            let file = File::create(output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            program.write_to(BufWriter::new(file))?;
            tracing::info!("Wrote {} lines to {}", program.line_count(), output.display());
        }
        None => program.write_to(io::stdout().lock())?,
    }

    tracing::info!(
        "Pattern '{}': {} points, {:.2} {}, about {:.2} min",
        key,
        path.len(),
        path.distance(),
        config.machine.units,
        config.machine.estimate_draw_time(path.distance())
    );
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()));
    }
    match default_config_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        Err(e) => {
            tracing::warn!("{}; using default settings", e);
            Ok(Config::default())
        }
    }
}

fn list_patterns(registry: &PatternRegistry) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for spec in registry.specs() {
        writeln!(out, "{:<16} {}", spec.key, spec.name)?;
        for param in &spec.parameters {
            writeln!(
                out,
                "    {:<12} {} [{}] (default: {})",
                param.name,
                param.label,
                param.domain,
                param.default.summary()
            )?;
        }
    }
    Ok(())
}
