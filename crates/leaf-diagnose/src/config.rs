//! Application settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `plant-health.toml`, then `PLANT_HEALTH_*` environment variables, then
//! command-line overrides. Classification thresholds are not settings.

use crate::DiagnoseError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default settings file looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "plant-health";
/// Environment variable prefix
pub const ENV_PREFIX: &str = "PLANT_HEALTH";

/// Report format written by the console presenter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable feature summary and status line
    #[default]
    Text,
    /// One JSON document per run
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Values given on the command line, taking precedence over everything else
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub output: Option<OutputFormat>,
    pub save_dir: Option<PathBuf>,
}

/// Resolved application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// tracing max level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Report format
    pub output: OutputFormat,
    /// Directory receiving the canonical frame, edge mask and rust mask as PNG
    pub save_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: OutputFormat::Text,
            save_dir: None,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `config_file` must exist; otherwise `plant-health.{toml,json,yaml}`
    /// in the working directory is used when present.
    pub fn load(config_file: Option<&Path>, overrides: Overrides) -> Result<Self, DiagnoseError> {
        Self::load_from(
            config_file,
            DEFAULT_CONFIG_NAME,
            Environment::with_prefix(ENV_PREFIX),
            overrides,
        )
    }

    /// `default_name` is the extension-less settings file tried when no
    /// explicit file is given
    fn load_from(
        config_file: Option<&Path>,
        default_name: &str,
        env: Environment,
        overrides: Overrides,
    ) -> Result<Self, DiagnoseError> {
        let defaults = Settings::default();
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(default_name).required(false),
        };

        let settings = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("output", defaults.output.as_str())?
            .add_source(file)
            .add_source(env)
            .set_override_option("log_level", overrides.log_level)?
            .set_override_option("output", overrides.output.map(|o| o.as_str()))?
            .set_override_option(
                "save_dir",
                overrides
                    .save_dir
                    .map(|dir| dir.to_string_lossy().into_owned()),
            )?
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
