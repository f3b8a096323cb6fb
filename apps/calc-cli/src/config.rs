//! Layered configuration for the `calc` binary.
//!
//! Precedence, lowest to highest:
//! 1) defaults -> 2) YAML file (if provided) -> 3) env (`CALC__*`) -> 4) CLI overrides

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `CALC__OUTPUT__FORMAT=json`.
pub const ENV_PREFIX: &str = "CALC__";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fixed number of decimal places for text output. `None` prints the
    /// shortest exact representation.
    pub precision: Option<usize>,
}

/// Values from the command line that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub verbose: u8,
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file, and `CALC__*`
    /// environment variables.
    ///
    /// # Errors
    /// Fails when `path` does not point to a file, or when any layer cannot
    /// be parsed into `AppConfig`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        let level = match overrides.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            self.logging.level = level.to_owned();
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = Some(precision);
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to serialize configuration")
    }
}
