//! CLI configuration
//!
//! Defaults, then an optional settings file, then `FC_SETTINGS_*`
//! environment variables. Command-line flags override the result.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use fc_settings::FcVariant;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Default settings file name, looked up without extension
pub const DEFAULT_CONFIG_NAME: &str = "fc-settings";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FC_SETTINGS";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Settings variant used when no `--variant` is given
    pub variant: FcVariant,

    /// Kind used when synthesising column names
    pub kind: String,

    /// Columns always skipped when parsing column names
    pub ignore_columns: Vec<String>,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            variant: FcVariant::Comprehensive,
            kind: "x".to_string(),
            ignore_columns: Vec::new(),
            pretty: true,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; otherwise `fc-settings.{toml,json,yaml}`
    /// in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .set_default("variant", defaults.variant.as_str())?
            .set_default("kind", defaults.kind)?
            .set_default("ignore_columns", defaults.ignore_columns)?
            .set_default("pretty", defaults.pretty)?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("ignore_columns"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .with_context(|| format!("Invalid log level {:?}", self.log_level))
    }
}
