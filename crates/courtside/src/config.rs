//! Tool configuration loaded from TOML.

use crate::ConfigError;
use crate::report::OutputFormat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "COURTSIDE_CONFIG";

/// Settings for the courtside tool.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CourtsideConfig {
    /// Output format for reports.
    #[serde(default)]
    output: OutputFormat,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Fail the audit command when any entry has findings.
    #[serde(default = "default_strict")]
    strict: bool,
}

fn default_log_filter() -> String {
    "info,courtside=debug".to_string()
}

fn default_strict() -> bool {
    true
}

impl Default for CourtsideConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_filter: default_log_filter(),
            strict: default_strict(),
        }
    }
}

impl CourtsideConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(output = %config.output, strict = config.strict, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves configuration from an explicit path or the default locations.
    ///
    /// Resolution order:
    /// 1. `explicit` (from `--config`)
    /// 2. `$COURTSIDE_CONFIG`
    /// 3. `$XDG_CONFIG_HOME/courtside/config.toml`
    ///
    /// An explicit or environment path must load. A missing file at the XDG
    /// location falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a chosen file cannot be read or parsed.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    /// Resolves configuration, reading environment variables through `lookup`.
    ///
    /// Same order as [`CourtsideConfig::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a chosen file cannot be read or parsed.
    #[instrument(skip(lookup))]
    pub fn resolve_with(
        explicit: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = lookup(CONFIG_ENV) {
            debug!(path = %path, "Using COURTSIDE_CONFIG env var");
            return Self::from_file(path);
        }

        match Self::default_config_path(&lookup) {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns `$XDG_CONFIG_HOME/courtside/config.toml`, if the variable is set.
    pub fn default_config_path(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        lookup("XDG_CONFIG_HOME")
            .map(|xdg| PathBuf::from(xdg).join("courtside").join("config.toml"))
    }

    /// Returns a copy with command-line overrides applied.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, output: Option<OutputFormat>, strict: Option<bool>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(strict) = strict {
            self.strict = strict;
        }
        self
    }
}
