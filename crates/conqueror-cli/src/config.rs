//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use conqueror_history::HistoryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output and prediction settings
    #[serde(default)]
    pub settings: Settings,

    /// History decoding settings
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Target rating when neither --target nor --rank is given
    #[serde(default = "default_target")]
    pub default_target: f64,

    /// Chart width used to decide which rank crossings are listed
    #[serde(default = "default_view_width")]
    pub view_width: u32,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".conqueror").join("config.toml"))
    }

    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::path()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::Config(format!(
                    "Config file '{}' does not exist",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides (currently the season start).
    pub fn with_env_overrides(mut self) -> Result<Self> {
        self.history = self.history.with_env_overrides()?;
        Ok(self)
    }

    /// Check values that would make predictions meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.settings.default_target.is_finite() {
            return Err(CliError::Config("default_target must be a finite rating".into()));
        }
        if self.settings.view_width == 0 {
            return Err(CliError::Config("view_width must be greater than zero".into()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            default_target: default_target(),
            view_width: default_view_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_target() -> f64 {
    conqueror_domain::RATING_CEILING
}

fn default_view_width() -> u32 {
    1200
}
