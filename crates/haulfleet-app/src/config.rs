//! Configuration management for haulfleet
//!
//! Config stored at: ~/.config/haulfleet/config.json

use std::path::{Path, PathBuf};

use haulfleet_domain::model::DurationTable;
use haulfleet_infra::toml_loader::load_duration_table;
use haulfleet_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Number of trucks created when no fleet has been saved yet
    #[serde(default = "default_fleet_size")]
    pub fleet_size: usize,

    /// Fleet file override (defaults to the data directory)
    #[serde(default)]
    pub fleet_file: Option<PathBuf>,

    /// TOML file overriding per-event durations
    #[serde(default)]
    pub durations_file: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_fleet_size() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            fleet_size: default_fleet_size(),
            fleet_file: None,
            durations_file: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulfleet");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the saved fleet
    pub fn store_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulfleet");
        Ok(data_dir)
    }

    /// Per-event durations, from `durations_file` when set
    pub fn duration_table(&self) -> Result<DurationTable> {
        match &self.durations_file {
            Some(path) => load_duration_table(path),
            None => Ok(DurationTable::default()),
        }
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a file, or use defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulfleet Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Fleet size:     {}", self.fleet_size)?;
        match &self.fleet_file {
            Some(path) => writeln!(f, "Fleet file:     {}", path.display())?,
            None => writeln!(
                f,
                "Fleet file:     {}",
                self.store_dir()
                    .map(|p| p.join("fleet.json").display().to_string())
                    .unwrap_or_else(|_| "(error)".to_string())
            )?,
        }
        writeln!(
            f,
            "Durations file: {}",
            self.durations_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
