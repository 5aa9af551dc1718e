//! Configuration system
//!
//! Provides configuration with:
//! - Runtime defaults
//! - Config file loading (TOML, optional `basic` feature)
//! - Environment variable overrides
//! - Validation
//!
//! Command-line flags are applied on top of the loaded configuration in `main`.

use crate::parser::LogFormatKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Which log file to read and how to parse it
    pub input: InputConfig,

    /// Analysis parameters
    pub analysis: AnalysisConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Paths configuration
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub log_dir: PathBuf,
    pub log_file: String,
    pub log_format: LogFormatKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
    pub json_pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
            output: "console".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            log_file: "access.log".to_string(),
            log_format: LogFormatKind::CombinedLogFormat,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { top_n: 3 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            json_pretty: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from("logs"),
        }
    }
}

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];
const LOG_OUTPUTS: [&str; 3] = ["console", "file", "both"];

impl Config {
    /// Load configuration from an explicit file (if given), the default search
    /// locations, environment and defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate(explicit) {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };

        // Override with environment variables
        config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// The config file `load` would read: the explicit one, else the first search
    /// path that exists
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths().into_iter().find(|p| p.exists()),
        }
    }

    /// Config files tried in order when none is given explicitly
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("access-log-analyzer.toml"),
            PathBuf::from(".access-log-analyzer.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("access-log-analyzer").join("config.toml"));
        }
        paths
    }

    /// Load configuration from TOML file
    #[cfg(feature = "basic")]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    #[cfg(not(feature = "basic"))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        anyhow::bail!(
            "Config file {} given but this build has no config file support",
            path.display()
        )
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // Logging overrides
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        // Input overrides
        if let Ok(val) = env::var("ACCESS_LOG_DIR") {
            self.input.log_dir = PathBuf::from(val);
        }
        if let Ok(val) = env::var("ACCESS_LOG_FILE") {
            self.input.log_file = val;
        }
        if let Ok(val) = env::var("ACCESS_LOG_FORMAT") {
            self.input.log_format = val.parse().context("Invalid ACCESS_LOG_FORMAT")?;
        }

        // Analysis overrides
        if let Ok(val) = env::var("ACCESS_LOG_TOP_N") {
            self.analysis.top_n = val.parse().context("Invalid ACCESS_LOG_TOP_N")?;
        }

        // Output overrides
        if let Ok(val) = env::var("ACCESS_LOG_JSON") {
            self.output.json = val.parse().context("Invalid ACCESS_LOG_JSON")?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Log format must be one of {:?}, got '{}'",
                LOG_FORMATS,
                self.logging.format
            ));
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            return Err(anyhow::anyhow!(
                "Log output must be one of {:?}, got '{}'",
                LOG_OUTPUTS,
                self.logging.output
            ));
        }

        if self.input.log_file.trim().is_empty() {
            return Err(anyhow::anyhow!("Input log file name cannot be empty"));
        }

        Ok(())
    }

    /// Full path of the access log to analyse
    pub fn log_file_path(&self) -> PathBuf {
        self.input.log_dir.join(&self.input.log_file)
    }

    /// Save current configuration to file
    #[cfg(feature = "basic")]
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved to file");

        Ok(())
    }
}
