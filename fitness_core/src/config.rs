//! Configuration file support for fitreport.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitreport/config.toml`.

use crate::report::OutputFormat;
use crate::runner::{BatchOptions, ErrorPolicy};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report output configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Batch error-handling configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct BatchConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

/// Where a loaded configuration came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file found (at the path, when one could be determined)
    Defaults(Option<PathBuf>),
}

impl ConfigSource {
    /// Emit the info event describing this source
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults(path) => {
                tracing::info!("No config file found at {:?}, using defaults", path)
            }
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Load configuration from the standard config path
    ///
    /// Returns where the configuration came from so the caller can log it
    /// once logging is set up.
    pub fn load() -> Result<(Self, ConfigSource)> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => {
                let config = Self::load_from(&config_path)?;
                Ok((config, ConfigSource::File(config_path)))
            }
            config_path => Ok((Self::default(), ConfigSource::Defaults(config_path))),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("fitreport").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Batch options described by this configuration
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            format: self.output.format,
            on_error: self.batch.on_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.batch.on_error, ErrorPolicy::Abort);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.output.format, OutputFormat::Json);
        assert_eq!(parsed.batch.on_error, config.batch.on_error);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[batch]
on_error = "continue"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.batch.on_error, ErrorPolicy::Continue);
        assert_eq!(config.output.format, OutputFormat::Text); // default
        assert_eq!(config.logging.level, "warn"); // default
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.batch.on_error = ErrorPolicy::Continue;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        let options = loaded.batch_options();
        assert_eq!(options.on_error, ErrorPolicy::Continue);
        assert_eq!(options.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_format_is_toml_error() {
        let err = toml::from_str::<Config>("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("xml"));
    }
}
