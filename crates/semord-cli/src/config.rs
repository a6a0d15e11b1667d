//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Command-line arguments

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use semord_core::Dialect;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parsing and ordering rules
    pub dialect: Dialect,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
///
/// Unset fields leave the verbosity-derived defaults alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match extension(path) {
            Some("toml") => toml::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        // Logging is not initialized yet; it depends on this config
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        paths.push(PathBuf::from(".semord.toml"));
        paths.push(PathBuf::from(".semord.yaml"));
        paths.push(PathBuf::from(".semord.json"));

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let semord_dir = config_dir.join("semord");
            paths.push(semord_dir.join("config.toml"));
            paths.push(semord_dir.join("config.yaml"));
            paths.push(semord_dir.join("config.json"));
        }

        paths
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dialect, Dialect::Classic);
        assert_eq!(config.output.format, OutputFormat::Human);
        assert!(config.output.color);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("semord.toml");
        let content = r#"
dialect = "standard"

[output]
format = "json-pretty"
color = false

[logging]
level = "debug"
"#;
        fs::write(&path, content).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.dialect, Dialect::Standard);
        assert_eq!(config.output.format, OutputFormat::JsonPretty);
        assert!(!config.output.color);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.logging.format.is_none());
    }

    #[test]
    fn test_load_yaml_and_json_configs() {
        let dir = TempDir::new().unwrap();

        let yaml = dir.path().join("semord.yaml");
        fs::write(&yaml, "output:\n  format: yaml\n").unwrap();
        let config = Config::from_file(&yaml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert_eq!(config.dialect, Dialect::Classic);

        let json = dir.path().join("semord.json");
        fs::write(&json, r#"{"dialect": "classic", "logging": {"format": "json"}}"#).unwrap();
        let config = Config::from_file(&json).unwrap();
        assert_eq!(config.logging.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(Config::from_file(&missing), Err(Error::FileNotFound { .. })));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "dialect = \"loose\"").unwrap();
        assert!(matches!(Config::from_file(&bad), Err(Error::Toml(_))));
    }

    #[test]
    fn test_toml_rendering_round_trips() {
        let mut config = Config::default();
        config.dialect = Dialect::Standard;
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("dialect = \"standard\""));

        let back: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_default_paths_start_in_working_directory() {
        let paths = Config::default_config_paths();
        assert_eq!(paths[0], PathBuf::from(".semord.toml"));
    }
}
