//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (stdin, config files, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from semord-core library
    #[error("{0}")]
    Core(#[from] semord_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination or input
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Some inputs to `validate` were not valid versions
    #[error("{invalid} of {total} input(s) are not valid versions")]
    ValidationFailed { invalid: usize, total: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) | Self::ValidationFailed { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) | Self::TomlSer(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_exit_with_parse_code() {
        let core = semord_core::Version::parse("0.0.0").unwrap_err();
        let err = Error::from(core);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Degenerate version"));
    }

    #[test]
    fn test_format_error_without_color() {
        let err = Error::invalid_args("no versions given");
        assert_eq!(format_error(&err, false), "Error: Invalid arguments: no versions given");
        assert!(err.should_show_help());
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_validation_failed_message() {
        let err = Error::ValidationFailed { invalid: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 input(s) are not valid versions");
        assert_eq!(err.exit_code(), 2);
    }
}
