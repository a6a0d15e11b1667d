//! Error types for the Semord core library
//!
//! Parsing is the only fallible operation in this crate. Every failure is
//! reported through [`Error`], which carries the offending input so callers
//! can surface it without keeping the original string around.
//!
//! Copyright (c) 2025 Semord Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use thiserror::Error;

/// Main error type for version parsing and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input does not match the overall `MAJOR.MINOR.PATCH[-PRE][+BUILD]` grammar
    #[error("Malformed version '{input}': {reason}")]
    MalformedFormat { input: String, reason: String },

    /// A pre-release or build section contains an empty or otherwise invalid identifier
    #[error("Invalid {section} metadata in '{input}': {reason}")]
    InvalidMetadata {
        input: String,
        section: MetadataSection,
        reason: String,
    },

    /// Major, minor and patch are all zero
    #[error("Degenerate version '{input}': major, minor and patch cannot all be zero")]
    DegenerateVersion { input: String },

    /// A numeric component does not fit in 32 bits
    #[error("Integer overflow in {component} component of '{input}'")]
    IntegerOverflow { input: String, component: Component },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy without the payload, useful for matching and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedFormat,
    InvalidMetadata,
    DegenerateVersion,
    IntegerOverflow,
}

/// Which metadata section of a version string an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataSection {
    PreRelease,
    Build,
}

/// Numeric component of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Error {
    /// Create a malformed format error
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid metadata error
    pub fn invalid_metadata(
        input: impl Into<String>,
        section: MetadataSection,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidMetadata {
            input: input.into(),
            section,
            reason: reason.into(),
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedFormat { .. } => ErrorKind::MalformedFormat,
            Self::InvalidMetadata { .. } => ErrorKind::InvalidMetadata,
            Self::DegenerateVersion { .. } => ErrorKind::DegenerateVersion,
            Self::IntegerOverflow { .. } => ErrorKind::IntegerOverflow,
        }
    }

    /// The raw input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::MalformedFormat { input, .. }
            | Self::InvalidMetadata { input, .. }
            | Self::DegenerateVersion { input }
            | Self::IntegerOverflow { input, .. } => input,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MalformedFormat => "malformed-format",
            ErrorKind::InvalidMetadata => "invalid-metadata",
            ErrorKind::DegenerateVersion => "degenerate-version",
            ErrorKind::IntegerOverflow => "integer-overflow",
        };
        f.write_str(name)
    }
}

impl fmt::Display for MetadataSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataSection::PreRelease => f.write_str("pre-release"),
            MetadataSection::Build => f.write_str("build"),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => f.write_str("major"),
            Component::Minor => f.write_str("minor"),
            Component::Patch => f.write_str("patch"),
        }
    }
}
