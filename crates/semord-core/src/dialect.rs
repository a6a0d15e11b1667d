//! Parsing and precedence dialects
//!
//! The classic dialect is the default and keeps two deliberate departures
//! from SemVer 2.0: `0.0.0` is rejected, and pre-release identifiers are
//! compared as plain ASCII strings, so `alpha.10` sorts before `alpha.9`.
//! The standard dialect opts into SemVer 2.0 behavior for both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rules applied when parsing and ordering versions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `0.0.0` is degenerate and pre-release identifiers compare lexically
    #[default]
    Classic,
    /// SemVer 2.0: `0.0.0` is valid, numeric identifiers compare numerically
    /// and may not carry leading zeros
    Standard,
}

impl Dialect {
    /// Whether `0.0.0` is accepted
    pub fn allows_zero_version(self) -> bool {
        matches!(self, Dialect::Standard)
    }

    /// Whether purely numeric pre-release identifiers compare as integers
    pub fn numeric_identifiers(self) -> bool {
        matches!(self, Dialect::Standard)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Classic => f.write_str("classic"),
            Dialect::Standard => f.write_str("standard"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Dialect::Classic),
            "standard" | "semver2" => Ok(Dialect::Standard),
            other => Err(format!(
                "unknown dialect '{}', expected 'classic' or 'standard'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("classic".parse::<Dialect>().unwrap(), Dialect::Classic);
        assert_eq!("Standard".parse::<Dialect>().unwrap(), Dialect::Standard);
        assert_eq!("semver2".parse::<Dialect>().unwrap(), Dialect::Standard);
        assert!("loose".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_serde_names() {
        let json = serde_json::to_string(&Dialect::Standard).unwrap();
        assert_eq!(json, "\"standard\"");
        let back: Dialect = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(back, Dialect::Classic);
        assert_eq!(Dialect::default(), Dialect::Classic);
    }
}
