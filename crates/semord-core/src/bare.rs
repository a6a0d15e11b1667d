//! Three-component version without metadata precedence
//!
//! [`BareVersion`] keeps only major, minor and patch. It accepts the same
//! grammar as [`Version`] but drops pre-release and build metadata on the
//! way in, so `1.0.0-alpha` and `1.0.0` are equal as bare versions. Use it
//! where only the release line matters; use [`Version`] for release ordering.

use crate::error::{Error, Result};
use crate::version::Version;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `MAJOR.MINOR.PATCH` ordered as a plain tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BareVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl BareVersion {
    /// Create a bare version; `0.0.0` is rejected as degenerate
    pub fn new(major: u32, minor: u32, patch: u32) -> Result<Self> {
        Version::new(major, minor, patch).map(|v| Self::from(&v))
    }

    /// Parse a full version string, discarding any metadata
    pub fn parse(raw: &str) -> Result<Self> {
        Version::parse(raw).map(|v| Self::from(&v))
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Promote to a full release [`Version`]
    pub fn into_version(self) -> Version {
        Version::release(self.major, self.minor, self.patch)
    }
}

impl From<&Version> for BareVersion {
    fn from(version: &Version) -> Self {
        Self {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
        }
    }
}

impl fmt::Display for BareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for BareVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for BareVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BareVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
