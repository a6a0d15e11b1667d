//! Semantic version value type
//!
//! Copyright (c) 2025 Semord Team
//! Licensed under the Apache-2.0 license

use crate::compare::{compare, compare_with};
use crate::dialect::Dialect;
use crate::error::{Component, Error, Result};
use crate::parser;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Immutable semantic version
///
/// Equality, ordering and hashing follow precedence: build metadata is
/// ignored, so `1.0.0+a == 1.0.0+b`. Use [`Version::identical`] to compare
/// including build metadata.
#[derive(Debug, Clone)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// Create a release version with no metadata
    ///
    /// Fails with [`Error::DegenerateVersion`] for `0.0.0`.
    pub fn new(major: u32, minor: u32, patch: u32) -> Result<Self> {
        if major == 0 && minor == 0 && patch == 0 {
            return Err(Error::DegenerateVersion {
                input: format!("{}.{}.{}", major, minor, patch),
            });
        }
        Ok(Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        })
    }

    /// Parse a version string using the classic dialect
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, Dialect::Classic)
    }

    /// Parse a version string under the given dialect
    pub fn parse_with(raw: &str, dialect: Dialect) -> Result<Self> {
        match parser::parse(raw, dialect) {
            Ok(parts) => {
                tracing::trace!(input = raw, %dialect, "parsed version");
                Ok(Self {
                    major: parts.major,
                    minor: parts.minor,
                    patch: parts.patch,
                    pre_release: parts.pre_release,
                    build: parts.build,
                })
            }
            Err(e) => {
                tracing::debug!(input = raw, %dialect, kind = %e.kind(), "rejected version");
                Err(e)
            }
        }
    }

    /// Parse a version string, panicking if it is invalid
    ///
    /// Intended for literals known to be valid at compile time, such as
    /// tests and constants.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message when `raw` is not a valid version.
    pub fn must_parse(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(version) => version,
            Err(e) => panic!("{}", e),
        }
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

    /// Pre-release identifiers, empty for a release
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata identifiers
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Check if this is a pre-release version
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Strictly lower precedence than `other`
    pub fn before(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Less
    }

    /// Strictly higher precedence than `other`
    pub fn after(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Greater
    }

    /// Equal precedence; build metadata may differ
    pub fn same(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Equal
    }

    /// Precedence comparison under a specific dialect
    pub fn cmp_with(&self, other: &Version, dialect: Dialect) -> Ordering {
        compare_with(self, other, dialect)
    }

    /// Structural equality, including build metadata
    pub fn identical(&self, other: &Version) -> bool {
        self.same(other) && self.build == other.build
    }

    /// Next major release: `(M+1).0.0`
    pub fn bump_major(&self) -> Result<Self> {
        let major = self.bumped(self.major, Component::Major)?;
        Ok(Self::release(major, 0, 0))
    }

    /// Next minor release: `M.(m+1).0`
    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self.bumped(self.minor, Component::Minor)?;
        Ok(Self::release(self.major, minor, 0))
    }

    /// Next patch release: `M.m.(p+1)`
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self.bumped(self.patch, Component::Patch)?;
        Ok(Self::release(self.major, self.minor, patch))
    }

    /// Bump the given component
    pub fn bump(&self, component: Component) -> Result<Self> {
        match component {
            Component::Major => self.bump_major(),
            Component::Minor => self.bump_minor(),
            Component::Patch => self.bump_patch(),
        }
    }

    /// Copy of this version without pre-release or build metadata
    pub fn without_metadata(&self) -> Self {
        Self::release(self.major, self.minor, self.patch)
    }

    fn bumped(&self, value: u32, component: Component) -> Result<u32> {
        value.checked_add(1).ok_or_else(|| Error::IntegerOverflow {
            input: self.to_string(),
            component,
        })
    }

    // Callers guarantee at least one non-zero component
    pub(crate) fn release(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
