//! Version string grammar
//!
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, where each numeric component is
//! one or more ASCII digits and each metadata section is one or more
//! dot-separated identifiers drawn from `[0-9A-Za-z-]`.
//!
//! The regex only fixes the overall shape. Metadata sections are matched
//! loosely and split afterwards so that empty identifiers can be reported
//! as metadata errors rather than as a generic format mismatch.
//!
//! Copyright (c) 2025 Semord Team
//! Licensed under the Apache-2.0 license

use crate::dialect::Dialect;
use crate::error::{Component, Error, MetadataSection, Result};
use regex::Regex;
use std::sync::OnceLock;

static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();

fn version_regex() -> &'static Regex {
    VERSION_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z.-]*))?(?:\+([0-9A-Za-z.-]*))?$")
            .expect("version grammar regex is valid")
    })
}

/// Validated pieces of a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parts {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Vec<String>,
    pub build: Vec<String>,
}

/// Parse a raw version string, stopping at the first violation
pub(crate) fn parse(raw: &str, dialect: Dialect) -> Result<Parts> {
    if raw.is_empty() {
        return Err(Error::malformed(raw, "version string is empty"));
    }

    let captures = version_regex().captures(raw).ok_or_else(|| {
        Error::malformed(raw, "expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")
    })?;

    let major = parse_component(raw, &captures[1], Component::Major)?;
    let minor = parse_component(raw, &captures[2], Component::Minor)?;
    let patch = parse_component(raw, &captures[3], Component::Patch)?;

    let pre_release = match captures.get(4) {
        Some(section) => {
            parse_metadata(raw, section.as_str(), MetadataSection::PreRelease, dialect)?
        }
        None => Vec::new(),
    };
    let build = match captures.get(5) {
        Some(section) => parse_metadata(raw, section.as_str(), MetadataSection::Build, dialect)?,
        None => Vec::new(),
    };

    if major == 0 && minor == 0 && patch == 0 && !dialect.allows_zero_version() {
        return Err(Error::DegenerateVersion {
            input: raw.to_string(),
        });
    }

    Ok(Parts {
        major,
        minor,
        patch,
        pre_release,
        build,
    })
}

fn parse_component(raw: &str, digits: &str, component: Component) -> Result<u32> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(Error::malformed(
            raw,
            format!("{} component '{}' has a leading zero", component, digits),
        ));
    }

    // The regex guarantees ASCII digits, so the only failure left is overflow
    digits.parse().map_err(|_| Error::IntegerOverflow {
        input: raw.to_string(),
        component,
    })
}

/// Split a metadata section into identifiers
fn parse_metadata(
    raw: &str,
    section: &str,
    kind: MetadataSection,
    dialect: Dialect,
) -> Result<Vec<String>> {
    if section.is_empty() {
        return Err(Error::invalid_metadata(raw, kind, "section is empty"));
    }
    if section.starts_with('.') {
        return Err(Error::invalid_metadata(raw, kind, "cannot start with a dot"));
    }
    if section.ends_with('.') {
        return Err(Error::invalid_metadata(raw, kind, "cannot end with a dot"));
    }

    let mut identifiers = Vec::new();
    for identifier in section.split('.') {
        if identifier.is_empty() {
            return Err(Error::invalid_metadata(raw, kind, "contains an empty identifier"));
        }
        if kind == MetadataSection::PreRelease
            && dialect.numeric_identifiers()
            && is_numeric(identifier)
            && identifier.len() > 1
            && identifier.starts_with('0')
        {
            return Err(Error::invalid_metadata(
                raw,
                kind,
                format!("numeric identifier '{}' has a leading zero", identifier),
            ));
        }
        identifiers.push(identifier.to_string());
    }

    Ok(identifiers)
}

/// Whether an identifier consists solely of ASCII digits
pub(crate) fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}
