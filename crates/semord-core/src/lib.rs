//! Semord Core - Semantic version parsing and precedence ordering
//!
//! This crate turns `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into
//! immutable [`Version`] values, orders them by release precedence and
//! renders them back to their canonical form.
//!
//! # Main Components
//!
//! - **Parsing**: [`Version::parse`] validates the grammar and reports the
//!   first violation as an [`Error`]
//! - **Precedence**: [`compare`] plus `Ord`, `before`, `after` and `same`;
//!   build metadata never affects ordering
//! - **Formatting**: `Display` writes the canonical string, so parsing and
//!   formatting round-trip
//! - **Sequences**: [`sort`], [`sorted`], [`latest`] and friends
//! - **Bare versions**: [`BareVersion`] orders by major/minor/patch only
//!
//! # Dialects
//!
//! The default [`Dialect::Classic`] rejects `0.0.0` and compares pre-release
//! identifiers as ASCII strings, so `1.0.0-rc.10` sorts *before*
//! `1.0.0-rc.9`. Both differ from SemVer 2.0. [`Dialect::Standard`] opts into
//! the SemVer 2.0 rules through [`Version::parse_with`], [`compare_with`] and
//! [`sort_with`]. The `Ord`/`Eq`/`Hash` impls always use the classic rules.
//!
//! # Example
//!
//! ```
//! use semord_core::{sort, Version};
//!
//! let mut versions = vec![
//!     Version::parse("1.0.0").unwrap(),
//!     Version::parse("1.0.0-alpha").unwrap(),
//!     Version::parse("0.9.0").unwrap(),
//! ];
//! sort(&mut versions);
//!
//! assert_eq!(versions[0].to_string(), "0.9.0");
//! assert!(versions[1].before(&versions[2]));
//! assert!(Version::parse("1.0.0+a").unwrap().same(&Version::parse("1.0.0+b").unwrap()));
//! ```
//!
//! Copyright (c) 2025 Semord Team
//! Licensed under the Apache-2.0 license

pub mod bare;
pub mod compare;
pub mod dialect;
pub mod error;
mod parser;
pub mod sort;
pub mod version;

mod proptest_strategies;

// Re-export main types for convenience
pub use bare::BareVersion;
pub use compare::{compare, compare_pre_release, compare_with};
pub use dialect::Dialect;
pub use error::{Component, Error, ErrorKind, MetadataSection, Result};
pub use sort::{
    latest, parse_all, sort, sort_descending, sort_descending_with, sort_with, sorted,
};
pub use version::Version;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_agree() {
        let a = Version::parse("1.0.0-alpha").unwrap();
        let b = Version::parse("1.0.0").unwrap();
        assert_eq!(compare(&a, &b), a.cmp(&b));
        assert_eq!(BareVersion::from(&a), BareVersion::from(&b));
    }
}
