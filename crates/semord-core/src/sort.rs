//! Ordering helpers for sequences of versions
//!
//! All sorts are stable: versions of equal precedence (for example ones that
//! differ only in build metadata) keep their input order.

use crate::compare::compare_with;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::version::Version;

/// Sort ascending by precedence
pub fn sort(versions: &mut [Version]) {
    versions.sort();
}

/// Sort descending by precedence
pub fn sort_descending(versions: &mut [Version]) {
    sort_descending_with(versions, Dialect::Classic);
}

/// Sort ascending by precedence under the given dialect
pub fn sort_with(versions: &mut [Version], dialect: Dialect) {
    versions.sort_by(|a, b| compare_with(a, b, dialect));
}

/// Sort descending by precedence under the given dialect
///
/// Versions of equal precedence keep their input order.
pub fn sort_descending_with(versions: &mut [Version], dialect: Dialect) {
    versions.sort_by(|a, b| compare_with(b, a, dialect));
}

/// Collect and sort ascending
pub fn sorted<I>(versions: I) -> Vec<Version>
where
    I: IntoIterator<Item = Version>,
{
    let mut versions: Vec<Version> = versions.into_iter().collect();
    sort(&mut versions);
    versions
}

/// Highest-precedence version; the last one wins among equals
pub fn latest(versions: &[Version]) -> Option<&Version> {
    versions.iter().max()
}

/// Parse every input, stopping at the first invalid one
pub fn parse_all<'a, I>(inputs: I, dialect: Dialect) -> Result<Vec<Version>>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs
        .into_iter()
        .map(|raw| Version::parse_with(raw, dialect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn strings(versions: &[Version]) -> Vec<String> {
        versions.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_sort_is_stable_for_equal_precedence() {
        let mut versions = parse_all(["1.0.0+b", "0.5.0", "1.0.0+a"], Dialect::Classic).unwrap();
        sort(&mut versions);
        assert_eq!(strings(&versions), ["0.5.0", "1.0.0+b", "1.0.0+a"]);
    }

    #[test]
    fn test_sort_descending() {
        let mut versions = parse_all(["1.0.0-alpha", "1.0.0", "0.9.0"], Dialect::Classic).unwrap();
        sort_descending(&mut versions);
        assert_eq!(strings(&versions), ["1.0.0", "1.0.0-alpha", "0.9.0"]);
    }

    #[test]
    fn test_sort_with_standard_dialect() {
        let inputs = ["1.0.0-rc.10", "1.0.0-rc.9", "1.0.0-rc.1"];

        let mut classic = parse_all(inputs, Dialect::Classic).unwrap();
        sort_with(&mut classic, Dialect::Classic);
        assert_eq!(strings(&classic), ["1.0.0-rc.1", "1.0.0-rc.10", "1.0.0-rc.9"]);

        let mut standard = parse_all(inputs, Dialect::Standard).unwrap();
        sort_with(&mut standard, Dialect::Standard);
        assert_eq!(strings(&standard), ["1.0.0-rc.1", "1.0.0-rc.9", "1.0.0-rc.10"]);
    }

    #[test]
    fn test_sort_descending_with_dialect() {
        let mut versions =
            parse_all(["1.0.0-rc.9", "1.0.0-rc.10+b", "1.0.0-rc.010+a"], Dialect::Classic).unwrap();
        sort_descending_with(&mut versions, Dialect::Standard);
        assert_eq!(strings(&versions), ["1.0.0-rc.10+b", "1.0.0-rc.010+a", "1.0.0-rc.9"]);

        sort_descending_with(&mut versions, Dialect::Classic);
        assert_eq!(strings(&versions), ["1.0.0-rc.9", "1.0.0-rc.10+b", "1.0.0-rc.010+a"]);
    }

    #[test]
    fn test_latest() {
        let versions =
            parse_all(["1.0.0-beta", "1.0.0+x", "0.9.9", "1.0.0+y"], Dialect::Classic).unwrap();
        assert_eq!(latest(&versions).unwrap().to_string(), "1.0.0+y");
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_parse_all_stops_at_first_error() {
        let err = parse_all(["1.0.0", "0.0.0", "1.0"], Dialect::Classic).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateVersion);
        assert_eq!(err.input(), "0.0.0");
    }

    #[test]
    fn test_sorted_from_iterator() {
        let versions = sorted(vec![
            Version::must_parse("2.0.0"),
            Version::must_parse("1.0.0"),
        ]);
        assert_eq!(strings(&versions), ["1.0.0", "2.0.0"]);
    }
}
