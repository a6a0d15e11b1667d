//! End-to-end precedence tests through the public API
//!
//! These tests pin down the ordering rules consumers rely on, including the
//! classic dialect's lexical comparison of pre-release identifiers.

use semord_core::{compare, parse_all, sort, sorted, Dialect, Version};
use std::cmp::Ordering;

fn v(raw: &str) -> Version {
    Version::parse(raw).unwrap_or_else(|e| panic!("{} should parse: {}", raw, e))
}

const ASCENDING: [&str; 9] = [
    "0.1.0-alpha",
    "0.1.0",
    "0.1.5-alpha",
    "0.1.5-alpha.1",
    "0.1.5-beta",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-beta",
    "1.0.0",
];

#[test]
fn test_shuffled_versions_sort_into_precedence_order() {
    let shuffled = [
        "0.1.5-beta",
        "1.0.0-alpha",
        "0.1.0",
        "1.0.0",
        "0.1.5-alpha.1",
        "0.1.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-beta",
        "0.1.5-alpha",
    ];

    let mut versions = parse_all(shuffled, Dialect::Classic).expect("all inputs are valid");
    sort(&mut versions);

    let actual: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(actual, ASCENDING);
}

#[test]
fn test_reversed_input_sorts_the_same() {
    let versions = sorted(ASCENDING.iter().rev().map(|raw| v(raw)));
    let actual: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(actual, ASCENDING);
}

#[test]
fn test_each_adjacent_pair_is_strictly_ordered() {
    for pair in ASCENDING.windows(2) {
        let (lower, higher) = (v(pair[0]), v(pair[1]));
        assert!(lower.before(&higher), "{} should be before {}", pair[0], pair[1]);
        assert!(higher.after(&lower), "{} should be after {}", pair[1], pair[0]);
        assert!(!lower.same(&higher));
    }
}

#[test]
fn test_before() {
    for (before, after) in [
        ("0.9.0", "1.0.0"),
        ("1.0.0-alpha", "1.0.0"),
        ("1.0.0-alpha", "1.0.0-beta"),
        ("1.0.0-alpha.1", "1.0.0-alpha.2"),
        ("1.0.0-alpha", "1.0.0-alpha.1"),
    ] {
        assert!(v(before).before(&v(after)), "{} should be before {}", before, after);
    }
}

#[test]
fn test_after() {
    for (after, before) in [
        ("1.0.0", "0.9.0"),
        ("1.0.0", "1.0.0-alpha"),
        ("1.0.0-beta", "1.0.0-alpha"),
        ("1.0.0-alpha.2", "1.0.0-alpha.1"),
    ] {
        assert!(v(after).after(&v(before)), "{} should be after {}", after, before);
    }
}

#[test]
fn test_same() {
    for (a, b) in [
        ("1.0.0", "1.0.0"),
        ("1.0.0-alpha", "1.0.0-alpha"),
        ("1.0.0-alpha.1", "1.0.0-alpha.1"),
        ("1.0.0-alpha.1.2", "1.0.0-alpha.1.2"),
        ("1.0.0+test", "1.0.0+test"),
        ("1.0.0+123", "1.0.0+456"),
        ("1.0.0-beta+123", "1.0.0-beta+456"),
        ("1.2.3-beta+123", "1.2.3-beta+456"),
    ] {
        assert!(v(a).same(&v(b)), "{} should be same as {}", a, b);
        assert_eq!(compare(&v(a), &v(b)), Ordering::Equal);
    }
}

#[test]
fn test_matching_core_with_different_pre_release_is_not_same() {
    assert!(!v("1.0.0-alpha").same(&v("1.0.0-alpha.1")));
    assert!(!v("1.0.0-alpha").same(&v("1.0.0")));
    assert!(!v("1.0.0-alpha").same(&v("1.0.0-beta")));
}

#[test]
fn test_classic_dialect_keeps_lexical_identifier_order() {
    // SemVer 2.0 would put rc.9 first; the classic dialect does not
    assert!(v("1.0.0-rc.10").before(&v("1.0.0-rc.9")));

    let a = Version::parse_with("1.0.0-rc.10", Dialect::Standard).unwrap();
    let b = Version::parse_with("1.0.0-rc.9", Dialect::Standard).unwrap();
    assert_eq!(a.cmp_with(&b, Dialect::Standard), Ordering::Greater);
    assert_eq!(a.cmp_with(&b, Dialect::Classic), Ordering::Less);
}
