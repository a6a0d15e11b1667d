//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but valid version strings and values for property testing.

#![cfg(test)]

use crate::compare::compare_with;
use crate::dialect::Dialect;
use crate::sort::sort;
use crate::version::Version;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

/// Strategy for numeric components without leading zeros
pub fn component_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        0u32..=20,
        any::<u32>(),
    ]
}

/// Strategy for a single metadata identifier
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    "[0-9A-Za-z-]{1,12}"
}

/// Strategy for all-digit identifiers, leading zeros included, that fit in a `u128`
pub fn numeric_identifier_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,38}"
}

/// Strategy for a pre-release or build section
pub fn metadata_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    option::of(vec(identifier_strategy(), 1..4))
}

/// Strategy for canonical version strings accepted by the classic dialect
pub fn version_string_strategy() -> impl Strategy<Value = String> {
    (
        component_strategy(),
        component_strategy(),
        component_strategy(),
        metadata_strategy(),
        metadata_strategy(),
    )
        .prop_filter("0.0.0 is degenerate", |(major, minor, patch, _, _)| {
            *major != 0 || *minor != 0 || *patch != 0
        })
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut raw = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = pre {
                raw.push('-');
                raw.push_str(&pre.join("."));
            }
            if let Some(build) = build {
                raw.push('+');
                raw.push_str(&build.join("."));
            }
            raw
        })
}

/// Strategy for parsed versions
pub fn version_strategy() -> impl Strategy<Value = Version> {
    version_string_strategy().prop_map(|raw| Version::must_parse(&raw))
}

proptest! {
    #[test]
    fn prop_parse_then_format_round_trips(raw in version_string_strategy()) {
        let version = Version::parse(&raw).unwrap();
        prop_assert_eq!(version.to_string(), raw);
    }

    #[test]
    fn prop_exactly_one_relation_holds(a in version_strategy(), b in version_strategy()) {
        let relations = [a.before(&b), a.after(&b), a.same(&b)];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        prop_assert_eq!(a.before(&b), b.after(&a));
    }

    #[test]
    fn prop_build_metadata_never_affects_order(
        a in version_strategy(),
        b in version_strategy(),
        build in vec(identifier_strategy(), 1..3),
    ) {
        let tagged = Version::must_parse(&format!("{}+{}", a.without_metadata(), build.join(".")));
        prop_assert!(tagged.same(&a.without_metadata()));
        prop_assert_eq!(
            crate::compare(&tagged, &b),
            crate::compare(&a.without_metadata(), &b)
        );
    }

    #[test]
    fn prop_standard_numeric_identifiers_order_as_integers(
        a in numeric_identifier_strategy(),
        b in numeric_identifier_strategy(),
    ) {
        let left = Version::must_parse(&format!("1.0.0-rc.{}", a));
        let right = Version::must_parse(&format!("1.0.0-rc.{}", b));
        let expected = a.parse::<u128>().unwrap().cmp(&b.parse::<u128>().unwrap());
        prop_assert_eq!(compare_with(&left, &right, Dialect::Standard), expected);
    }

    #[test]
    fn prop_sorted_output_is_ordered(mut versions in vec(version_strategy(), 0..20)) {
        sort(&mut versions);
        for pair in versions.windows(2) {
            prop_assert!(!pair[1].before(&pair[0]));
        }
    }

    #[test]
    fn prop_standard_dialect_accepts_classic_output(raw in version_string_strategy()) {
        // leading-zero numeric identifiers are the only classic-only inputs
        let has_leading_zero = raw
            .split('+')
            .next()
            .and_then(|core| core.split_once('-'))
            .map(|(_, pre)| {
                pre.split('.').any(|id| {
                    id.len() > 1 && id.starts_with('0') && id.bytes().all(|b| b.is_ascii_digit())
                })
            })
            .unwrap_or(false);
        prop_assert_eq!(
            Version::parse_with(&raw, Dialect::Standard).is_ok(),
            !has_leading_zero
        );
    }
}
