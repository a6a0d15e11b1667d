//! Version precedence
//!
//! Major, minor and patch are compared numerically in that order. On a tie
//! the pre-release lists decide: a version without pre-release identifiers
//! outranks one with them, identifiers are then compared pairwise, and a
//! longer list outranks its own prefix. Build metadata is never consulted.
//!
//! In the classic dialect identifiers compare as ASCII strings, so `"10"`
//! sorts before `"9"`. This differs from SemVer 2.0 on purpose; the standard
//! dialect restores numeric comparison.
//!
//! Copyright (c) 2025 Semord Team
//! Licensed under the Apache-2.0 license

use crate::dialect::Dialect;
use crate::parser::is_numeric;
use crate::version::Version;
use std::cmp::Ordering;

/// Three-way precedence comparison using the classic dialect
pub fn compare(a: &Version, b: &Version) -> Ordering {
    compare_with(a, b, Dialect::Classic)
}

/// Three-way precedence comparison under the given dialect
pub fn compare_with(a: &Version, b: &Version, dialect: Dialect) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| compare_pre_release(a.pre_release(), b.pre_release(), dialect))
}

/// Compare two pre-release identifier lists
pub fn compare_pre_release<S: AsRef<str>>(a: &[S], b: &[S], dialect: Dialect) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (left, right) in a.iter().zip(b.iter()) {
        match compare_identifier(left.as_ref(), right.as_ref(), dialect) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    a.len().cmp(&b.len())
}

fn compare_identifier(a: &str, b: &str, dialect: Dialect) -> Ordering {
    if !dialect.numeric_identifiers() {
        return a.cmp(b);
    }

    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

// Digit strings of any width; classic-parsed identifiers may carry leading zeros
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}
