//! SemVer §11 precedence.

use core::cmp::Ordering;

/// A type with a SemVer precedence relation.
///
/// Only [`precedence`](Precedence::precedence) is required; the relational predicates are derived
/// from it. Precedence is not necessarily structural equality: two [`Version`](crate::Version)s
/// that differ only in build metadata have equal precedence but are not `==`.
pub trait Precedence {
    /// Compares `self` and `other` by precedence.
    fn precedence(&self, other: &Self) -> Ordering;

    /// `self > other`
    fn greater_than(&self, other: &Self) -> bool {
        self.precedence(other).is_gt()
    }

    /// `self >= other`
    fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        self.precedence(other).is_ge()
    }

    /// `self` and `other` have equal precedence.
    fn equal_to(&self, other: &Self) -> bool {
        self.precedence(other).is_eq()
    }

    /// `self < other`
    fn less_than(&self, other: &Self) -> bool {
        self.precedence(other).is_lt()
    }

    /// `self <= other`
    fn less_than_or_equal_to(&self, other: &Self) -> bool {
        self.precedence(other).is_le()
    }
}

/// Returns true if `identifier` is made only of ASCII digits.
pub(crate) fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Compares two digit strings by numeric value without parsing them, so identifiers of any length
/// are supported. Leading zeros are skipped.
fn compare_numeric(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len()
        .cmp(&right.len())
        .then_with(|| left.as_bytes().cmp(right.as_bytes()))
}

/// Compares a single pair of identifiers.
///
/// - two numeric identifiers compare numerically (§11.4.1)
/// - anything else compares lexically in ASCII order (§11.4.2)
/// - a numeric identifier is always lower than a non-numeric one (§11.4.3)
pub(crate) fn compare_identifiers(left: &str, right: &str) -> Ordering {
    match (is_numeric(left), is_numeric(right)) {
        (true, true) => compare_numeric(left, right),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.as_bytes().cmp(right.as_bytes()),
    }
}

/// Compares two pre-release identifier sequences from left to right until a difference is found.
///
/// If every identifier of the shorter sequence equals its counterpart, the longer sequence has the
/// higher precedence (§11.4.4).
///
/// Note that this does not special-case empty sequences: whether an absent pre-release outranks a
/// present one (§11.3) is decided by the caller.
pub(crate) fn compare_identifier_sequences<'l, 'r, L, R>(left: L, right: R) -> Ordering
where
    L: IntoIterator<Item = &'l str>,
    R: IntoIterator<Item = &'r str>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match compare_identifiers(l, r) {
                Ordering::Equal => continue,
                decided => return decided,
            },
        }
    }
}
