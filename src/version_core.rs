use crate::{error::ValidationError, precedence::Precedence};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// Checks that a numeric component is not negative.
pub(crate) fn non_negative(value: i64, field: &'static str) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| {
        log::debug!("rejected negative {field} value {value}");
        ValidationError::Negative { field, value }
    })
}

/// The `major.minor.patch` triple of a version, without any metadata.
///
/// Besides ordering, it offers range predicates for checking compatibility. Predicates take a
/// [`CoreBound`], which can be given as just a major, a `(major, minor)` pair, or a full
/// `(major, minor, patch)` triple.
///
/// ```
/// use semantic_versions::prelude::*;
///
/// let core = VersionCore::new(2, 5, 0);
/// assert!(core.at_least(2));         // >= 2.0.0
/// assert!(!core.at_least((2, 6)));   // >= 2.6.0
/// assert!(core.at_most((2, 5)));     // <= 2.5.*
/// assert!(core.is_any(2));           // == 2.*.*
/// assert!(core.is_any((2, 5)));      // == 2.5.*
/// assert!(!core.is_any(3));          // == 3.*.*
/// assert!(core.is(2, 5, 0));         // == 2.5.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionCore {
    major: u64,
    minor: u64,
    patch: u64,
}

/// A (possibly incomplete) `major[.minor[.patch]]` bound for the [`VersionCore`] range
/// predicates. Components that are `None` were omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoreBound {
    /// Always given.
    pub major: u64,
    /// `None` when omitted.
    pub minor: Option<u64>,
    /// `None` when omitted. Only ever given together with `minor`.
    pub patch: Option<u64>,
}

impl CoreBound {
    /// The lowest triple covered by this bound: omitted components are `0`.
    pub fn floor(&self) -> VersionCore {
        VersionCore::new(self.major, self.minor.unwrap_or(0), self.patch.unwrap_or(0))
    }

    /// The highest triple covered by this bound: omitted components are [`u64::MAX`].
    pub fn ceiling(&self) -> VersionCore {
        VersionCore::new(
            self.major,
            self.minor.unwrap_or(u64::MAX),
            self.patch.unwrap_or(u64::MAX),
        )
    }
}

impl From<u64> for CoreBound {
    fn from(major: u64) -> Self {
        Self {
            major,
            minor: None,
            patch: None,
        }
    }
}

impl From<(u64, u64)> for CoreBound {
    fn from((major, minor): (u64, u64)) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: None,
        }
    }
}

impl From<(u64, u64, u64)> for CoreBound {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
        }
    }
}

impl From<VersionCore> for CoreBound {
    fn from(core: VersionCore) -> Self {
        (core.major, core.minor, core.patch).into()
    }
}

impl VersionCore {
    /// `0.0.0`
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a core from components that are already known to be non-negative.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Creates a core, rejecting negative components.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] for the first negative component.
    pub fn of(major: i64, minor: i64, patch: i64) -> Result<Self, ValidationError> {
        Ok(Self::new(
            non_negative(major, "major")?,
            non_negative(minor, "minor")?,
            non_negative(patch, "patch")?,
        ))
    }

    /// Returns a builder seeded with this core's components.
    pub fn to_builder(&self) -> VersionCoreBuilder {
        VersionCoreBuilder { core: *self }
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns true if this is `0.0.0`.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `self >= bound`, where omitted components of `bound` are `0`.
    pub fn at_least(&self, bound: impl Into<CoreBound>) -> bool {
        *self >= bound.into().floor()
    }

    /// `self <= bound`, where omitted components of `bound` are [`u64::MAX`].
    pub fn at_most(&self, bound: impl Into<CoreBound>) -> bool {
        *self <= bound.into().ceiling()
    }

    /// `self == major.minor.patch`
    pub fn is(&self, major: u64, minor: u64, patch: u64) -> bool {
        *self == Self::new(major, minor, patch)
    }

    /// Matches `bound` with omitted components as wildcards, e.g. `is_any((1, 2))` is `1.2.*`.
    pub fn is_any(&self, bound: impl Into<CoreBound>) -> bool {
        let bound = bound.into();
        self.at_least(bound) && self.at_most(bound)
    }
}

impl Precedence for VersionCore {
    fn precedence(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Display for VersionCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Changes the components of a [`VersionCore`] one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionCoreBuilder {
    core: VersionCore,
}

impl VersionCoreBuilder {
    /// Sets the major component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] immediately if `major` is negative.
    pub fn major(mut self, major: i64) -> Result<Self, ValidationError> {
        self.core.major = non_negative(major, "major")?;
        Ok(self)
    }

    /// Sets the minor component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] immediately if `minor` is negative.
    pub fn minor(mut self, minor: i64) -> Result<Self, ValidationError> {
        self.core.minor = non_negative(minor, "minor")?;
        Ok(self)
    }

    /// Sets the patch component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] immediately if `patch` is negative.
    pub fn patch(mut self, patch: i64) -> Result<Self, ValidationError> {
        self.core.patch = non_negative(patch, "patch")?;
        Ok(self)
    }

    /// Finishes the builder.
    pub fn build(self) -> VersionCore {
        self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    #[fixture]
    fn v250() -> VersionCore {
        VersionCore::new(2, 5, 0)
    }

    #[rstest]
    #[case(2u64.into(), true)]
    #[case((2, 5).into(), true)]
    #[case((2, 5, 0).into(), true)]
    #[case((2, 6).into(), false)]
    #[case((2, 5, 1).into(), false)]
    #[case(3u64.into(), false)]
    #[case(1u64.into(), true)]
    fn test_at_least(v250: VersionCore, #[case] bound: CoreBound, #[case] expected: bool) {
        assert_eq!(expected, v250.at_least(bound));
    }

    #[rstest]
    #[case(2u64.into(), true)]
    #[case((2, 5).into(), true)]
    #[case((2, 5, 0).into(), true)]
    #[case((2, 4).into(), false)]
    #[case((2, 4, 99).into(), false)]
    #[case(1u64.into(), false)]
    #[case(3u64.into(), true)]
    fn test_at_most(v250: VersionCore, #[case] bound: CoreBound, #[case] expected: bool) {
        assert_eq!(expected, v250.at_most(bound));
    }

    #[rstest]
    #[case(2u64.into(), true)]
    #[case((2, 5).into(), true)]
    #[case((2, 5, 0).into(), true)]
    #[case(3u64.into(), false)]
    #[case((2, 4).into(), false)]
    #[case((2, 5, 1).into(), false)]
    fn test_is_any(v250: VersionCore, #[case] bound: CoreBound, #[case] expected: bool) {
        assert_eq!(expected, v250.is_any(bound));
    }

    #[rstest]
    fn test_is(v250: VersionCore) {
        assert!(v250.is(2, 5, 0));
        assert!(!v250.is(2, 5, 1));
        assert!(!v250.is(2, 0, 0));
    }

    #[test]
    fn test_at_most_ceiling_is_max() {
        let huge = VersionCore::new(1, u64::MAX, u64::MAX);
        assert!(huge.at_most(1u64));
        assert!(huge.is_any(1u64));
        assert!(!huge.at_most((1, u64::MAX - 1)));
    }

    #[test]
    fn test_numeric_ordering() {
        let ordered = [
            VersionCore::new(1, 2, 3),
            VersionCore::new(1, 2, 4),
            VersionCore::new(1, 3, 0),
            VersionCore::new(2, 0, 0),
            VersionCore::new(9, 0, 0),
            VersionCore::new(10, 0, 0),
        ];
        for (lower, higher) in ordered.iter().tuple_windows() {
            assert!(lower.less_than(higher), "{lower} < {higher}");
            assert_eq!(Ordering::Greater, higher.precedence(lower));
        }
    }

    #[rstest]
    #[case(-1, 0, 0, "major")]
    #[case(0, -1, 0, "minor")]
    #[case(0, 0, -1, "patch")]
    fn test_of_negative(
        #[case] major: i64,
        #[case] minor: i64,
        #[case] patch: i64,
        #[case] field: &'static str,
    ) {
        let actual = VersionCore::of(major, minor, patch);
        assert_eq!(
            Err(ValidationError::Negative { field, value: -1 }),
            actual
        );
    }

    #[test]
    fn test_builder() {
        let core = VersionCore::ZERO
            .to_builder()
            .major(1)
            .and_then(|b| b.minor(2))
            .and_then(|b| b.patch(3))
            .unwrap()
            .build();
        assert_eq!(VersionCore::new(1, 2, 3), core);
        assert_eq!("1.2.3", core.to_string());
    }

    #[test]
    fn test_builder_rejects_negative() {
        let actual = VersionCore::ZERO.to_builder().minor(-7);
        assert_eq!(
            Err(ValidationError::Negative {
                field: "minor",
                value: -7
            }),
            actual
        );
    }

    #[test]
    fn test_zero() {
        assert!(VersionCore::ZERO.is_zero());
        assert_eq!(VersionCore::default(), VersionCore::ZERO);
        assert!(!VersionCore::new(0, 0, 1).is_zero());
    }
}
