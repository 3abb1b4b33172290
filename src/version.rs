use crate::{
    error::{ParseError, ValidationError},
    grammar::{Grammar, MetadataKind},
    metadata::Metadata,
    precedence::Precedence,
    version_core::{CoreBound, VersionCore, VersionCoreBuilder},
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// Treats `None` and `""` alike as "no metadata", otherwise validates.
fn metadata_or_empty<'a>(
    kind: MetadataKind,
    value: impl Into<Option<&'a str>>,
) -> Result<Metadata, ValidationError> {
    match value.into() {
        Some(value) => Metadata::parse(kind, value),
        None => Ok(Metadata::EMPTY),
    }
}

/// A [Semantic Versioning 2.0.0](https://semver.org/) version: a `major.minor.patch` core plus
/// optional pre-release and build metadata.
///
/// Versions are immutable. They are created with the validating factories ([`Version::of`],
/// [`Version::with_metadata`], ...), parsed from text ([`Version::parse_strict`],
/// [`Version::parse`], ...), or assembled with a [`VersionBuilder`]. Every constructor either
/// returns a fully valid version or fails.
///
/// # Equality and ordering
///
/// There are two notions of sameness:
///
/// - `==` is structural: all five fields must match, build metadata included.
/// - [`Version::equivalent_to`] (and the [`Precedence`] predicates) follow SemVer precedence,
///   which ignores build metadata.
///
/// [`Ord`] sorts by precedence and only looks at build metadata to break ties between otherwise
/// equivalent versions, so that it agrees with `==`.
///
/// # Examples
///
/// ```
/// use semantic_versions::prelude::*;
///
/// let release = Version::parse_strict_or_fail("1.0.0").unwrap();
/// let pre = Version::parse_strict_or_fail("1.0.0-rc.1").unwrap();
/// assert!(release.greater_than(&pre));
/// assert!(pre < release);
///
/// let a = Version::parse_strict_or_fail("1.0.0+build1").unwrap();
/// let b = Version::parse_strict_or_fail("1.0.0+build2").unwrap();
/// assert!(a.equivalent_to(&b));
/// assert_ne!(a, b);
/// ```
///
/// Partial versions default the missing components to zero:
///
/// ```
/// use semantic_versions::prelude::*;
///
/// assert_eq!(Some(Version::of(1, 2, 0).unwrap()), Version::parse("1.2"));
/// assert_eq!(None, Version::parse_strict("1.2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    core: VersionCore,
    prerelease: Metadata,
    build: Metadata,
}

impl Version {
    /// `0.0.0`, without metadata.
    pub const ZERO: Self = Self {
        core: VersionCore::ZERO,
        prerelease: Metadata::EMPTY,
        build: Metadata::EMPTY,
    };

    /// Returns [`Version::ZERO`].
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns a builder seeded with [`Version::ZERO`].
    pub fn builder() -> VersionBuilder {
        Self::ZERO.to_builder()
    }

    /// Assembles a version from parts.
    ///
    /// Any [`Metadata`] is acceptable build metadata, but `prerelease` is checked against the
    /// stricter pre-release grammar, since it may have been validated as build metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] if an identifier of `prerelease` is not a valid
    /// pre-release identifier.
    pub fn from_parts(
        core: VersionCore,
        prerelease: Metadata,
        build: Metadata,
    ) -> Result<Self, ValidationError> {
        for identifier in prerelease.iter() {
            MetadataKind::Prerelease.validate_identifier(identifier)?;
        }
        Ok(Self {
            core,
            prerelease,
            build,
        })
    }

    /// Creates `major.minor.patch`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] if any component is negative.
    pub fn of(major: i64, minor: i64, patch: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            core: VersionCore::of(major, minor, patch)?,
            ..Self::ZERO
        })
    }

    /// Creates `major.minor.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] if any component is negative.
    pub fn of_major_minor(major: i64, minor: i64) -> Result<Self, ValidationError> {
        Self::of(major, minor, 0)
    }

    /// Creates `major.0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] if `major` is negative.
    pub fn of_major(major: i64) -> Result<Self, ValidationError> {
        Self::of(major, 0, 0)
    }

    /// Creates `major.minor.patch[-prerelease][+build]`. `None` and `""` both mean "absent" for
    /// `prerelease` and `build`.
    ///
    /// ```
    /// use semantic_versions::prelude::*;
    ///
    /// let version = Version::with_metadata(1, 0, 0, "alpha.1", None).unwrap();
    /// assert_eq!("1.0.0-alpha.1", version.to_string());
    ///
    /// let version = Version::with_metadata(1, 0, 0, "", "exp.sha.5114f85").unwrap();
    /// assert_eq!("1.0.0+exp.sha.5114f85", version.to_string());
    ///
    /// assert!(Version::with_metadata(1, 0, 0, "01", None).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`ValidationError::Negative`] if any component is negative.
    /// - Returns [`ValidationError::PatternMismatch`] if `prerelease` or `build` do not match their
    ///   grammar.
    pub fn with_metadata<'p, 'b>(
        major: i64,
        minor: i64,
        patch: i64,
        prerelease: impl Into<Option<&'p str>>,
        build: impl Into<Option<&'b str>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            core: VersionCore::of(major, minor, patch)?,
            prerelease: metadata_or_empty(MetadataKind::Prerelease, prerelease)?,
            build: metadata_or_empty(MetadataKind::Build, build)?,
        })
    }

    /// Parses `input` with the given [`Grammar`]. The whole input must match.
    ///
    /// # Errors
    ///
    /// - Returns [`ParseError::GrammarMismatch`] if `input` does not match `grammar`.
    /// - Returns [`ParseError::ComponentOverflow`] if a numeric component does not fit in a `u64`.
    pub fn parse_with(grammar: Grammar, input: &str) -> Result<Self, ParseError> {
        let captures = grammar.captures(input)?;

        let component = |field: &'static str, text: Option<&str>| -> Result<u64, ParseError> {
            match text {
                // the grammar only lets through digits without leading zeros, so the only way
                // this can fail is overflow
                Some(text) => text.parse().map_err(|_| ParseError::ComponentOverflow {
                    field,
                    input: input.to_owned(),
                }),
                None => Ok(0),
            }
        };

        let core = VersionCore::new(
            component("major", Some(captures.major))?,
            component("minor", captures.minor)?,
            component("patch", captures.patch)?,
        );

        // the grammar has already validated these, so splitting is all that's left
        Ok(Self {
            core,
            prerelease: captures
                .prerelease
                .map_or(Metadata::EMPTY, Metadata::split_unchecked),
            build: captures.build.map_or(Metadata::EMPTY, Metadata::split_unchecked),
        })
    }

    /// Parses a full or partial version (`1`, `1.2`, `1.2.3-rc.1+build`, ...), returning `None` if
    /// it is invalid. Missing minor and patch components default to `0`.
    pub fn parse(input: &str) -> Option<Self> {
        Self::parse_or_fail(input).ok()
    }

    /// Like [`Version::parse`], but returns why parsing failed.
    ///
    /// # Errors
    ///
    /// See [`Version::parse_with`].
    pub fn parse_or_fail(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(Grammar::Partial, input)
    }

    /// Parses a full SemVer 2.0.0 version, returning `None` if it is invalid.
    pub fn parse_strict(input: &str) -> Option<Self> {
        Self::parse_strict_or_fail(input).ok()
    }

    /// Like [`Version::parse_strict`], but returns why parsing failed.
    ///
    /// # Errors
    ///
    /// See [`Version::parse_with`].
    pub fn parse_strict_or_fail(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(Grammar::Strict, input)
    }

    /// Returns a builder seeded with a copy of this version's fields.
    pub fn to_builder(&self) -> VersionBuilder {
        VersionBuilder {
            core: self.core.to_builder(),
            prerelease: self.prerelease.clone(),
            build: self.build.clone(),
        }
    }

    /// The `major.minor.patch` triple.
    pub fn core(&self) -> VersionCore {
        self.core
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.core.major()
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.core.minor()
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.core.patch()
    }

    /// The pre-release identifiers, or `None` if this is not a pre-release.
    pub fn prerelease(&self) -> Option<&Metadata> {
        self.prerelease.as_option()
    }

    /// The build identifiers, or `None` if there are none.
    pub fn build(&self) -> Option<&Metadata> {
        self.build.as_option()
    }

    /// Returns true if there is pre-release or build metadata.
    pub fn has_metadata(&self) -> bool {
        self.prerelease.is_present() || self.build.is_present()
    }

    /// Returns true if this is a pre-release.
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_present()
    }

    /// Returns true if `self` and `other` have the same precedence, i.e. they are equal except
    /// maybe for build metadata.
    pub fn equivalent_to(&self, other: &Self) -> bool {
        self.equal_to(other)
    }

    /// See [`VersionCore::at_least`]. Metadata is ignored.
    pub fn at_least(&self, bound: impl Into<CoreBound>) -> bool {
        self.core.at_least(bound)
    }

    /// See [`VersionCore::at_most`]. Metadata is ignored.
    pub fn at_most(&self, bound: impl Into<CoreBound>) -> bool {
        self.core.at_most(bound)
    }

    /// See [`VersionCore::is`]. Metadata is ignored.
    pub fn is(&self, major: u64, minor: u64, patch: u64) -> bool {
        self.core.is(major, minor, patch)
    }

    /// See [`VersionCore::is_any`]. Metadata is ignored.
    pub fn is_any(&self, bound: impl Into<CoreBound>) -> bool {
        self.core.is_any(bound)
    }
}

impl Precedence for Version {
    /// Compares by SemVer precedence (§11):
    ///
    /// 1. major, minor, and patch, numerically
    /// 2. a release has higher precedence than a pre-release with the same core
    /// 3. pre-release identifiers, left to right
    ///
    /// Build metadata is ignored.
    fn precedence(&self, other: &Self) -> Ordering {
        self.core.cmp(&other.core).then_with(|| {
            match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.prerelease.precedence(&other.prerelease),
            }
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
            .then_with(|| self.build.identifiers().cmp(other.build.identifiers()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Parses with the strict grammar. See [`Version::parse_strict_or_fail`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict_or_fail(s)
    }
}

impl From<VersionCore> for Version {
    fn from(core: VersionCore) -> Self {
        Self {
            core,
            ..Self::ZERO
        }
    }
}

impl Display for Version {
    /// Renders the canonical form, `major.minor.patch[-prerelease][+build]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core)?;
        if let Some(prerelease) = self.prerelease() {
            write!(f, "-{prerelease}")?;
        }
        if let Some(build) = self.build() {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

/// Assembles a new [`Version`] one field at a time.
///
/// Setters validate right away and return the error, so an invalid builder can't be finished.
///
/// ```
/// use semantic_versions::prelude::*;
///
/// # fn main() -> Result<(), ValidationError> {
/// let version = Version::builder()
///     .major(2)?
///     .minor(1)?
///     .prerelease("beta.3")?
///     .build_metadata("linux")?
///     .build();
/// assert_eq!("2.1.0-beta.3+linux", version.to_string());
///
/// let release = version.to_builder().prerelease(None)?.build();
/// assert_eq!("2.1.0+linux", release.to_string());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBuilder {
    core: VersionCoreBuilder,
    prerelease: Metadata,
    build: Metadata,
}

impl VersionBuilder {
    /// Sets the major component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] if `major` is negative.
    pub fn major(mut self, major: i64) -> Result<Self, ValidationError> {
        self.core = self.core.major(major)?;
        Ok(self)
    }

    /// Sets the minor component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] if `minor` is negative.
    pub fn minor(mut self, minor: i64) -> Result<Self, ValidationError> {
        self.core = self.core.minor(minor)?;
        Ok(self)
    }

    /// Sets the patch component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Negative`] if `patch` is negative.
    pub fn patch(mut self, patch: i64) -> Result<Self, ValidationError> {
        self.core = self.core.patch(patch)?;
        Ok(self)
    }

    /// Replaces all three numeric components.
    pub fn core(mut self, core: VersionCore) -> Self {
        self.core = core.to_builder();
        self
    }

    /// Sets the pre-release. `None` or `""` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] if `prerelease` does not match the pre-release
    /// grammar.
    pub fn prerelease<'a>(
        mut self,
        prerelease: impl Into<Option<&'a str>>,
    ) -> Result<Self, ValidationError> {
        self.prerelease = metadata_or_empty(MetadataKind::Prerelease, prerelease)?;
        Ok(self)
    }

    /// Sets the build metadata. `None` or `""` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] if `build` does not match the build grammar.
    pub fn build_metadata<'a>(
        mut self,
        build: impl Into<Option<&'a str>>,
    ) -> Result<Self, ValidationError> {
        self.build = metadata_or_empty(MetadataKind::Build, build)?;
        Ok(self)
    }

    /// Finishes the builder.
    pub fn build(self) -> Version {
        Version {
            core: self.core.build(),
            prerelease: self.prerelease,
            build: self.build,
        }
    }
}
