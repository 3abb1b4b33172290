use crate::{
    error::{ParseError, ValidationError},
    version::Version,
};
use core::fmt::{self, Display};
use lazy_static::lazy_static;
use regex::Regex;

// Patterns are assembled from literal pieces with `concat!` so they stay `&'static str` and can be
// carried by errors. `\d` is avoided on purpose: in `regex` it matches any Unicode digit.

macro_rules! numeric_component {
    () => {
        r"0|[1-9][0-9]*"
    };
}

macro_rules! prerelease_identifier {
    () => {
        r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)"
    };
}

macro_rules! build_identifier {
    () => {
        r"[0-9a-zA-Z-]+"
    };
}

macro_rules! prerelease {
    () => {
        concat!(
            prerelease_identifier!(),
            r"(?:\.",
            prerelease_identifier!(),
            r")*"
        )
    };
}

macro_rules! build {
    () => {
        concat!(build_identifier!(), r"(?:\.", build_identifier!(), r")*")
    };
}

macro_rules! metadata_suffix {
    () => {
        concat!(
            r"(?:-(?P<prerelease>",
            prerelease!(),
            r"))?(?:\+(?P<build>",
            build!(),
            r"))?"
        )
    };
}

/// A single pre-release identifier.
pub(crate) const PRERELEASE_IDENTIFIER_PATTERN: &str = prerelease_identifier!();

/// A single build identifier.
pub(crate) const BUILD_IDENTIFIER_PATTERN: &str = build_identifier!();

/// One or more pre-release identifiers joined by `.`.
pub(crate) const PRERELEASE_PATTERN: &str = prerelease!();

/// One or more build identifiers joined by `.`.
pub(crate) const BUILD_PATTERN: &str = build!();

/// `major.minor.patch[-prerelease][+build]`.
pub(crate) const STRICT_PATTERN: &str = concat!(
    r"(?P<major>",
    numeric_component!(),
    r")\.(?P<minor>",
    numeric_component!(),
    r")\.(?P<patch>",
    numeric_component!(),
    r")",
    metadata_suffix!()
);

/// `major[.minor][.patch][-prerelease][+build]`.
pub(crate) const PARTIAL_PATTERN: &str = concat!(
    r"(?P<major>",
    numeric_component!(),
    r")(?:\.(?P<minor>",
    numeric_component!(),
    r"))?(?:\.(?P<patch>",
    numeric_component!(),
    r"))?",
    metadata_suffix!()
);

fn anchored(pattern: &str) -> Regex {
    // only ever called on the constant patterns above, which are known to compile
    Regex::new(&format!("^(?:{pattern})$")).expect("constant pattern should compile")
}

lazy_static! {
    static ref PRERELEASE_IDENTIFIER_RE: Regex = anchored(PRERELEASE_IDENTIFIER_PATTERN);
    static ref BUILD_IDENTIFIER_RE: Regex = anchored(BUILD_IDENTIFIER_PATTERN);
    static ref PRERELEASE_RE: Regex = anchored(PRERELEASE_PATTERN);
    static ref BUILD_RE: Regex = anchored(BUILD_PATTERN);
    static ref STRICT_RE: Regex = anchored(STRICT_PATTERN);
    static ref PARTIAL_RE: Regex = anchored(PARTIAL_PATTERN);
}

/// The two kinds of dot-separated metadata a version carries. They share a shape but not a
/// grammar: pre-release numeric identifiers may not have leading zeros, build identifiers may.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Pre-release identifiers, e.g. `alpha.1` in `1.0.0-alpha.1`.
    Prerelease,
    /// Build identifiers, e.g. `exp.sha.5114f85` in `1.0.0+exp.sha.5114f85`.
    Build,
}

impl MetadataKind {
    /// Returns the name of the field this kind of metadata populates. Used in error messages.
    pub fn field_name(&self) -> &'static str {
        match self {
            MetadataKind::Prerelease => "prerelease",
            MetadataKind::Build => "build",
        }
    }

    /// Returns the pattern a full (dot-joined) value of this kind must match.
    pub fn pattern(&self) -> &'static str {
        match self {
            MetadataKind::Prerelease => PRERELEASE_PATTERN,
            MetadataKind::Build => BUILD_PATTERN,
        }
    }

    /// Returns the pattern a single identifier of this kind must match.
    pub fn identifier_pattern(&self) -> &'static str {
        match self {
            MetadataKind::Prerelease => PRERELEASE_IDENTIFIER_PATTERN,
            MetadataKind::Build => BUILD_IDENTIFIER_PATTERN,
        }
    }

    /// Checks a dot-joined value against this kind's grammar.
    ///
    /// This is strict: an empty value does not match. Callers that treat empty as absent must do
    /// so before validating.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] if `value` does not match.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let re: &Regex = match self {
            MetadataKind::Prerelease => &*PRERELEASE_RE,
            MetadataKind::Build => &*BUILD_RE,
        };
        self.check(re, self.pattern(), value)
    }

    /// Checks a single identifier against this kind's grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] if `identifier` does not match.
    pub fn validate_identifier(&self, identifier: &str) -> Result<(), ValidationError> {
        let re: &Regex = match self {
            MetadataKind::Prerelease => &*PRERELEASE_IDENTIFIER_RE,
            MetadataKind::Build => &*BUILD_IDENTIFIER_RE,
        };
        self.check(re, self.identifier_pattern(), identifier)
    }

    fn check(&self, re: &Regex, pattern: &'static str, value: &str) -> Result<(), ValidationError> {
        if re.is_match(value) {
            Ok(())
        } else {
            log::debug!("rejected {} value {:?}", self.field_name(), value);
            Err(ValidationError::PatternMismatch {
                field: self.field_name(),
                pattern,
                value: value.to_owned(),
            })
        }
    }
}

impl Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// The grammars a version string can be parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Full SemVer 2.0.0: `major.minor.patch[-prerelease][+build]`. All three numeric components
    /// are required.
    Strict,

    /// Like [`Grammar::Strict`], but minor and patch are optional and default to `0`. Major is
    /// always required.
    Partial,
}

/// The pieces of a version string that matched a grammar, still as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Captures<'i> {
    pub(crate) major: &'i str,
    pub(crate) minor: Option<&'i str>,
    pub(crate) patch: Option<&'i str>,
    pub(crate) prerelease: Option<&'i str>,
    pub(crate) build: Option<&'i str>,
}

impl Grammar {
    /// Returns the name of the grammar for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Strict => "strict",
            Grammar::Partial => "partial",
        }
    }

    /// Returns the (unanchored) pattern of this grammar. Inputs must match it in their entirety.
    pub fn pattern(&self) -> &'static str {
        match self {
            Grammar::Strict => STRICT_PATTERN,
            Grammar::Partial => PARTIAL_PATTERN,
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            Grammar::Strict => &*STRICT_RE,
            Grammar::Partial => &*PARTIAL_RE,
        }
    }

    /// Returns true if `input` matches this grammar in its entirety.
    pub fn matches(&self, input: &str) -> bool {
        self.regex().is_match(input)
    }

    /// Parses `input` with this grammar. Shorthand for [`Version::parse_with`].
    ///
    /// # Errors
    ///
    /// See [`Version::parse_with`].
    pub fn parse_version(&self, input: &str) -> Result<Version, ParseError> {
        Version::parse_with(*self, input)
    }

    pub(crate) fn captures<'i>(&self, input: &'i str) -> Result<Captures<'i>, ParseError> {
        let caps = self.regex().captures(input).ok_or_else(|| {
            log::trace!("{} grammar rejected {:?}", self.name(), input);
            ParseError::GrammarMismatch {
                grammar: self.name(),
                pattern: self.pattern(),
                input: input.to_owned(),
            }
        })?;

        let group = |name| caps.name(name).map(|m| m.as_str());

        Ok(Captures {
            // major is mandatory in both grammars, so a match always has it
            major: group("major").unwrap_or_default(),
            minor: group("minor"),
            patch: group("patch"),
            prerelease: group("prerelease"),
            build: group("build"),
        })
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
