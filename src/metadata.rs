use crate::{
    error::ValidationError,
    grammar::MetadataKind,
    precedence::{compare_identifier_sequences, Precedence},
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// An ordered list of dot-separated identifiers: the shape shared by a version's pre-release and
/// build fields.
///
/// An empty `Metadata` is the same thing as no metadata at all. A [`Version`](crate::Version)
/// reports an empty field as `None`.
///
/// `Metadata` does not remember which [`MetadataKind`] validated it; the kind is only needed to
/// pick the grammar at construction.
///
/// # Examples
///
/// ```
/// use semantic_versions::prelude::*;
///
/// let pre = Metadata::parse(MetadataKind::Prerelease, "alpha.1").unwrap();
/// assert_eq!(["alpha", "1"], pre.identifiers());
/// assert_eq!("alpha.1", pre.to_string());
///
/// assert!(Metadata::parse(MetadataKind::Prerelease, "alpha.01").is_err());
/// assert!(Metadata::parse(MetadataKind::Build, "build.01").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Metadata {
    identifiers: Vec<String>,
}

impl Metadata {
    /// No identifiers.
    pub const EMPTY: Self = Self {
        identifiers: Vec::new(),
    };

    /// Parses a dot-joined value, validating it against the grammar for `kind`. An empty value
    /// yields [`Metadata::EMPTY`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] if `value` is non-empty and does not match.
    pub fn parse(kind: MetadataKind, value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Ok(Self::EMPTY);
        }
        kind.validate(value)?;
        Ok(Self::split_unchecked(value))
    }

    /// Splits a value that is already known to match its grammar.
    pub(crate) fn split_unchecked(value: &str) -> Self {
        Self {
            identifiers: value.split('.').map(str::to_owned).collect(),
        }
    }

    /// Builds metadata from already-split identifiers, validating each against the grammar for
    /// `kind`. No identifiers yields [`Metadata::EMPTY`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] for the first identifier that does not match.
    pub fn from_identifiers<I, S>(kind: MetadataKind, identifiers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        identifiers
            .into_iter()
            .try_fold(Self::builder(kind), |builder, identifier| {
                builder.then(identifier)
            })
            .map(MetadataBuilder::build)
    }

    /// Returns a builder that starts with no identifiers.
    pub fn builder(kind: MetadataKind) -> MetadataBuilder {
        MetadataBuilder {
            kind,
            identifiers: Vec::new(),
        }
    }

    /// Returns a builder seeded with a copy of these identifiers. Identifiers added through it are
    /// validated against the grammar for `kind`.
    pub fn to_builder(&self, kind: MetadataKind) -> MetadataBuilder {
        MetadataBuilder {
            kind,
            identifiers: self.identifiers.clone(),
        }
    }

    /// The identifiers, in order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Iterates over the identifiers, in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.identifiers.iter().map(String::as_str)
    }

    /// The number of identifiers.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Returns true if there are no identifiers.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns true if there is at least one identifier.
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// `Some(self)` if present, `None` if empty.
    pub(crate) fn as_option(&self) -> Option<&Self> {
        if self.is_present() {
            Some(self)
        } else {
            None
        }
    }
}

impl Precedence for Metadata {
    /// Compares identifier by identifier, per SemVer §11.4.
    ///
    /// Here an empty list is simply the shortest possible list, so it is lower than any non-empty
    /// one. The opposite rule for versions (a release outranks its pre-releases) is applied by
    /// [`Version`](crate::Version).
    fn precedence(&self, other: &Self) -> Ordering {
        if self.identifiers == other.identifiers {
            return Ordering::Equal;
        }
        compare_identifier_sequences(self.iter(), other.iter())
    }
}

impl Display for Metadata {
    /// Joins the identifiers with `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers = self.iter();
        if let Some(first) = identifiers.next() {
            f.write_str(first)?;
            for identifier in identifiers {
                write!(f, ".{identifier}")?;
            }
        }
        Ok(())
    }
}

impl<'m> IntoIterator for &'m Metadata {
    type Item = &'m String;
    type IntoIter = core::slice::Iter<'m, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}

/// Appends identifiers to a [`Metadata`] one at a time.
///
/// ```
/// use semantic_versions::prelude::*;
///
/// let pre = Metadata::builder(MetadataKind::Prerelease)
///     .then("rc")
///     .unwrap()
///     .then_number(2)
///     .build();
/// assert_eq!("rc.2", pre.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBuilder {
    kind: MetadataKind,
    identifiers: Vec<String>,
}

impl MetadataBuilder {
    /// Appends an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PatternMismatch`] immediately if `identifier` is not a single
    /// valid identifier for this builder's kind.
    pub fn then(mut self, identifier: impl Into<String>) -> Result<Self, ValidationError> {
        let identifier = identifier.into();
        self.kind.validate_identifier(&identifier)?;
        self.identifiers.push(identifier);
        Ok(self)
    }

    /// Appends a numeric identifier. These are valid for either kind.
    pub fn then_number(mut self, number: u64) -> Self {
        self.identifiers.push(number.to_string());
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Metadata {
        Metadata {
            identifiers: self.identifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    fn pre(value: &str) -> Metadata {
        Metadata::parse(MetadataKind::Prerelease, value).unwrap()
    }

    #[test]
    fn test_empty_is_absent() {
        let empty = Metadata::parse(MetadataKind::Prerelease, "").unwrap();
        assert_eq!(Metadata::EMPTY, empty);
        assert!(empty.is_empty());
        assert!(!empty.is_present());
        assert_eq!(None, empty.as_option());
        assert_eq!("", empty.to_string());
    }

    #[test]
    fn test_parse_splits_on_dots() {
        let meta = Metadata::parse(MetadataKind::Build, "exp.sha.5114f85").unwrap();
        assert_eq!(["exp", "sha", "5114f85"], meta.identifiers());
        assert_eq!(3, meta.len());
        assert_eq!(vec!["exp", "sha", "5114f85"], meta.iter().collect_vec());
        assert_eq!("exp.sha.5114f85", meta.to_string());
    }

    #[rstest]
    #[case(MetadataKind::Prerelease, "01")]
    #[case(MetadataKind::Prerelease, "alpha.01")]
    #[case(MetadataKind::Prerelease, "alpha..1")]
    #[case(MetadataKind::Build, "build.")]
    #[case(MetadataKind::Build, "build_1")]
    fn test_parse_invalid(#[case] kind: MetadataKind, #[case] value: &str) {
        let actual = Metadata::parse(kind, value);
        assert_eq!(
            Err(ValidationError::PatternMismatch {
                field: kind.field_name(),
                pattern: kind.pattern(),
                value: value.to_string(),
            }),
            actual
        );
    }

    #[test]
    fn test_from_identifiers() {
        let meta = Metadata::from_identifiers(MetadataKind::Prerelease, ["beta", "11"]).unwrap();
        assert_eq!(pre("beta.11"), meta);

        let none = Metadata::from_identifiers(MetadataKind::Build, Vec::<String>::new()).unwrap();
        assert_eq!(Metadata::EMPTY, none);
    }

    #[test]
    fn test_from_identifiers_invalid() {
        let actual = Metadata::from_identifiers(MetadataKind::Prerelease, ["beta", "011"]);
        assert_eq!(
            Err(ValidationError::PatternMismatch {
                field: "prerelease",
                pattern: MetadataKind::Prerelease.identifier_pattern(),
                value: "011".to_string(),
            }),
            actual
        );

        // dots are not allowed inside a single identifier
        let actual = Metadata::from_identifiers(MetadataKind::Build, ["a.b"]);
        assert!(actual.is_err());
    }

    #[test]
    fn test_builder_extends_existing() {
        let meta = pre("alpha")
            .to_builder(MetadataKind::Prerelease)
            .then_number(1)
            .then("x-y")
            .unwrap()
            .build();
        assert_eq!(pre("alpha.1.x-y"), meta);
    }

    #[test]
    fn test_builder_rejects_immediately() {
        let actual = Metadata::builder(MetadataKind::Prerelease).then("00");
        assert!(matches!(
            actual,
            Err(ValidationError::PatternMismatch { .. })
        ));
    }

    #[test]
    fn test_precedence() {
        let ordered = [
            "", "alpha", "alpha.1", "alpha.beta", "beta", "beta.2", "beta.11", "rc.1",
        ]
        .map(pre);

        for (lower, higher) in ordered.iter().tuple_windows() {
            assert!(lower.less_than(higher), "{lower} < {higher}");
            assert!(higher.greater_than(lower), "{higher} > {lower}");
            assert!(!lower.equal_to(higher));
        }
        for meta in &ordered {
            assert!(meta.equal_to(meta));
            assert!(meta.less_than_or_equal_to(meta));
            assert!(meta.greater_than_or_equal_to(meta));
        }
    }

    #[test]
    fn test_into_iter() {
        let meta = pre("a.b.c");
        let joined: String = (&meta).into_iter().map(String::as_str).collect();
        assert_eq!("abc", joined);
    }
}
