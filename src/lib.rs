//! # semantic-versions
//!
//! A library for parsing, validating, and comparing [Semantic Versioning 2.0.0](https://semver.org/)
//! versions.
//!
//! Versions are immutable values. They can be parsed from text with either the strict SemVer
//! grammar or a lenient "partial" one, constructed from their fields, or assembled with a
//! builder, and they are ordered by SemVer precedence.
//!
//! ## Examples
//!
//! Parse and compare:
//!
//! ```
//! use semantic_versions::prelude::*;
//!
//! let current = Version::parse_strict_or_fail("1.4.0-beta.2").unwrap();
//! let required = Version::parse("1.3").unwrap(); // partial: 1.3.0
//!
//! assert!(current.greater_than(&required));
//! assert!(current.at_least((1, 3)));
//! assert!(current.is_any(1));
//! ```
//!
//! Or, build one up:
//!
//! ```
//! use semantic_versions::prelude::*;
//!
//! let version = Version::builder()
//!     .major(1).unwrap()
//!     .prerelease("rc.1").unwrap()
//!     .build_metadata("20240102").unwrap()
//!     .build();
//! assert_eq!("1.0.0-rc.1+20240102", version.to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Core**: The `major.minor.patch` triple of a version, modeled by [`VersionCore`].
//! - **Identifier**: One dot-separated token of a version's pre-release (`alpha.1`) or build
//!   (`exp.sha.5114f85`) metadata. Both are modeled by [`Metadata`].
//! - **Precedence**: SemVer's ordering of versions, which ignores build metadata. See
//!   [`Precedence`].
//!
//! ## Grammars
//!
//! | Grammar | Accepts | Example | Parse functions |
//! |---|---|---|---|
//! | [`Grammar::Strict`] | `major.minor.patch[-prerelease][+build]` | `1.0.0-alpha+001` | [`Version::parse_strict`], [`Version::parse_strict_or_fail`], [`str::parse`] |
//! | [`Grammar::Partial`] | `major[.minor][.patch][-prerelease][+build]` | `1-alpha` (= `1.0.0-alpha`) | [`Version::parse`], [`Version::parse_or_fail`] |
//!
//! In both grammars, numeric components and numeric pre-release identifiers may not have leading
//! zeros.
//!
//! ## Equality vs. Equivalence
//!
//! `1.0.0+build1` and `1.0.0+build2` are *equivalent* ([`Version::equivalent_to`]): they have the
//! same precedence. They are not *equal* (`==`), since equality is structural.
//!
//! ## Prelude
//!
//! Everything needed to work with versions can be imported with:
//!
//! ```
//! use semantic_versions::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod grammar;
mod metadata;
mod precedence;
mod source;
mod version;
mod version_core;

pub use crate::error::{ParseError, ValidationError};
pub use crate::grammar::{Grammar, MetadataKind};
pub use crate::metadata::{Metadata, MetadataBuilder};
pub use crate::precedence::Precedence;
pub use crate::source::{compare_sources, latest, sort_by_version, VersionSource};
pub use crate::version::{Version, VersionBuilder};
pub use crate::version_core::{CoreBound, VersionCore, VersionCoreBuilder};

/// A convenience module appropriate for glob imports (`use semantic_versions::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::compare_sources;
    #[doc(no_inline)]
    pub use crate::latest;
    #[doc(no_inline)]
    pub use crate::sort_by_version;
    #[doc(no_inline)]
    pub use crate::CoreBound;
    #[doc(no_inline)]
    pub use crate::Grammar;
    #[doc(no_inline)]
    pub use crate::Metadata;
    #[doc(no_inline)]
    pub use crate::MetadataBuilder;
    #[doc(no_inline)]
    pub use crate::MetadataKind;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Precedence;
    #[doc(no_inline)]
    pub use crate::ValidationError;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionBuilder;
    #[doc(no_inline)]
    pub use crate::VersionCore;
    #[doc(no_inline)]
    pub use crate::VersionCoreBuilder;
    #[doc(no_inline)]
    pub use crate::VersionSource;
}
