/// Errors raised when a version field is given a value it cannot hold.
///
/// These are raised at the point a value is constructed or a builder setter is called, never later.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric component (major, minor, or patch) was negative.
    #[error("{field} should not be negative, but was `{value}`")]
    Negative {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A pre-release or build string did not match its grammar.
    #[error("{field} should match pattern `{pattern}`, but received invalid input: \"{value}\"")]
    PatternMismatch {
        /// The name of the offending field.
        field: &'static str,
        /// The pattern the value was expected to match.
        pattern: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Errors raised when text cannot be parsed into a [`Version`](crate::Version).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not match the selected grammar in its entirety.
    #[error("Version should match {grammar} pattern `{pattern}`, but received invalid input: \"{input}\"")]
    GrammarMismatch {
        /// The name of the grammar that was used (`strict` or `partial`).
        grammar: &'static str,
        /// The grammar's pattern.
        pattern: &'static str,
        /// The raw input.
        input: String,
    },

    /// A numeric component matched the grammar but is too large to be represented.
    #[error("{field} in \"{input}\" is too large to be represented")]
    ComponentOverflow {
        /// The name of the offending field.
        field: &'static str,
        /// The raw input.
        input: String,
    },
}
