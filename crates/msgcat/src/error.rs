//! Error types for catalog loading and interpolation.

use thiserror::Error;

/// A plural-forms expression that could not be parsed.
#[derive(Debug, Error)]
#[error("column {column}: {message}")]
pub struct PluralRuleError {
    /// 1-based column in the expression where parsing stopped.
    pub column: usize,
    /// Description of what went wrong.
    pub message: String,
}

/// Errors that occur while loading catalog data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog's plural-forms expression is invalid.
    #[error("invalid plural rule: {0}")]
    PluralRule(#[from] PluralRuleError),

    /// A plural entry's form count disagrees with the locale's rule.
    #[error("plural entry '{id}' has {got} forms, plural rule expects {expected}")]
    PluralArityMismatch {
        id: String,
        expected: usize,
        got: usize,
    },
}

/// An error raised during placeholder substitution.
///
/// Interpolation is the only fallible runtime operation; message and
/// format lookups always degrade to a fallback string instead.
#[derive(Debug, Error)]
pub enum InterpolateError {
    /// More `%s` placeholders appeared than values were queued.
    #[error("no argument left for placeholder {placeholder}")]
    MissingArgument {
        /// 0-based index of the placeholder that could not be filled.
        placeholder: usize,
    },

    /// A `%(key)s` placeholder named a key absent from the argument map.
    #[error("no argument named '{key}'")]
    UnknownKey { key: String },
}
