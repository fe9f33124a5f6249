//! Error types for term-string decoding
//!
//! Every variant carries the offending input so callers can report what
//! failed without re-deriving context. Encoding is total and has no error
//! type.

/// Error type for term-string decoding operations
#[derive(Debug, thiserror::Error)]
pub enum TermStringError {
    /// Input does not match the quoted literal shape
    #[error("`{0}` is not a literal")]
    InvalidLiteral(String),

    /// Literal carries a `--` direction marker with a value other than `ltr`/`rtl`
    #[error("`{0}` is not a literal with a valid direction")]
    InvalidDirection(String),

    /// Backslash escape sequence that cannot be resolved
    #[error("Invalid escape sequence `{sequence}` in `{input}`")]
    InvalidEscape { input: String, sequence: String },

    /// Named node text not wrapped in angle brackets
    #[error("Invalid IRI for named node (must be wrapped in <>): {0}")]
    InvalidIri(String),

    /// Nested quad contains a `>` with no `<` left to match
    #[error("Found closing tag without opening tag in {0}")]
    UnexpectedClosingTag(String),

    /// Nested quad ends before every `<` is matched
    #[error("Found opening tag without closing tag in {0}")]
    UnclosedOpeningTag(String),

    /// Nested quad with a field count other than 3 or 4
    #[error("Nested quad syntax error (found {count} terms) in {input}")]
    QuadArity { input: String, count: usize },

    /// Decoding a variable against a factory without variable support
    #[error("Term factory does not support variable construction: {0}")]
    UnsupportedVariable(String),
}

/// Result type for term-string operations
pub type Result<T> = std::result::Result<T, TermStringError>;

impl TermStringError {
    /// Create an invalid-literal error
    pub fn not_a_literal(input: impl Into<String>) -> Self {
        Self::InvalidLiteral(input.into())
    }

    /// Create an invalid-escape error
    pub fn invalid_escape(input: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self::InvalidEscape {
            input: input.into(),
            sequence: sequence.into(),
        }
    }
}
