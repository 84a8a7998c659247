//! Error types for encircle.

/// Errors that can occur while building pattern specs or loading
/// custom pattern configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern's source text failed to compile as a regular expression.
    #[error("invalid pattern `{source_text}`: {source}")]
    InvalidPattern {
        /// The source text that failed to compile.
        source_text: String,
        /// The underlying regex compile error.
        #[source]
        source: regex::Error,
    },

    /// A pattern matches the empty string, which can never delimit anything.
    #[error("pattern `{source_text}` matches the empty string")]
    MatchesEmpty {
        /// The offending pattern's source text.
        source_text: String,
    },

    /// The custom pattern configuration payload is malformed.
    #[error("invalid custom pattern configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A custom pattern slot key is not a number in the supported range.
    #[error("`{0}` is not a valid custom pattern slot (valid slots are 1..=10)")]
    InvalidSlot(String),
}

/// Result type for encircle operations.
pub type Result<T> = std::result::Result<T, Error>;
