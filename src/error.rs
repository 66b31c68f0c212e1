//! Error types for the text fixing library.
//!
//! The transforms themselves (`count`, `replace`, `annotate`) cannot fail.
//! Errors only arise at the edges: parsing labels, reading input and
//! writing output.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the core transforms.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Category label not one of quote, dash, space, punctuation
    #[error("Unknown character category: '{0}'")]
    UnknownCategory(String),

    /// Command-line argument could not be interpreted
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Argument name (e.g. `--format`)
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
