//! Error types for the daydiff library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the daydiff library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input was empty (or only blanks)
    #[error("bad time {input:?}: input is empty")]
    EmptyTime { input: String },

    /// No candidate layout matched the input, even after year injection
    #[error("bad time {input}: no layout matched (tried {tried_layouts} layouts)")]
    UnrecognizedTime {
        input: String,
        tried_layouts: usize,
    },
}
