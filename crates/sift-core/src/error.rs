//! Error types for sift-core

use thiserror::Error;

/// Result type alias for sift-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a syntax module.
///
/// The extraction engines themselves are infallible; these variants are
/// raised by [`SyntaxProvider`](crate::SyntaxProvider) implementations
/// before an engine ever runs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The source text is not syntactically valid.
    #[error("syntax error: {0}")]
    Parse(String),

    /// The provider itself failed (grammar unavailable, parser misconfigured).
    #[error("syntax provider failure: {0}")]
    Provider(String),
}
