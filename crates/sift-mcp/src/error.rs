//! Error types for sift-mcp

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

/// Result type alias for sift-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the dispatch/I/O shell.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reading a source file or writing an output artifact failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The syntax provider rejected the source.
    #[error("{0}")]
    Syntax(#[from] sift_core::Error),

    /// Serializing the flattened record failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a shell error into the uniform error-flagged tool response.
///
/// Data errors (unreadable source, syntax errors, failed writes) are
/// reported this way rather than as protocol errors, so callers always
/// get a textual `Error: ...` result they can surface verbatim. Only
/// malformed arguments and unknown tool names become protocol errors.
pub fn error_result(err: &Error) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
}
