//! Provider seam between source text and the extraction engines.
//!
//! The engines never parse text themselves. A [`SyntaxProvider`] lowers
//! source into the [`Module`] model; `sift-syntax` ships the tree-sitter
//! implementation, and tests hand-build modules without any parser.

use crate::error::Result;
use crate::node::Module;

/// Produces a syntax module from raw source text.
///
/// A provider failure (syntax error, missing grammar) is unrecoverable
/// for the call and propagates to the caller before any engine runs;
/// providers never return partial modules for broken input.
pub trait SyntaxProvider: Send + Sync {
    /// Parse source text into a module.
    fn parse_module(&self, source: &str) -> Result<Module>;
}
