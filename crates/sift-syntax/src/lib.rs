//! Sift Syntax — tree-sitter provider for the extraction engines.
//!
//! Parses TypeScript/TSX source with the tree-sitter TSX grammar and
//! lowers the concrete syntax tree into the closed node model of
//! [`sift_core`]. The TSX grammar covers plain TypeScript as well, so a
//! single provider handles `.ts`, `.tsx`, `.js`, and `.jsx` input.
//!
//! tree-sitter is error-tolerant by design, but the extraction contract
//! treats syntactically broken sources as fatal: any error node in the
//! parse tree surfaces as [`sift_core::Error::Parse`] and nothing is
//! lowered.

mod lower;

use sift_core::{Error, Module, Result, SyntaxProvider};
use tree_sitter::{Node as TsNode, Parser};

/// Syntax provider backed by the tree-sitter TSX grammar.
#[derive(Clone, Copy, Debug, Default)]
pub struct TsxProvider;

impl TsxProvider {
    /// Create a new provider.
    pub fn new() -> Self {
        Self
    }
}

impl SyntaxProvider for TsxProvider {
    fn parse_module(&self, source: &str) -> Result<Module> {
        // Parser is not Sync; build one per call. Grammar tables are
        // static, so this is cheap.
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|e| Error::Provider(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::Provider("parser produced no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::Parse(describe_error(root)));
        }

        Ok(lower::lower_module(root, source))
    }
}

/// Locate the first error or missing node for the error message.
fn describe_error(root: TsNode<'_>) -> String {
    let mut cursor = root.walk();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let start = node.start_position();
            return format!(
                "invalid syntax at line {}, column {}",
                start.row + 1,
                start.column + 1
            );
        }
        if node.has_error() {
            for child in node.children(&mut cursor).collect::<Vec<_>>() {
                stack.push(child);
            }
        }
    }
    "invalid syntax".to_string()
}
