//! Key paths and string-value extraction.
//!
//! A [`KeyPath`] is an ordered sequence of segments (property names or
//! decimal array indices) identifying a location inside a nested literal.
//! Two key paths are equal iff their segment sequences are equal; the
//! serialized form joins segments with `.`.

use std::fmt;

use crate::node::Node;

/// Placeholder written in place of each template interpolation hole.
pub const TEMPLATE_PLACEHOLDER: &str = "{{}}";

/// An ordered sequence of key-path segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// This path extended by a property-name segment.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// This path extended by a decimal array-index segment.
    pub fn index(&self, index: usize) -> Self {
        self.child(&index.to_string())
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Serialized form: segments joined with `.`.
    pub fn render(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Extract the string value carried by a string or template literal.
///
/// String literals yield their value unchanged. Template literals yield
/// their quasis joined by [`TEMPLATE_PLACEHOLDER`]; the interpolated
/// expressions are discarded, so the original template is not recoverable.
/// Every other node kind yields `None`.
pub fn extract_string(node: &Node) -> Option<String> {
    match node {
        Node::String(value) => Some(value.clone()),
        Node::Template(quasis) => Some(quasis.join(TEMPLATE_PLACEHOLDER)),
        _ => None,
    }
}
