//! Key-path flattening engine.
//!
//! Walks an object/array literal and emits a flat map from dotted key
//! paths to extracted string values. Unsupported shapes are silently
//! omitted, never fatal: the walk is deterministic and infallible.
//!
//! Traversal uses an explicit work stack rather than call-stack recursion,
//! so pathologically deep literals cannot overflow the stack. Children are
//! pushed in reverse so processing order equals source order, which keeps
//! the later-write-wins rule for duplicate paths.

use std::collections::BTreeMap;

use crate::keypath::{extract_string, KeyPath};
use crate::node::{Item, Module, Node, PropertyKey};

/// Flat mapping from serialized key path to extracted string value.
///
/// Every value is a non-empty, non-whitespace-only string.
pub type FlattenedRecord = BTreeMap<String, String>;

/// Flatten the module's default-exported object literal.
///
/// Only the object literal exported as the module's default value is
/// processed. If the default export is missing or is not an object
/// literal, the result is an empty record, not an error.
pub fn flatten_module(module: &Module) -> FlattenedRecord {
    for item in &module.items {
        if let Item::DefaultExport(node) = item
            && matches!(node, Node::Object(_))
        {
            return flatten(node);
        }
    }
    FlattenedRecord::new()
}

/// Flatten a literal node into a [`FlattenedRecord`].
///
/// String and template values are recorded at their dotted path when
/// non-blank; array elements append their decimal index as a path
/// segment; object properties append their key. Everything else —
/// nested arrays inside arrays, numbers, booleans, expressions,
/// computed keys, spreads — produces no entry.
pub fn flatten(root: &Node) -> FlattenedRecord {
    let mut record = FlattenedRecord::new();
    let mut stack: Vec<(KeyPath, &Node)> = vec![(KeyPath::root(), root)];

    while let Some((path, node)) = stack.pop() {
        match node {
            Node::String(_) | Node::Template(_) => {
                if let Some(value) = extract_string(node)
                    && !value.trim().is_empty()
                {
                    record.insert(path.render(), value);
                }
            }
            Node::Array(elements) => {
                for (index, element) in elements.iter().enumerate().rev() {
                    match element {
                        Node::String(_) | Node::Template(_) | Node::Object(_) => {
                            stack.push((path.index(index), element));
                        }
                        // Nested arrays and non-literal elements are skipped.
                        _ => {}
                    }
                }
            }
            Node::Object(properties) => {
                for property in properties.iter().rev() {
                    let key = match &property.key {
                        PropertyKey::Identifier(name) => name,
                        PropertyKey::String(value) => value,
                        PropertyKey::Unsupported => continue,
                    };
                    stack.push((path.child(key), &property.value));
                }
            }
            Node::Element(_)
            | Node::ExprContainer(_)
            | Node::Text(_)
            | Node::Identifier(_)
            | Node::Other => {}
        }
    }

    record
}
