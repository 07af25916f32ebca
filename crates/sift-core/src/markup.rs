//! Markup extraction engine.
//!
//! Scans top-level declarations for anonymous single-expression functions
//! whose body is an `<svg>` element and serializes that element back into
//! standalone markup text.
//!
//! Serialization is deliberately shallow: root attributes, one level of
//! child elements, and the literal text inside those children. Dynamic
//! attribute expressions and deeper nesting are dropped, not preserved —
//! the output is the static SVG, stripped of the UI-framework wrapper.

use crate::node::{Attribute, AttributeValue, Element, Initializer, Item, Module, Node};

/// Root tag that qualifies a component body, compared case-insensitively.
const ROOT_TAG: &str = "svg";

/// A named markup component extracted from a module.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupComponent {
    /// The declared binding identifier.
    pub name: String,
    /// Serialized markup text.
    pub content: String,
}

/// Extract all SVG components from a module's top-level declarations.
///
/// A declaration qualifies when it declares exactly one binding whose
/// initializer is an anonymous function with a single-expression body,
/// and that body is an element tagged `svg` (any case). Non-qualifying
/// declarations are skipped without error; no qualifying declarations
/// yields an empty sequence. Duplicate binding names are kept
/// positionally, not merged.
pub fn extract_components(module: &Module) -> Vec<MarkupComponent> {
    let mut components = Vec::new();

    for item in &module.items {
        let Item::VarDecl(declarators) = item else {
            continue;
        };
        let [declarator] = declarators.as_slice() else {
            continue;
        };
        let Some(name) = &declarator.name else {
            continue;
        };
        let Some(Initializer::ArrowExpression(body)) = &declarator.init else {
            continue;
        };
        let Node::Element(element) = body else {
            continue;
        };
        if let Some(content) = serialize_svg(element) {
            components.push(MarkupComponent {
                name: name.clone(),
                content,
            });
        }
    }

    components
}

/// Serialize a root `<svg>` element, or `None` for any other tag.
fn serialize_svg(element: &Element) -> Option<String> {
    if !element.tag.eq_ignore_ascii_case(ROOT_TAG) {
        return None;
    }

    let attributes = render_attributes(&element.attributes, true);
    let children: Vec<String> = element.children.iter().filter_map(render_child).collect();

    let open = if attributes.is_empty() {
        format!("<{ROOT_TAG}>")
    } else {
        format!("<{ROOT_TAG} {attributes}>")
    };

    Some(format!("{open}\n    {}\n</{ROOT_TAG}>", children.join("\n    ")))
}

/// Render a direct child. Only child elements are serialized; text runs
/// and expression containers at the root level are ignored.
fn render_child(child: &Node) -> Option<String> {
    let Node::Element(element) = child else {
        return None;
    };

    let attributes = render_attributes(&element.attributes, false);

    // One level of recursion only: inline the literal text runs of the
    // child's children and drop any elements nested deeper.
    let text: String = element
        .children
        .iter()
        .filter_map(|grandchild| match grandchild {
            Node::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    let tag = &element.tag;
    let open = if attributes.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} {attributes}>")
    };

    // Tags are always paired, never self-closed, even when childless.
    Some(format!("{open}{text}</{tag}>"))
}

/// Render attributes as `name="value"`, space-joined, in source order.
///
/// Only plain string values survive. On the root element an expression
/// container wrapping a plain string literal also counts
/// (`width={"10"}`); dynamic expressions and bare boolean attributes are
/// dropped with no placeholder.
fn render_attributes(attributes: &[Attribute], allow_container: bool) -> String {
    let mut parts = Vec::new();

    for attribute in attributes {
        let value = match &attribute.value {
            Some(AttributeValue::String(value)) => Some(value),
            Some(AttributeValue::Container(inner)) if allow_container => match inner.as_ref() {
                Node::String(value) => Some(value),
                _ => None,
            },
            _ => None,
        };
        if let Some(value) = value {
            parts.push(format!("{}=\"{}\"", attribute.name, value));
        }
    }

    parts.join(" ")
}
