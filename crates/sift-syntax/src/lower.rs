//! Lowering from the tree-sitter TSX concrete tree to the sift node model.
//!
//! The lowering is total: every tree-sitter kind the engines do not
//! recognize maps to `Node::Other` (or `PropertyKey::Unsupported`), so a
//! syntactically valid module always lowers without error.

use sift_core::{
    Attribute, AttributeValue, Declarator, Element, Initializer, Item, Module, Node, Property,
    PropertyKey,
};
use tree_sitter::Node as TsNode;

pub(crate) fn lower_module(root: TsNode<'_>, source: &str) -> Module {
    let mut items = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        items.push(lower_item(child, source));
    }
    Module::new(items)
}

fn lower_item(node: TsNode<'_>, source: &str) -> Item {
    match node.kind() {
        // `export default <expression>` carries the expression in the
        // `value` field; `export default function`/named exports do not.
        "export_statement" => match node.child_by_field_name("value") {
            Some(value) => Item::DefaultExport(lower_expression(value, source)),
            None => Item::Other,
        },
        "lexical_declaration" | "variable_declaration" => {
            let mut declarators = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "variable_declarator" {
                    declarators.push(lower_declarator(child, source));
                }
            }
            Item::VarDecl(declarators)
        }
        _ => Item::Other,
    }
}

fn lower_declarator(node: TsNode<'_>, source: &str) -> Declarator {
    let name = node
        .child_by_field_name("name")
        .filter(|n| n.kind() == "identifier")
        .map(|n| text(n, source).to_string());

    let init = node.child_by_field_name("value").map(|value| {
        if value.kind() == "arrow_function" {
            match value.child_by_field_name("body") {
                Some(body) if body.kind() == "statement_block" => Initializer::ArrowBlock,
                // Babel strips parentheses around an expression body;
                // the CST keeps them, so unwrap before lowering.
                Some(body) => Initializer::ArrowExpression(lower_expression(
                    strip_parens(body),
                    source,
                )),
                None => Initializer::ArrowBlock,
            }
        } else {
            Initializer::Expr(lower_expression(value, source))
        }
    });

    Declarator { name, init }
}

fn lower_expression(node: TsNode<'_>, source: &str) -> Node {
    match node.kind() {
        "string" => Node::String(lower_string(node, source)),
        "template_string" => Node::Template(lower_template(node, source)),
        "array" => {
            let mut elements = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "comment" {
                    continue;
                }
                elements.push(lower_expression(child, source));
            }
            Node::Array(elements)
        }
        "object" => Node::Object(lower_object(node, source)),
        "jsx_element" | "jsx_self_closing_element" => Node::Element(lower_element(node, source)),
        "jsx_expression" => lower_jsx_expression(node, source),
        "identifier" => Node::Identifier(text(node, source).to_string()),
        "parenthesized_expression" => lower_expression(strip_parens(node), source),
        _ => Node::Other,
    }
}

fn lower_object(node: TsNode<'_>, source: &str) -> Vec<Property> {
    let mut properties = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "pair" => {
                let key = match child.child_by_field_name("key") {
                    Some(key) if key.kind() == "property_identifier" => {
                        PropertyKey::Identifier(text(key, source).to_string())
                    }
                    Some(key) if key.kind() == "string" => {
                        PropertyKey::String(lower_string(key, source))
                    }
                    // Computed and numeric keys.
                    _ => PropertyKey::Unsupported,
                };
                let value = child
                    .child_by_field_name("value")
                    .map(|value| lower_expression(value, source))
                    .unwrap_or(Node::Other);
                properties.push(Property { key, value });
            }
            "comment" => {}
            // Spreads, methods, shorthand properties.
            _ => properties.push(Property {
                key: PropertyKey::Unsupported,
                value: Node::Other,
            }),
        }
    }
    properties
}

/// Decoded value of a `string` node: fragments verbatim, escapes decoded.
fn lower_string(node: TsNode<'_>, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_fragment" => value.push_str(text(child, source)),
            "escape_sequence" => value.push_str(&decode_escape(text(child, source))),
            _ => {}
        }
    }
    value
}

/// Quasis of a `template_string`: the literal segments between
/// substitutions, raw (escapes kept as written, matching the babel
/// `quasi.value.raw` the extraction contract is based on). A template
/// with n substitutions yields n + 1 quasis, empty ones included.
fn lower_template(node: TsNode<'_>, source: &str) -> Vec<String> {
    let mut quasis = Vec::new();
    let mut current = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_fragment" | "template_chars" | "escape_sequence" => {
                current.push_str(text(child, source));
            }
            "template_substitution" => quasis.push(std::mem::take(&mut current)),
            _ => {}
        }
    }
    quasis.push(current);
    quasis
}

fn lower_element(node: TsNode<'_>, source: &str) -> Element {
    if node.kind() == "jsx_self_closing_element" {
        return Element {
            tag: tag_name(node, source),
            attributes: lower_attributes(node, source),
            children: Vec::new(),
        };
    }

    let mut tag = String::new();
    let mut attributes = Vec::new();
    let mut children = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "jsx_opening_element" => {
                tag = tag_name(child, source);
                attributes = lower_attributes(child, source);
            }
            "jsx_closing_element" => {}
            "jsx_text" => children.push(Node::Text(text(child, source).to_string())),
            "jsx_element" | "jsx_self_closing_element" => {
                children.push(Node::Element(lower_element(child, source)));
            }
            "jsx_expression" => children.push(lower_jsx_expression(child, source)),
            _ => children.push(Node::Other),
        }
    }

    Element {
        tag,
        attributes,
        children,
    }
}

fn tag_name(element: TsNode<'_>, source: &str) -> String {
    element
        .child_by_field_name("name")
        .map(|name| text(name, source).to_string())
        .unwrap_or_default()
}

fn lower_attributes(opening: TsNode<'_>, source: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut cursor = opening.walk();
    for child in opening.named_children(&mut cursor) {
        // Spread attributes arrive as bare `jsx_expression` children and
        // are dropped, like every attribute without a recognized value.
        if child.kind() != "jsx_attribute" {
            continue;
        }

        let mut name = String::new();
        let mut value = None;
        let mut attr_cursor = child.walk();
        for (position, part) in child.named_children(&mut attr_cursor).enumerate() {
            if position == 0 {
                name = text(part, source).to_string();
                continue;
            }
            value = match part.kind() {
                "string" => Some(AttributeValue::String(lower_string(part, source))),
                "jsx_expression" => Some(AttributeValue::Container(Box::new(
                    jsx_expression_inner(part, source),
                ))),
                _ => value,
            };
        }

        if !name.is_empty() {
            attributes.push(Attribute { name, value });
        }
    }
    attributes
}

fn lower_jsx_expression(node: TsNode<'_>, source: &str) -> Node {
    Node::ExprContainer(Box::new(jsx_expression_inner(node, source)))
}

/// The expression inside `{ ... }`, or `Node::Other` for an empty or
/// comment-only container.
fn jsx_expression_inner(node: TsNode<'_>, source: &str) -> Node {
    let mut cursor = node.walk();
    let inner = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    match inner {
        Some(inner) => lower_expression(inner, source),
        None => Node::Other,
    }
}

fn strip_parens(node: TsNode<'_>) -> TsNode<'_> {
    let mut current = node;
    while current.kind() == "parenthesized_expression" {
        let mut cursor = current.walk();
        let inner = current
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        match inner {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

fn text<'a>(node: TsNode<'_>, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

fn decode_escape(raw: &str) -> String {
    let mut chars = raw.chars();
    if chars.next() != Some('\\') {
        return raw.to_string();
    }
    match chars.next() {
        Some('n') => "\n".to_string(),
        Some('r') => "\r".to_string(),
        Some('t') => "\t".to_string(),
        Some('b') => "\u{0008}".to_string(),
        Some('f') => "\u{000C}".to_string(),
        Some('v') => "\u{000B}".to_string(),
        Some('0') => "\0".to_string(),
        Some('u') | Some('x') => decode_codepoint(raw).unwrap_or_else(|| raw.to_string()),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Decode `\xNN`, `\uNNNN`, or `\u{...}`.
fn decode_codepoint(raw: &str) -> Option<String> {
    let digits = raw.get(2..)?;
    let digits = digits
        .strip_prefix('{')
        .and_then(|d| d.strip_suffix('}'))
        .unwrap_or(digits);
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(char::from_u32(value)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::decode_escape;

    #[test]
    fn test_decode_simple_escapes() {
        assert_eq!(decode_escape(r"\n"), "\n");
        assert_eq!(decode_escape(r"\t"), "\t");
        assert_eq!(decode_escape(r"\\"), "\\");
        assert_eq!(decode_escape(r#"\""#), "\"");
        assert_eq!(decode_escape(r"\'"), "'");
    }

    #[test]
    fn test_decode_unicode_escapes() {
        assert_eq!(decode_escape(r"\u00e9"), "é");
        assert_eq!(decode_escape(r"\u{1F600}"), "😀");
        assert_eq!(decode_escape(r"\x41"), "A");
    }

    #[test]
    fn test_malformed_unicode_kept_raw() {
        assert_eq!(decode_escape(r"\u{zz}"), r"\u{zz}");
    }
}
