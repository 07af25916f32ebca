//! Closed syntax-node model shared by the extraction engines.
//!
//! Providers lower whatever concrete parse tree they work with into these
//! types; the engines dispatch exhaustively on the variants and nothing
//! else. Node kinds outside the recognized set map to [`Node::Other`]
//! (or [`PropertyKey::Unsupported`] for object keys), which every walk
//! skips explicitly rather than falling through implicitly.

/// A syntax node with a discrete kind and kind-specific children.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// String literal with its decoded value.
    String(String),
    /// Template literal as its literal text segments (quasis). The
    /// interpolation holes between segments are not represented: a
    /// template with n holes carries n + 1 quasis, empty ones included.
    Template(Vec<String>),
    /// Array literal.
    Array(Vec<Node>),
    /// Object literal.
    Object(Vec<Property>),
    /// Markup (JSX) element.
    Element(Element),
    /// Markup expression container: `{expr}`.
    ExprContainer(Box<Node>),
    /// Raw text run inside a markup element.
    Text(String),
    /// Bare identifier reference.
    Identifier(String),
    /// Any node kind the engines do not recognize.
    Other,
}

impl Node {
    /// String-literal node from anything string-like.
    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    /// Template-literal node from its quasis.
    pub fn template<I, S>(quasis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::Template(quasis.into_iter().map(Into::into).collect())
    }

    /// Raw text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }
}

/// One property of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    /// Property key.
    pub key: PropertyKey,
    /// Property value.
    pub value: Node,
}

impl Property {
    /// Property with an identifier key: `{ name: value }`.
    pub fn named(name: impl Into<String>, value: Node) -> Self {
        Self {
            key: PropertyKey::Identifier(name.into()),
            value,
        }
    }

    /// Property with a string-literal key: `{ "name": value }`.
    pub fn quoted(name: impl Into<String>, value: Node) -> Self {
        Self {
            key: PropertyKey::String(name.into()),
            value,
        }
    }
}

/// Key of an object-literal property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKey {
    /// Plain identifier key.
    Identifier(String),
    /// String-literal key.
    String(String),
    /// Computed keys, numeric keys, spreads — skipped by the engines.
    Unsupported,
}

/// A markup element: tag, attributes, and child nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Tag name as written in the source.
    pub tag: String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Direct children (elements, text runs, expression containers).
    pub children: Vec<Node>,
}

/// A markup attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value; `None` for bare boolean attributes.
    pub value: Option<AttributeValue>,
}

impl Attribute {
    /// Attribute with a plain string value: `name="value"`.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(AttributeValue::String(value.into())),
        }
    }
}

/// Value of a markup attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// Plain string value.
    String(String),
    /// Expression container value: `name={expr}`.
    Container(Box<Node>),
}

/// A parsed source module: the ordered top-level items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Module {
    /// Top-level items in source order.
    pub items: Vec<Item>,
}

impl Module {
    /// Module from its items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// A top-level module item.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// `export default <expression>`.
    DefaultExport(Node),
    /// A variable declaration and its declarators.
    VarDecl(Vec<Declarator>),
    /// Imports, statements, named exports — nothing the engines read.
    Other,
}

/// One declarator of a variable declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Declarator {
    /// Bound identifier; `None` for destructuring patterns.
    pub name: Option<String>,
    /// Initializer expression, if any.
    pub init: Option<Initializer>,
}

/// Initializer of a declarator, classified for component selection.
#[derive(Clone, Debug, PartialEq)]
pub enum Initializer {
    /// Anonymous function with a single-expression body; carries the body.
    ArrowExpression(Node),
    /// Anonymous function with an explicit block body.
    ArrowBlock,
    /// Any other initializer expression.
    Expr(Node),
}
