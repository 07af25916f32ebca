//! Sift Core — syntax-node model and extraction engines.
//!
//! This crate contains the pure core of sift: a closed, provider-agnostic
//! syntax-node model and the two engines that walk it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       sift-core                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Node / Module — closed tagged-variant syntax model         │
//! │  SyntaxProvider trait — source text → Module                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  flatten — nested literals → dotted-path string map         │
//! │  markup — SVG component bindings → serialized markup        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  KeyPath / extract_string — shared path and string helpers  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and CPU-bound: no I/O, no async, no
//! ambient configuration. Providers (see `sift-syntax`) lower concrete
//! parse trees into [`Module`] values; the engines only ever dispatch on
//! the model's variants, so tests can hand-build trees without a parser.

pub mod error;
pub mod flatten;
pub mod keypath;
pub mod markup;
pub mod node;
pub mod provider;

// Re-exports — model
pub use node::{
    Attribute, AttributeValue, Declarator, Element, Initializer, Item, Module, Node, Property,
    PropertyKey,
};

// Re-exports — engines
pub use flatten::{flatten, flatten_module, FlattenedRecord};
pub use markup::{extract_components, MarkupComponent};

// Re-exports — shared utilities
pub use keypath::{extract_string, KeyPath};

// Re-exports — provider seam
pub use provider::SyntaxProvider;

// Re-exports — error
pub use error::{Error, Result};
