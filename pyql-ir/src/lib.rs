//! Schema graph types for pyql.
//!
//! This crate provides the typed graph the code generators walk. It is the
//! boundary between schema loading and rendering.
//!
//! # Architecture
//!
//! ```text
//! schema.graphql (SDL) → pyql-schema (parsing) → pyql-ir (schema graph) → codegen
//! ```
//!
//! The graph is:
//! - Language-agnostic (nothing here knows about Python)
//! - Parser-agnostic (no `graphql-parser` types leak through)
//! - Immutable once built; rendering never mutates it

mod definitions;
mod node;
mod schema;

pub use definitions::{
    EnumDefinition, FieldDefinition, InputObjectDefinition, InterfaceDefinition, NamedType,
    ObjectDefinition, ScalarDefinition, UnionDefinition,
};
pub use node::{Node, NodeKind};
pub use schema::Schema;
