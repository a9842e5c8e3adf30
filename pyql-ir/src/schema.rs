//! The canonical, ordered type map.

use indexmap::IndexMap;
use pyql_core::BuiltinScalar;

use crate::{Node, ScalarDefinition};

/// A schema: every named type definition, in canonical order.
///
/// Canonical order is the built-in scalars first, then definitions in the
/// order they were added (source declaration order when loaded from SDL).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    types: IndexMap<String, Node>,
}

impl Schema {
    /// Create an empty schema without built-in scalars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema holding only the built-in scalars.
    pub fn with_builtins() -> Self {
        let mut schema = Self::new();
        for scalar in BuiltinScalar::ALL {
            schema.define(ScalarDefinition::new(scalar.as_str()));
        }
        schema
    }

    /// Add (or replace) a type definition, keyed by its name.
    ///
    /// Returns the previous definition with the same name. A replaced
    /// definition keeps its original position. Nameless nodes (type
    /// wrappers) are not definitions and are handed back unchanged.
    pub fn define(&mut self, node: impl Into<Node>) -> Option<Node> {
        let node = node.into();
        match node.name() {
            Some(name) => {
                let name = name.to_string();
                self.types.insert(name, node)
            }
            None => Some(node),
        }
    }

    /// Consuming variant of [`Schema::define`].
    pub fn with_type(mut self, node: impl Into<Node>) -> Self {
        self.define(node);
        self
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.types.get(name)
    }

    /// Look up a type by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.types.get_mut(name)
    }

    /// Check if a type is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate over type definitions in canonical order.
    pub fn types(&self) -> impl Iterator<Item = &Node> {
        self.types.values()
    }

    /// Iterate over `(name, definition)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of type definitions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the schema defines no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeKind, ObjectDefinition, UnionDefinition};

    #[test]
    fn test_builtins_come_first() {
        let schema = Schema::with_builtins()
            .with_type(ObjectDefinition::new("User"))
            .with_type(ScalarDefinition::new("DateTime"));

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["Int", "Float", "String", "Boolean", "ID", "User", "DateTime"]
        );
    }

    #[test]
    fn test_redefining_keeps_position() {
        let mut schema = Schema::new()
            .with_type(ObjectDefinition::new("A"))
            .with_type(ObjectDefinition::new("B"));

        let previous = schema.define(UnionDefinition::new("A").member("B"));
        assert_eq!(previous.map(|n| n.kind()), Some(NodeKind::ObjectDefinition));

        let kinds: Vec<_> = schema.types().map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::UnionDefinition, NodeKind::ObjectDefinition]
        );
    }

    #[test]
    fn test_define_rejects_wrappers() {
        let mut schema = Schema::new();
        let rejected = schema.define(Node::list(Node::named("Int")));
        assert!(rejected.is_some());
        assert!(schema.is_empty());
    }
}
