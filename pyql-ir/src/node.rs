//! The discriminated schema node.

use serde::Serialize;

use crate::{
    EnumDefinition, FieldDefinition, InputObjectDefinition, InterfaceDefinition, NamedType,
    ObjectDefinition, ScalarDefinition, UnionDefinition,
};

/// Kind tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    ScalarDefinition,
    NonNull,
    List,
    Optional,
    NamedType,
    FieldDefinition,
    UnionDefinition,
    ObjectDefinition,
    EnumDefinition,
    InterfaceDefinition,
    InputObjectDefinition,
}

impl NodeKind {
    /// Get the snake_case name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::ScalarDefinition => "scalar_definition",
            NodeKind::NonNull => "non_null",
            NodeKind::List => "list",
            NodeKind::Optional => "optional",
            NodeKind::NamedType => "named_type",
            NodeKind::FieldDefinition => "field_definition",
            NodeKind::UnionDefinition => "union_definition",
            NodeKind::ObjectDefinition => "object_definition",
            NodeKind::EnumDefinition => "enum_definition",
            NodeKind::InterfaceDefinition => "interface_definition",
            NodeKind::InputObjectDefinition => "input_object_definition",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the schema graph.
///
/// Type definitions (scalars, objects, unions, ...) and type expressions
/// (named references and their wrappers) share this enum so a renderer can
/// walk the whole graph with a single `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `scalar DateTime`
    ScalarDefinition(ScalarDefinition),
    /// `T!`
    NonNull(Box<Node>),
    /// `[T]`
    List(Box<Node>),
    /// A type that may be absent.
    ///
    /// Never produced by schema loading: GraphQL types are nullable unless
    /// wrapped in `!`, so optionality only becomes explicit once a
    /// generator normalizes the graph.
    Optional(Box<Node>),
    /// A reference to a type by name.
    NamedType(NamedType),
    /// A field of an object, interface or input object.
    Field(FieldDefinition),
    /// `union Result = Success | Failure`
    Union(UnionDefinition),
    /// `type User { ... }`
    Object(ObjectDefinition),
    /// `enum Role { ... }`
    Enum(EnumDefinition),
    /// `interface Node { ... }`
    Interface(InterfaceDefinition),
    /// `input NewUser { ... }`
    InputObject(InputObjectDefinition),
}

impl Node {
    /// Reference a type by name.
    pub fn named(name: impl Into<String>) -> Self {
        Node::NamedType(NamedType::new(name))
    }

    /// Wrap a type as non-null.
    pub fn non_null(of_type: Node) -> Self {
        Node::NonNull(Box::new(of_type))
    }

    /// Wrap a type as a list.
    pub fn list(of_type: Node) -> Self {
        Node::List(Box::new(of_type))
    }

    /// Wrap a type as explicitly optional.
    pub fn optional(of_type: Node) -> Self {
        Node::Optional(Box::new(of_type))
    }

    /// Get the kind tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::ScalarDefinition(_) => NodeKind::ScalarDefinition,
            Node::NonNull(_) => NodeKind::NonNull,
            Node::List(_) => NodeKind::List,
            Node::Optional(_) => NodeKind::Optional,
            Node::NamedType(_) => NodeKind::NamedType,
            Node::Field(_) => NodeKind::FieldDefinition,
            Node::Union(_) => NodeKind::UnionDefinition,
            Node::Object(_) => NodeKind::ObjectDefinition,
            Node::Enum(_) => NodeKind::EnumDefinition,
            Node::Interface(_) => NodeKind::InterfaceDefinition,
            Node::InputObject(_) => NodeKind::InputObjectDefinition,
        }
    }

    /// Get the name of a definition or named reference.
    ///
    /// Wrappers (`NonNull`, `List`, `Optional`) have no name of their own.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::ScalarDefinition(def) => Some(&def.name),
            Node::NamedType(named) => Some(&named.name),
            Node::Field(field) => Some(&field.name),
            Node::Union(def) => Some(&def.name),
            Node::Object(def) => Some(&def.name),
            Node::Enum(def) => Some(&def.name),
            Node::Interface(def) => Some(&def.name),
            Node::InputObject(def) => Some(&def.name),
            Node::NonNull(_) | Node::List(_) | Node::Optional(_) => None,
        }
    }

    /// Get the wrapped type of a `NonNull`, `List` or `Optional` node.
    pub fn of_type(&self) -> Option<&Node> {
        match self {
            Node::NonNull(inner) | Node::List(inner) | Node::Optional(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns true if this node is a `NonNull` wrapper.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Node::NonNull(_))
    }

    /// Get the resolved (hydrated) form of this definition, if one exists.
    ///
    /// Only definitions that were extended elsewhere in the schema carry a
    /// resolved node; it holds the members of every extension merged in.
    pub fn resolved(&self) -> Option<&Node> {
        match self {
            Node::Object(def) => def.resolved.as_deref(),
            Node::Union(def) => def.resolved.as_deref(),
            _ => None,
        }
    }
}

impl From<ScalarDefinition> for Node {
    fn from(def: ScalarDefinition) -> Self {
        Node::ScalarDefinition(def)
    }
}

impl From<NamedType> for Node {
    fn from(named: NamedType) -> Self {
        Node::NamedType(named)
    }
}

impl From<FieldDefinition> for Node {
    fn from(field: FieldDefinition) -> Self {
        Node::Field(field)
    }
}

impl From<UnionDefinition> for Node {
    fn from(def: UnionDefinition) -> Self {
        Node::Union(def)
    }
}

impl From<ObjectDefinition> for Node {
    fn from(def: ObjectDefinition) -> Self {
        Node::Object(def)
    }
}

impl From<EnumDefinition> for Node {
    fn from(def: EnumDefinition) -> Self {
        Node::Enum(def)
    }
}

impl From<InterfaceDefinition> for Node {
    fn from(def: InterfaceDefinition) -> Self {
        Node::Interface(def)
    }
}

impl From<InputObjectDefinition> for Node {
    fn from(def: InputObjectDefinition) -> Self {
        Node::InputObject(def)
    }
}
