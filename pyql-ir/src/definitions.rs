//! Type definitions carried by [`Node`] variants.

use crate::Node;

/// Custom scalar definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarDefinition {
    /// Scalar name.
    pub name: String,
    /// Description from the schema.
    pub description: Option<String>,
}

impl ScalarDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Reference to a type by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A field with its type expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Description from the schema.
    pub description: Option<String>,
    /// Type expression (`NamedType` possibly wrapped in `NonNull`/`List`).
    pub field_type: Box<Node>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: Node) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_type: Box::new(field_type),
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Copy of this field with its type expression replaced.
    pub fn with_type(&self, field_type: Node) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            field_type: Box::new(field_type),
        }
    }
}

/// Union of object types.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDefinition {
    /// Union name.
    pub name: String,
    /// Description from the schema.
    pub description: Option<String>,
    /// Member types, in declaration order. Each is a `NamedType` node.
    pub members: Vec<Node>,
    /// Hydrated definition including members added by extensions.
    pub resolved: Option<Box<Node>>,
}

impl UnionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: Vec::new(),
            resolved: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a member type by name.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(Node::named(name));
        self
    }

    /// Attach the resolved form of this union.
    pub fn with_resolved(mut self, resolved: impl Into<Node>) -> Self {
        self.resolved = Some(Box::new(resolved.into()));
        self
    }
}

/// Object (record) type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    /// Type name.
    pub name: String,
    /// Description from the schema.
    pub description: Option<String>,
    /// Names of implemented interfaces.
    pub interfaces: Vec<String>,
    /// Fields, in declaration order. Each is a `Field` node.
    pub fields: Vec<Node>,
    /// Hydrated definition including fields added by extensions.
    pub resolved: Option<Box<Node>>,
}

impl ObjectDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            resolved: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(Node::Field(field));
        self
    }

    /// Attach the resolved form of this object.
    pub fn with_resolved(mut self, resolved: impl Into<Node>) -> Self {
        self.resolved = Some(Box::new(resolved.into()));
        self
    }
}

/// Enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<String>,
}

impl EnumDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    /// Add a value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// Interface type.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Node>,
}

impl InterfaceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(Node::Field(field));
        self
    }
}

/// Input object type.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Node>,
}

impl InputObjectDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(Node::Field(field));
        self
    }
}
