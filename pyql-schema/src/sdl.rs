//! Lowering GraphQL SDL into the schema graph.
//!
//! Syntax is handled by `graphql-parser`; this module turns its document
//! into [`pyql_ir`] nodes, folds `extend` definitions into the types they
//! extend and checks that every type is defined once.

use graphql_parser::{
    Pos,
    schema::{self as gql, Definition, TypeDefinition, TypeExtension},
};
use miette::SourceSpan;
use pyql_ir::{
    EnumDefinition, FieldDefinition, InputObjectDefinition, InterfaceDefinition, Node,
    ObjectDefinition, ScalarDefinition, Schema, UnionDefinition,
};

use crate::{Result, SourceContext};

type Document<'a> = gql::Document<'a, String>;

/// Parse GraphQL SDL into a [`Schema`].
///
/// The schema starts with the built-in scalars, followed by every type
/// definition in declaration order. Extensions never add entries: objects
/// and unions keep their declared members and gain a resolved node holding
/// the merged ones; other kinds are extended in place.
pub fn parse_schema(src: &str, filename: &str) -> Result<Schema> {
    let ctx = SourceContext::new(src, filename);
    let document: Document<'_> =
        gql::parse_schema::<String>(src).map_err(|e| ctx.syntax_error(e.to_string()))?;
    Lowering::new(&ctx).lower(&document)
}

struct Lowering<'a> {
    ctx: &'a SourceContext,
    schema: Schema,
}

impl<'a> Lowering<'a> {
    fn new(ctx: &'a SourceContext) -> Self {
        Self {
            ctx,
            schema: Schema::with_builtins(),
        }
    }

    fn lower(mut self, document: &Document<'_>) -> Result<Schema> {
        for definition in &document.definitions {
            if let Definition::TypeDefinition(def) = definition {
                self.define(def)?;
            }
        }
        // Extensions may appear before the type they extend
        for definition in &document.definitions {
            if let Definition::TypeExtension(ext) = definition {
                self.extend(ext)?;
            }
        }
        Ok(self.schema)
    }

    fn define(&mut self, def: &TypeDefinition<'_, String>) -> Result<()> {
        let (node, position): (Node, Pos) = match def {
            TypeDefinition::Scalar(scalar) => {
                let mut node = ScalarDefinition::new(&scalar.name);
                node.description = scalar.description.clone();
                (node.into(), scalar.position)
            }
            TypeDefinition::Object(object) => {
                let mut node = ObjectDefinition::new(&object.name);
                node.description = object.description.clone();
                node.interfaces = object.implements_interfaces.clone();
                node.fields = object.fields.iter().map(lower_field).collect();
                (node.into(), object.position)
            }
            TypeDefinition::Interface(interface) => {
                let mut node = InterfaceDefinition::new(&interface.name);
                node.description = interface.description.clone();
                node.fields = interface.fields.iter().map(lower_field).collect();
                (node.into(), interface.position)
            }
            TypeDefinition::Union(union) => {
                let mut node = UnionDefinition::new(&union.name);
                node.description = union.description.clone();
                node.members = union.types.iter().map(Node::named).collect();
                (node.into(), union.position)
            }
            TypeDefinition::Enum(enumeration) => {
                let mut node = EnumDefinition::new(&enumeration.name);
                node.description = enumeration.description.clone();
                node.values = enumeration.values.iter().map(|v| v.name.clone()).collect();
                (node.into(), enumeration.position)
            }
            TypeDefinition::InputObject(input) => {
                let mut node = InputObjectDefinition::new(&input.name);
                node.description = input.description.clone();
                node.fields = input.fields.iter().map(lower_input_value).collect();
                (node.into(), input.position)
            }
        };

        let name = node.name().unwrap_or_default().to_string();
        if self.schema.contains(&name) {
            return Err(self
                .ctx
                .duplicate_type_error(&name, self.name_span(position, &name)));
        }
        self.schema.define(node);
        Ok(())
    }

    fn extend(&mut self, ext: &TypeExtension<'_, String>) -> Result<()> {
        match ext {
            TypeExtension::Object(ext) => {
                let fields: Vec<Node> = ext.fields.iter().map(lower_field).collect();
                let interfaces = ext.implements_interfaces.clone();
                match self.schema.get_mut(&ext.name) {
                    Some(Node::Object(object)) => {
                        let mut resolved = resolved_object(object);
                        resolved.fields.extend(fields);
                        resolved.interfaces.extend(interfaces);
                        object.resolved = Some(Box::new(resolved.into()));
                        Ok(())
                    }
                    _ => Err(self.unknown_extension(&ext.name, "type", ext.position)),
                }
            }
            TypeExtension::Union(ext) => {
                let members: Vec<Node> = ext.types.iter().map(Node::named).collect();
                match self.schema.get_mut(&ext.name) {
                    Some(Node::Union(union)) => {
                        let mut resolved = resolved_union(union);
                        resolved.members.extend(members);
                        union.resolved = Some(Box::new(resolved.into()));
                        Ok(())
                    }
                    _ => Err(self.unknown_extension(&ext.name, "union", ext.position)),
                }
            }
            TypeExtension::Interface(ext) => {
                let fields: Vec<Node> = ext.fields.iter().map(lower_field).collect();
                match self.schema.get_mut(&ext.name) {
                    Some(Node::Interface(interface)) => {
                        interface.fields.extend(fields);
                        Ok(())
                    }
                    _ => Err(self.unknown_extension(&ext.name, "interface", ext.position)),
                }
            }
            TypeExtension::Enum(ext) => {
                let values = ext.values.iter().map(|v| v.name.clone());
                match self.schema.get_mut(&ext.name) {
                    Some(Node::Enum(enumeration)) => {
                        enumeration.values.extend(values);
                        Ok(())
                    }
                    _ => Err(self.unknown_extension(&ext.name, "enum", ext.position)),
                }
            }
            TypeExtension::InputObject(ext) => {
                let fields: Vec<Node> = ext.fields.iter().map(lower_input_value).collect();
                match self.schema.get_mut(&ext.name) {
                    Some(Node::InputObject(input)) => {
                        input.fields.extend(fields);
                        Ok(())
                    }
                    _ => Err(self.unknown_extension(&ext.name, "input", ext.position)),
                }
            }
            // Scalar extensions only add directives
            TypeExtension::Scalar(ext) => match self.schema.get(&ext.name) {
                Some(Node::ScalarDefinition(_)) => Ok(()),
                _ => Err(self.unknown_extension(&ext.name, "scalar", ext.position)),
            },
        }
    }

    fn unknown_extension(&self, name: &str, kind: &str, position: Pos) -> Box<crate::Error> {
        self.ctx
            .unknown_extension_error(name, kind, self.name_span(position, name))
    }

    /// Span of a definition's name.
    ///
    /// Parser positions point at the definition keyword, so the name is
    /// searched for on the rest of that line.
    fn name_span(&self, position: Pos, name: &str) -> Option<SourceSpan> {
        let start = self.ctx.span_at(position.line, position.column, 0)?;
        let line = self.ctx.src()[start.offset()..].lines().next()?;
        let found = line
            .match_indices(name)
            .map(|(pos, _)| pos)
            .find(|&pos| is_word_boundary(line, pos, name.len()))?;
        Some(SourceSpan::from((start.offset() + found, name.len())))
    }
}

fn is_word_boundary(line: &str, pos: usize, len: usize) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let before = line[..pos].chars().next_back().is_none_or(|c| !is_ident(c));
    let after = line[pos + len..].chars().next().is_none_or(|c| !is_ident(c));
    before && after
}

/// The current merged form of an object: its resolved node or a copy of itself.
fn resolved_object(object: &ObjectDefinition) -> ObjectDefinition {
    match object.resolved.as_deref() {
        Some(Node::Object(resolved)) => resolved.clone(),
        _ => ObjectDefinition {
            resolved: None,
            ..object.clone()
        },
    }
}

fn resolved_union(union: &UnionDefinition) -> UnionDefinition {
    match union.resolved.as_deref() {
        Some(Node::Union(resolved)) => resolved.clone(),
        _ => UnionDefinition {
            resolved: None,
            ..union.clone()
        },
    }
}

fn lower_type(ty: &gql::Type<'_, String>) -> Node {
    match ty {
        gql::Type::NamedType(name) => Node::named(name),
        gql::Type::ListType(inner) => Node::list(lower_type(inner)),
        gql::Type::NonNullType(inner) => Node::non_null(lower_type(inner)),
    }
}

fn lower_field(field: &gql::Field<'_, String>) -> Node {
    let mut node = FieldDefinition::new(&field.name, lower_type(&field.field_type));
    node.description = field.description.clone();
    node.into()
}

fn lower_input_value(value: &gql::InputValue<'_, String>) -> Node {
    let mut node = FieldDefinition::new(&value.name, lower_type(&value.value_type));
    node.description = value.description.clone();
    node.into()
}
