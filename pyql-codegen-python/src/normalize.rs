//! Nullability normalization.
//!
//! GraphQL types are nullable unless marked `!`; Python hints are required
//! unless marked `Optional`. Before a node is rendered, nullable positions
//! are rewritten to carry an explicit [`Node::Optional`] wrapper so the
//! renderer can treat `NonNull` as a plain passthrough.

use std::borrow::Cow;

use pyql_ir::Node;

/// Rewrite a node so that its nullable type position is explicit.
///
/// - A definition with a resolved form is replaced by it.
/// - A field whose type is nullable gets its type wrapped in `Optional`.
/// - A list whose element type is nullable gets its element wrapped in `Optional`.
///
/// Only one level is rewritten; wrapped children are normalized when the
/// renderer reaches them. The input is never mutated; unchanged nodes are
/// borrowed.
pub fn normalize(node: &Node) -> Cow<'_, Node> {
    let node = node.resolved().unwrap_or(node);
    match node {
        Node::Field(field) if is_nullable(&field.field_type) => Cow::Owned(Node::Field(
            field.with_type(Node::optional((*field.field_type).clone())),
        )),
        Node::List(element) if is_nullable(element) => {
            Cow::Owned(Node::list(Node::optional((**element).clone())))
        }
        _ => Cow::Borrowed(node),
    }
}

/// A type position is nullable unless it is `NonNull`. An `Optional` is
/// already explicit and is not wrapped twice.
fn is_nullable(node: &Node) -> bool {
    !matches!(node, Node::NonNull(_) | Node::Optional(_))
}

#[cfg(test)]
mod tests {
    use pyql_ir::{FieldDefinition, ObjectDefinition, UnionDefinition};

    use super::*;

    fn field_type(node: &Node) -> &Node {
        match node {
            Node::Field(field) => &field.field_type,
            other => panic!("expected field, got {:?}", other),
        }
    }

    #[test]
    fn test_nullable_field_becomes_optional() {
        let field = Node::from(FieldDefinition::new("name", Node::named("String")));
        let normalized = normalize(&field);

        assert!(matches!(normalized, Cow::Owned(_)));
        assert_eq!(
            field_type(&normalized),
            &Node::optional(Node::named("String"))
        );
    }

    #[test]
    fn test_non_null_field_unchanged() {
        let field = Node::from(FieldDefinition::new(
            "id",
            Node::non_null(Node::named("ID")),
        ));
        let normalized = normalize(&field);

        assert!(matches!(normalized, Cow::Borrowed(_)));
        assert_eq!(normalized.as_ref(), &field);
    }

    #[test]
    fn test_nullable_list_field_wraps_whole_list() {
        let field = Node::from(FieldDefinition::new(
            "tags",
            Node::list(Node::named("String")),
        ));

        assert_eq!(
            field_type(&normalize(&field)),
            &Node::optional(Node::list(Node::named("String")))
        );
    }

    #[test]
    fn test_list_of_nullable_wraps_element() {
        let list = Node::list(Node::named("Int"));
        assert_eq!(
            normalize(&list).into_owned(),
            Node::list(Node::optional(Node::named("Int")))
        );

        let strict = Node::list(Node::non_null(Node::named("Int")));
        assert_eq!(normalize(&strict).as_ref(), &strict);
    }

    #[test]
    fn test_already_optional_not_wrapped_twice() {
        let field = Node::from(FieldDefinition::new(
            "name",
            Node::optional(Node::named("String")),
        ));
        assert!(matches!(normalize(&field), Cow::Borrowed(_)));
    }

    #[test]
    fn test_other_kinds_untouched() {
        let nodes = [
            Node::named("User"),
            Node::non_null(Node::named("User")),
            Node::optional(Node::named("User")),
            Node::from(UnionDefinition::new("U").member("A")),
        ];
        for node in &nodes {
            assert_eq!(normalize(node).as_ref(), node);
        }
    }

    #[test]
    fn test_resolved_definition_preferred() {
        let resolved = ObjectDefinition::new("User")
            .field(FieldDefinition::new("id", Node::named("ID")))
            .field(FieldDefinition::new("email", Node::named("String")));
        let object = Node::from(
            ObjectDefinition::new("User")
                .field(FieldDefinition::new("id", Node::named("ID")))
                .with_resolved(resolved.clone()),
        );

        assert_eq!(normalize(&object).as_ref(), &Node::from(resolved));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let field = Node::from(FieldDefinition::new("name", Node::named("String")));
        let before = field.clone();
        let _ = normalize(&field);
        assert_eq!(field, before);
    }
}
