//! Snapshot tests for Python code generation.
//!
//! These tests go from GraphQL SDL to the generated module.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use pyql_codegen::Severity;
use pyql_codegen_python::{Generated, Generator, RenderConfig};
use pyql_schema::{Config, parse_schema};

/// Generate a module from SDL with the default configuration.
fn generate(sdl: &str) -> Generated {
    generate_with(sdl, "")
}

/// Generate a module from SDL and a `pyql.toml` body.
fn generate_with(sdl: &str, config_toml: &str) -> Generated {
    let schema = parse_schema(sdl, "schema.graphql").expect("Failed to parse schema");
    let config = Config::from_str(config_toml).expect("Failed to parse config");
    Generator::new(&schema)
        .with_config(RenderConfig::from(&config))
        .generate()
}

#[test]
fn test_record_fields() {
    let generated = generate(
        r#"
        type User {
          id: ID!
          name: String
          tags: [String!]!
        }
        "#,
    );

    assert!(generated.diagnostics.is_empty());
    insta::assert_snapshot!(generated.code, @r#"
    from typing import List, Optional

    class User:
        id: str
        name: Optional[str]
        tags: List[str]
    "#);
}

#[test]
fn test_nullable_list() {
    let generated = generate(
        r#"
        type User {
          tags: [String!]
        }
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    from typing import List, Optional

    class User:
        tags: Optional[List[str]]
    "#);
}

#[test]
fn test_union_of_objects() {
    let generated = generate(
        r#"
        type Success { ok: Boolean! }
        type Failure { reason: String! }
        union Result = Success | Failure
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    from typing import Union

    class Success:
        ok: bool

    class Failure:
        reason: str

    Result = Union["Success", "Failure"]
    "#);
}

#[test]
fn test_custom_scalar_is_forward_reference() {
    let generated = generate(
        r#"
        scalar DateTime

        type Event {
          at: DateTime!
          previous: DateTime
          count: Int!
          ratio: Float!
        }
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    from typing import Optional

    class Event:
        at: "DateTime"
        previous: Optional["DateTime"]
        count: int
        ratio: float
    "#);
}

#[test]
fn test_nested_lists() {
    let generated = generate(
        r#"
        type Matrix {
          rows: [[Int]!]!
          cells: [[Float!]]
        }
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    from typing import List, Optional

    class Matrix:
        rows: List[List[Optional[int]]]
        cells: Optional[List[Optional[List[float]]]]
    "#);
}

#[test]
fn test_config_base_class_imports_and_scalars() {
    let generated = generate_with(
        r#"
        scalar DateTime

        type Event {
          id: ID!
          at: DateTime!
          note: String
        }
        "#,
        r#"
        base_class = "BaseModel"

        [imports]
        pydantic = ["BaseModel"]
        datetime = ["datetime"]

        [scalars]
        DateTime = "datetime"
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    from pydantic import BaseModel
    from datetime import datetime
    from typing import Optional

    class Event(BaseModel):
        id: str
        at: datetime
        note: Optional[str]
    "#);
}

#[test]
fn test_extensions_are_rendered() {
    let generated = generate(
        r#"
        type User { id: ID! }
        extend type User { email: String }

        union Search = User
        extend union Search = Post

        type Post { title: String! }
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    from typing import Optional, Union

    class User:
        id: str
        email: Optional[str]

    Search = Union["User", "Post"]

    class Post:
        title: str
    "#);
}

#[test]
fn test_unsupported_kinds_are_skipped_with_warnings() {
    let generated = generate(
        r#"
        enum Role { ADMIN MEMBER }
        interface Node { id: ID! }
        input NewAccount { name: String! }

        type Account implements Node {
          id: ID!
          role: Role!
        }
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    class Account:
        id: str
        role: "Role"
    "#);

    let locations: Vec<_> = generated
        .diagnostics
        .iter()
        .map(|d| d.location.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(locations, vec!["Role", "Node", "NewAccount"]);
    assert!(
        generated
            .diagnostics
            .iter()
            .all(|d| d.severity == Severity::Warning)
    );
}

#[test]
fn test_python_keyword_field_is_reported() {
    let generated = generate(
        r#"
        type Edge {
          from: ID!
          to: ID!
        }
        "#,
    );

    insta::assert_snapshot!(generated.code, @r#"
    class Edge:
        from: str
        to: str
    "#);
    assert_eq!(generated.diagnostics.len(), 1);
    assert_eq!(generated.diagnostics[0].location.as_deref(), Some("Edge.from"));
}

#[test]
fn test_only_scalars_generate_nothing() {
    let generated = generate("scalar DateTime\nscalar JSON\n");
    assert_eq!(generated.code, "");
}

#[test]
fn test_output_is_deterministic() {
    let sdl = r#"
        type A { b: B, list: [Int] }
        type B { a: A! }
        union AB = A | B
    "#;
    assert_eq!(generate(sdl), generate(sdl));
}
