//! Python code generator for pyql.
//!
//! This crate turns a [`pyql_ir::Schema`] into a Python module of type
//! hinted classes: GraphQL object types become classes, unions become
//! `typing.Union` aliases, nullable types become `typing.Optional`.
//!
//! # Usage
//!
//! ```
//! use pyql_codegen_python::{Generator, RenderConfig};
//! use pyql_ir::{FieldDefinition, Node, ObjectDefinition, Schema};
//!
//! let schema = Schema::with_builtins().with_type(
//!     ObjectDefinition::new("User")
//!         .field(FieldDefinition::new("id", Node::non_null(Node::named("ID")))),
//! );
//!
//! let generated = Generator::new(&schema)
//!     .with_config(RenderConfig::new().base_class("BaseModel"))
//!     .generate();
//!
//! assert_eq!(generated.code, "class User(BaseModel):\n    id: str\n");
//! ```
//!
//! # Pipeline
//!
//! - [`normalize`] - make nullability explicit (`Optional`) before rendering
//! - [`Renderer`] - recursive per-kind rendering, collecting imports
//! - [`Generator`] - render every schema type and assemble the module

mod config;
mod generator;
mod naming;
mod normalize;
mod renderer;
mod type_mapper;

pub mod ast;

pub use config::RenderConfig;
pub use generator::{Generated, Generator};
pub use naming::is_python_keyword;
pub use normalize::normalize;
pub use renderer::{Rendered, RenderedList, Renderer};
pub use type_mapper::PythonTypeMapper;
