// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Input loading for pyql.
//!
//! - [`SchemaFile`] / [`parse_schema`] - GraphQL SDL into the [`pyql_ir::Schema`] graph
//! - [`Config`] - the optional `pyql.toml` generator configuration
//!
//! Every failure is an [`Error`] implementing [`miette::Diagnostic`], so
//! callers can render it with the offending source highlighted.

mod config;
mod error;
mod file;
mod sdl;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, Result, SourceContext};
pub use file::SchemaFile;
pub use sdl::parse_schema;
