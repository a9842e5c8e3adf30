//! Shared code generation utilities for pyql.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific code generators (e.g., `pyql-codegen-python`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`generation`] - Output bookkeeping (DependencySet)
//! - [`diagnostic`] - Non-fatal findings collected while rendering
//! - [`language`] - Language-specific abstractions (TypeMapper)

pub mod builder;
pub mod diagnostic;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, Indent};
pub use diagnostic::{Diagnostic, Severity};
pub use generation::DependencySet;
pub use language::TypeMapper;
