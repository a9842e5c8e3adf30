//! Core types for pyql.
//!
//! This crate provides the fundamental types shared by the schema loader,
//! the code generators and the CLI.

mod file;
mod scalar;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, Overwrite, WriteResult};
// Fundamental types
pub use scalar::BuiltinScalar;
