//! Python syntax builders for classes, type expressions and imports.
//!
//! These provide a high-level API for constructing Python syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod imports;
mod types;

pub use class::Class;
pub use imports::Import;
pub use types::{TypeAlias, subscript};
