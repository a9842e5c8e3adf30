//! Output bookkeeping shared by generators.

mod dependencies;

pub use dependencies::DependencySet;
