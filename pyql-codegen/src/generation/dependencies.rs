//! Import requirements collected while rendering.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Module → set of items generated code needs from that module.
///
/// Modules keep insertion order so output is deterministic for a given
/// render order; items are kept sorted. Equality ignores module order.
///
/// Merging is a union: associative, commutative, with the empty set as
/// identity.
///
/// # Example
///
/// ```
/// use pyql_codegen::generation::DependencySet;
///
/// let mut imports = DependencySet::new();
/// imports.add("typing", "Optional");
/// imports.add("typing", "List");
/// imports.add("datetime", "datetime");
///
/// for (module, items) in imports.iter() {
///     let items: Vec<&str> = items.iter().map(|s| s.as_str()).collect();
///     println!("from {} import {}", module, items.join(", "));
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    /// Module path -> set of items (sorted for deterministic output)
    modules: IndexMap<String, BTreeSet<String>>,
}

impl DependencySet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single item.
    pub fn single(module: &str, item: &str) -> Self {
        let mut set = Self::new();
        set.add(module, item);
        set
    }

    /// Require an item from a module.
    pub fn add(&mut self, module: &str, item: &str) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(item.to_string());
    }

    /// Require a module without specific items (e.g., `import typing`).
    pub fn add_module(&mut self, module: &str) {
        self.modules.entry(module.to_string()).or_default();
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &DependencySet) {
        for (module, items) in &other.modules {
            let entry = self.modules.entry(module.clone()).or_default();
            entry.extend(items.iter().cloned());
        }
    }

    /// Consuming merge, returning the union of both sets.
    pub fn merged(mut self, other: &DependencySet) -> Self {
        self.merge(other);
        self
    }

    /// Check if a module is required.
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Check if a specific item is required from a module.
    pub fn has_item(&self, module: &str, item: &str) -> bool {
        self.modules
            .get(module)
            .is_some_and(|items| items.contains(item))
    }

    /// Get the items required from a module.
    pub fn items(&self, module: &str) -> Option<&BTreeSet<String>> {
        self.modules.get(module)
    }

    /// Iterate over modules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.modules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if no module is required.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

impl<M, S> FromIterator<(M, S)> for DependencySet
where
    M: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (M, S)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (module, item) in iter {
            set.add(module.as_ref(), item.as_ref());
        }
        set
    }
}
