//! Language-agnostic code generation traits.

use pyql_core::BuiltinScalar;

/// Trait for mapping schema type names to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
/// Name resolution never fails: a name that is neither overridden nor a
/// built-in scalar becomes a forward reference.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a built-in scalar to a language primitive
    fn map_builtin(&self, scalar: BuiltinScalar) -> &'static str;

    /// User-configured mapping for a type name, if any
    fn override_for(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Reference a type that is resolved later (e.g., `"User"` in Python)
    fn forward_ref(&self, name: &str) -> String;

    /// Map a type name, checking overrides, then built-ins, then falling
    /// back to a forward reference.
    fn map_name(&self, name: &str) -> String {
        if let Some(mapped) = self.override_for(name) {
            return mapped.to_string();
        }
        match BuiltinScalar::from_name(name) {
            Some(scalar) => self.map_builtin(scalar).to_string(),
            None => self.forward_ref(name),
        }
    }
}
