//! Python type mapper implementation.

use indexmap::IndexMap;
use pyql_codegen::TypeMapper;
use pyql_core::BuiltinScalar;

/// Python type mapper implementation.
///
/// Built-in scalars map to Python primitives. Configured scalar mappings
/// take precedence over built-ins; anything else becomes a string forward
/// reference so classes can refer to types defined later in the module.
#[derive(Debug, Clone, Default)]
pub struct PythonTypeMapper {
    overrides: IndexMap<String, String>,
}

impl PythonTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with scalar overrides (GraphQL name -> Python type).
    pub fn with_overrides(overrides: IndexMap<String, String>) -> Self {
        Self { overrides }
    }
}

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> &'static str {
        "python"
    }

    fn map_builtin(&self, scalar: BuiltinScalar) -> &'static str {
        match scalar {
            BuiltinScalar::Int => "int",
            BuiltinScalar::Float => "float",
            BuiltinScalar::String => "str",
            BuiltinScalar::Boolean => "bool",
            BuiltinScalar::Id => "str",
        }
    }

    fn override_for(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }

    fn forward_ref(&self, name: &str) -> String {
        format!("\"{}\"", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_builtin_types() {
        let mapper = PythonTypeMapper::new();

        assert_eq!(mapper.map_name("Int"), "int");
        assert_eq!(mapper.map_name("Float"), "float");
        assert_eq!(mapper.map_name("String"), "str");
        assert_eq!(mapper.map_name("Boolean"), "bool");
        assert_eq!(mapper.map_name("ID"), "str");
    }

    #[test]
    fn test_python_forward_ref() {
        let mapper = PythonTypeMapper::new();

        assert_eq!(mapper.map_name("DateTime"), "\"DateTime\"");
        assert_eq!(mapper.map_name("User"), "\"User\"");
    }

    #[test]
    fn test_python_overrides() {
        let mapper = PythonTypeMapper::with_overrides(IndexMap::from([
            ("DateTime".to_string(), "datetime".to_string()),
            ("ID".to_string(), "UUID".to_string()),
        ]));

        assert_eq!(mapper.map_name("DateTime"), "datetime");
        assert_eq!(mapper.map_name("ID"), "UUID");
        assert_eq!(mapper.map_name("Int"), "int");
        assert_eq!(mapper.language(), "python");
    }
}
