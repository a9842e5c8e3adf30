//! Built-in GraphQL scalars.

use serde::Serialize;

/// The scalars every GraphQL schema provides without declaring them.
///
/// This is a language-agnostic catalogue. Generators map each variant to
/// a target-language primitive through their `TypeMapper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuiltinScalar {
    Int,
    Float,
    String,
    Boolean,
    Id,
}

impl BuiltinScalar {
    /// All built-in scalars, in the order a schema declares them.
    pub const ALL: [BuiltinScalar; 5] = [
        BuiltinScalar::Int,
        BuiltinScalar::Float,
        BuiltinScalar::String,
        BuiltinScalar::Boolean,
        BuiltinScalar::Id,
    ];

    /// Get the schema name of the scalar (as written in SDL).
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinScalar::Int => "Int",
            BuiltinScalar::Float => "Float",
            BuiltinScalar::String => "String",
            BuiltinScalar::Boolean => "Boolean",
            BuiltinScalar::Id => "ID",
        }
    }

    /// Look up a built-in scalar by its schema name.
    ///
    /// Names are case-sensitive: `id` is a user type, `ID` is the built-in.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl std::fmt::Display for BuiltinScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(BuiltinScalar::from_name("Int"), Some(BuiltinScalar::Int));
        assert_eq!(BuiltinScalar::from_name("ID"), Some(BuiltinScalar::Id));
        assert_eq!(
            BuiltinScalar::from_name("Boolean"),
            Some(BuiltinScalar::Boolean)
        );
        assert_eq!(BuiltinScalar::from_name("DateTime"), None);
        assert_eq!(BuiltinScalar::from_name("int"), None);
    }

    #[test]
    fn test_name_round_trips_for_all() {
        for scalar in BuiltinScalar::ALL {
            assert_eq!(BuiltinScalar::from_name(scalar.as_str()), Some(scalar));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BuiltinScalar::Id.to_string(), "ID");
        assert_eq!(BuiltinScalar::Float.to_string(), "Float");
    }
}
