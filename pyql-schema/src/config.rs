//! The `pyql.toml` generator configuration.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pyql.toml";

/// Generator configuration, as written in `pyql.toml`.
///
/// ```toml
/// base_class = "BaseModel"
///
/// [imports]
/// pydantic = ["BaseModel"]
///
/// [scalars]
/// DateTime = "datetime"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base class every generated class inherits from.
    #[serde(default)]
    pub base_class: Option<String>,

    /// Extra imports added to every generated module (module -> items).
    #[serde(default)]
    pub imports: IndexMap<String, Vec<String>>,

    /// Scalar mappings (GraphQL name -> Python type), overriding built-ins.
    #[serde(default)]
    pub scalars: IndexMap<String, String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse the configuration file if it exists, otherwise use defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a configuration from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.config_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(base) = &self.base_class {
            if !is_dotted_identifier(base) {
                return Err(ctx.validation_error_at(
                    format!("base_class '{}' is not a valid Python name", base),
                    ctx.find_key_span("base_class"),
                ));
            }
        }

        for (module, items) in &self.imports {
            if !is_dotted_identifier(module) {
                return Err(ctx.validation_error_at(
                    format!("'{}' is not a valid Python module path", module),
                    ctx.find_key_span(module),
                ));
            }
            if let Some(item) = items.iter().find(|item| !is_identifier(item)) {
                return Err(ctx.validation_error_at(
                    format!("'{}' cannot be imported from '{}'", item, module),
                    ctx.find_key_span(module),
                ));
            }
        }

        for (scalar, python_type) in &self.scalars {
            if !is_identifier(scalar) {
                return Err(ctx.validation_error_at(
                    format!("'{}' is not a valid GraphQL type name", scalar),
                    ctx.find_key_span(scalar),
                ));
            }
            if python_type.trim().is_empty() {
                return Err(ctx.validation_error_at(
                    format!("scalar '{}' maps to an empty type", scalar),
                    ctx.find_key_span(scalar),
                ));
            }
        }

        Ok(())
    }
}

/// `[_A-Za-z][_0-9A-Za-z]*`, the shape shared by GraphQL names and Python identifiers
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_dotted_identifier(path: &str) -> bool {
    path.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
            base_class = "BaseModel"

            [imports]
            pydantic = ["BaseModel"]
            datetime = ["datetime", "date"]

            [scalars]
            DateTime = "datetime"
            ID = "int"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.base_class.as_deref(), Some("BaseModel"));
        assert_eq!(config.imports["pydantic"], vec!["BaseModel"]);
        assert_eq!(config.imports["datetime"], vec!["datetime", "date"]);
        let scalars: Vec<_> = config.scalars.keys().collect();
        assert_eq!(scalars, vec!["DateTime", "ID"]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_str("base = \"X\"").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_invalid_base_class() {
        let err = Config::from_str("base_class = \"not valid\"").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(message.contains("not valid"));
                assert_eq!(span.map(|s| s.offset()), Some(0));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_dotted_base_class_allowed() {
        let config = Config::from_str("base_class = \"pydantic.BaseModel\"").unwrap();
        assert_eq!(config.base_class.as_deref(), Some("pydantic.BaseModel"));
    }

    #[test]
    fn test_invalid_import_item() {
        let err = Config::from_str("[imports]\ntyping = [\"Any\", \"1bad\"]").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_scalar_mapping() {
        let err = Config::from_str("[scalars]\nDateTime = \"  \"").unwrap_err();
        assert!(err.to_string().contains("DateTime"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::from_file_or_default(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[scalars]\nDate = \"date\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.scalars["Date"], "date");
    }
}
