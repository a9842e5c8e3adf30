//! Render configuration.

use indexmap::IndexMap;
use pyql_codegen::DependencySet;
use pyql_schema::Config;

/// Immutable settings for one rendering pass.
///
/// Built with a consuming builder API:
///
/// ```
/// use pyql_codegen_python::RenderConfig;
///
/// let config = RenderConfig::new()
///     .base_class("BaseModel")
///     .import("pydantic", "BaseModel")
///     .scalar("DateTime", "datetime");
///
/// assert_eq!(config.base_class_name(), Some("BaseModel"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    base_class: Option<String>,
    imports: DependencySet,
    scalars: IndexMap<String, String>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every generated class inherit from `name`.
    pub fn base_class(mut self, name: impl Into<String>) -> Self {
        self.base_class = Some(name.into());
        self
    }

    /// Seed the module imports with `from <module> import <item>`.
    pub fn import(mut self, module: &str, item: &str) -> Self {
        self.imports.add(module, item);
        self
    }

    /// Map a GraphQL scalar to a Python type, overriding built-ins.
    pub fn scalar(mut self, name: impl Into<String>, python_type: impl Into<String>) -> Self {
        self.scalars.insert(name.into(), python_type.into());
        self
    }

    /// Base class name, if any.
    pub fn base_class_name(&self) -> Option<&str> {
        self.base_class.as_deref()
    }

    /// Imports merged into every generated module.
    pub fn imports(&self) -> &DependencySet {
        &self.imports
    }

    /// Scalar overrides.
    pub fn scalars(&self) -> &IndexMap<String, String> {
        &self.scalars
    }
}

impl From<&Config> for RenderConfig {
    fn from(config: &Config) -> Self {
        let mut imports = DependencySet::new();
        for (module, items) in &config.imports {
            // `[imports] decimal = []` still asks for the module
            imports.add_module(module);
            for item in items {
                imports.add(module, item);
            }
        }

        Self {
            base_class: config.base_class.clone(),
            imports,
            scalars: config.scalars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .base_class("Base")
            .import("models", "Base")
            .scalar("Date", "date")
            .scalar("Date", "datetime");

        assert_eq!(config.base_class_name(), Some("Base"));
        assert!(config.imports().has_item("models", "Base"));
        assert_eq!(config.scalars()["Date"], "datetime");
    }

    #[test]
    fn test_from_file_config() {
        let file: Config = r#"
            base_class = "BaseModel"

            [imports]
            pydantic = ["BaseModel", "Field"]
            decimal = []

            [scalars]
            Decimal = "Decimal"
        "#
        .parse()
        .unwrap();

        let config = RenderConfig::from(&file);
        assert_eq!(config.base_class_name(), Some("BaseModel"));
        assert!(config.imports().has_item("pydantic", "BaseModel"));
        assert!(config.imports().has_item("pydantic", "Field"));
        assert!(config.imports().has_module("decimal"));
        assert_eq!(config.scalars()["Decimal"], "Decimal");
    }

    #[test]
    fn test_default_is_empty() {
        let config = RenderConfig::from(&Config::default());
        assert_eq!(config, RenderConfig::new());
    }
}
