//! Python module assembly.

use pyql_codegen::{CodeBuilder, DependencySet, Diagnostic};
use pyql_ir::Schema;

use crate::{RenderConfig, Renderer, ast::Import};

/// A generated Python module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generated {
    /// Module source. Empty when nothing rendered and nothing is imported.
    pub code: String,
    /// Warnings raised while rendering; the code is produced regardless.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generated {
    /// Check if any diagnostic was raised.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Python code generator that renders every type of a schema into one module.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: RenderConfig,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            config: RenderConfig::default(),
        }
    }

    /// Use the given render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render all types in the schema's canonical order and assemble the module.
    pub fn generate(&self) -> Generated {
        let mut renderer = Renderer::new(&self.config);
        let rendered = renderer.render_all(self.schema.types());

        // Configured imports come first
        let imports = self.config.imports().clone().merged(&rendered.imports);
        let fragments: Vec<&str> = rendered.fragments.iter().map(|f| f.trim()).collect();

        Generated {
            code: assemble(&imports, &fragments),
            diagnostics: renderer.into_diagnostics(),
        }
    }
}

/// Import block, a blank line, then the definitions separated by blank lines.
fn assemble(imports: &DependencySet, fragments: &[&str]) -> String {
    if imports.is_empty() && fragments.is_empty() {
        return String::new();
    }

    let mut code = Import::all_from(imports)
        .iter()
        .fold(CodeBuilder::python(), |builder, import| import.render(builder))
        .build();

    if !fragments.is_empty() {
        if !code.is_empty() {
            code.push('\n');
        }
        code.push_str(&fragments.join("\n\n"));
        code.push('\n');
    }
    code
}

#[cfg(test)]
mod tests {
    use pyql_codegen::Severity;
    use pyql_ir::{
        EnumDefinition, FieldDefinition, Node, ObjectDefinition, ScalarDefinition,
        UnionDefinition,
    };

    use super::*;

    fn user() -> ObjectDefinition {
        ObjectDefinition::new("User")
            .field(FieldDefinition::new("id", Node::non_null(Node::named("ID"))))
            .field(FieldDefinition::new("name", Node::named("String")))
            .field(FieldDefinition::new(
                "tags",
                Node::non_null(Node::list(Node::non_null(Node::named("String")))),
            ))
    }

    #[test]
    fn test_empty_schema_is_empty_output() {
        let generated = Generator::new(&Schema::with_builtins()).generate();
        assert_eq!(generated, Generated::default());
    }

    #[test]
    fn test_scalars_only_is_empty_output() {
        let schema = Schema::with_builtins().with_type(ScalarDefinition::new("DateTime"));
        assert_eq!(Generator::new(&schema).generate().code, "");
    }

    #[test]
    fn test_module_layout() {
        let schema = Schema::with_builtins()
            .with_type(user())
            .with_type(UnionDefinition::new("Actor").member("User").member("Bot"));

        let code = Generator::new(&schema).generate().code;
        assert_eq!(
            code,
            "from typing import List, Optional, Union\n\
             \n\
             class User:\n    id: str\n    name: Optional[str]\n    tags: List[str]\n\
             \n\
             Actor = Union[\"User\", \"Bot\"]\n"
        );
    }

    #[test]
    fn test_configured_imports_come_first() {
        let schema = Schema::with_builtins().with_type(user());
        let config = RenderConfig::new()
            .base_class("BaseModel")
            .import("pydantic", "BaseModel");

        let code = Generator::new(&schema).with_config(config).generate().code;
        assert!(code.starts_with(
            "from pydantic import BaseModel\nfrom typing import List, Optional\n\nclass User(BaseModel):\n"
        ));
    }

    #[test]
    fn test_configured_imports_without_definitions() {
        let config = RenderConfig::new().import("pydantic", "BaseModel");
        let code = Generator::new(&Schema::with_builtins())
            .with_config(config)
            .generate()
            .code;
        assert_eq!(code, "from pydantic import BaseModel\n");
    }

    #[test]
    fn test_generation_is_idempotent() {
        let schema = Schema::with_builtins()
            .with_type(user())
            .with_type(UnionDefinition::new("Result").member("A").member("B"));
        let generator = Generator::new(&schema).with_config(RenderConfig::new().base_class("Base"));

        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_unsupported_types_are_reported_not_fatal() {
        let schema = Schema::with_builtins()
            .with_type(EnumDefinition::new("Role").value("ADMIN"))
            .with_type(ObjectDefinition::new("Empty"));

        let generated = Generator::new(&schema).generate();
        assert_eq!(generated.code, "class Empty:\n    pass\n");
        assert!(generated.has_diagnostics());
        assert_eq!(generated.diagnostics[0].severity, Severity::Warning);
        assert_eq!(generated.diagnostics[0].phase, "render");
    }
}
