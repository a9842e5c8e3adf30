//! Python type expressions and type aliases.

use pyql_codegen::CodeBuilder;

/// Subscript a generic type: `subscript("List", &["int"])` is `List[int]`.
pub fn subscript(generic: &str, args: &[String]) -> String {
    format!("{}[{}]", generic, args.join(", "))
}

/// Builder for module-level type aliases (`Name = <type>`).
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    value: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render the alias to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("{} = {}", self.name, self.value))
    }

    /// Build the alias as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }
}
