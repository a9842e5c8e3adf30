//! Python import builder.

use pyql_codegen::{CodeBuilder, DependencySet};

/// Builder for Python import statements.
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    names: Vec<String>,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
        }
    }

    /// Import a name from the module (`from module import name`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// One import statement per module of a dependency set, items sorted.
    pub fn all_from(imports: &DependencySet) -> Vec<Import> {
        imports
            .iter()
            .map(|(module, items)| {
                items
                    .iter()
                    .fold(Import::new(module), |import, item| import.name(item))
            })
            .collect()
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.names.is_empty() {
            builder.line(&format!("import {}", self.module))
        } else {
            builder.line(&format!(
                "from {} import {}",
                self.module,
                self.names.join(", ")
            ))
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }
}
