//! Python class builder.

use pyql_codegen::CodeBuilder;

/// Builder for Python classes with annotated attributes.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    bases: Vec<String>,
    body: Vec<String>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a base class.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add a body line (e.g., `id: str`).
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Render the class to a CodeBuilder.
    ///
    /// An empty body renders as `pass`.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let header = if self.bases.is_empty() {
            format!("class {}:", self.name)
        } else {
            format!("class {}({}):", self.name, self.bases.join(", "))
        };

        builder.block(&header, |b| {
            if self.body.is_empty() {
                b.line("pass")
            } else {
                b.each(&self.body, |b, line| b.line(line))
            }
        })
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }
}
