//! Check command report data structures.

use std::path::PathBuf;

use indexmap::IndexMap;
use pyql_codegen::Diagnostic;
use pyql_ir::{NodeKind, Schema};
use serde::Serialize;

use super::output::{Output, Report, render_diagnostics};

/// Report data from schema validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Number of type definitions per kind, in first-seen order.
    pub types: IndexMap<NodeKind, usize>,
    /// Warnings raised while rendering.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn new(schema_path: PathBuf, schema: &Schema, diagnostics: Vec<Diagnostic>) -> Self {
        let mut types = IndexMap::new();
        for node in schema.types() {
            *types.entry(node.kind()).or_insert(0) += 1;
        }

        Self {
            schema_path,
            types,
            diagnostics,
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        out.section("Types");
        for (kind, count) in &self.types {
            out.key_value_indented(kind.as_str(), &count.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use pyql_ir::{ObjectDefinition, UnionDefinition};

    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    fn report() -> CheckReport {
        let schema = Schema::with_builtins()
            .with_type(ObjectDefinition::new("User"))
            .with_type(ObjectDefinition::new("Post"))
            .with_type(UnionDefinition::new("Search").member("User"));
        CheckReport::new(PathBuf::from("schema.graphql"), &schema, Vec::new())
    }

    #[test]
    fn test_counts_by_kind() {
        let report = report();
        assert_eq!(report.types[&NodeKind::ScalarDefinition], 5);
        assert_eq!(report.types[&NodeKind::ObjectDefinition], 2);
        assert_eq!(report.types[&NodeKind::UnionDefinition], 1);
    }

    #[test]
    fn test_render() {
        let mut out = RecordingOutput::default();
        report().render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "✓ schema.graphql is valid",
                "",
                "Types:",
                "  scalar_definition: 5",
                "  object_definition: 2",
                "  union_definition: 1",
            ]
        );
    }

    #[test]
    fn test_json() {
        let mut report = report();
        report
            .diagnostics
            .push(Diagnostic::warning("render", "skipped enum").at("Role"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["schema_path"], "schema.graphql");
        assert_eq!(json["types"]["object_definition"], 2);
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
        assert_eq!(json["diagnostics"][0]["location"], "Role");
    }
}
