//! Generate command report data structures.

use std::path::PathBuf;

use pyql_codegen::Diagnostic;

use super::output::{Output, Report, render_diagnostics};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warnings raised while rendering.
    pub diagnostics: Vec<Diagnostic>,
    /// What happened to the generated module.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The module was written to disk.
    Written(PathBuf),
    /// The output file already existed and was left untouched.
    Skipped(PathBuf),
    /// The module was printed instead of written.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);

        match &self.result {
            GenerationResult::Written(path) => {
                if !self.diagnostics.is_empty() {
                    out.newline();
                }
                out.section("Generated");
                out.added_item(&path.display().to_string());
            }
            GenerationResult::Skipped(path) => {
                if !self.diagnostics.is_empty() {
                    out.newline();
                }
                out.preformatted(&format!(
                    "Skipped {} (already exists)",
                    path.display()
                ));
            }
            // Only the module goes to stdout so it can be piped
            GenerationResult::Preview(code) => {
                if !code.is_empty() {
                    out.preformatted(code.trim_end());
                }
            }
        }
    }
}
