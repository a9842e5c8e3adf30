use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pyql_codegen_python::Generator;
use pyql_schema::{CONFIG_FILE_NAME, SchemaFile};

use super::{UnwrapOrExit, load_config};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the GraphQL schema (SDL)
    pub schema: PathBuf,

    /// Path to pyql.toml (defaults to ./pyql.toml, optional)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();

        // Render to surface diagnostics; the code itself is discarded
        let generated = Generator::new(schema_file.schema())
            .with_config(config)
            .generate();

        let report = CheckReport::new(
            schema_file.path().to_path_buf(),
            schema_file.schema(),
            generated.diagnostics,
        );

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
