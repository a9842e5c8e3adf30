use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pyql_codegen_python::Generator;
use pyql_core::{File, WriteResult};
use pyql_schema::{CONFIG_FILE_NAME, SchemaFile};

use super::{UnwrapOrExit, load_config};
use crate::reports::{GenerateReport, GenerationResult, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the GraphQL schema (SDL)
    pub schema: PathBuf,

    /// Path to pyql.toml (defaults to ./pyql.toml, optional)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep the output file if it already exists
    #[arg(long)]
    pub no_overwrite: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();

        let generated = Generator::new(schema_file.schema())
            .with_config(config)
            .generate();

        let result = match &self.output {
            Some(path) => {
                let mut file = File::generated(path, generated.code);
                if self.no_overwrite {
                    file = file.if_missing();
                }

                if self.dry_run {
                    GenerationResult::Preview(file.render())
                } else {
                    let written = file
                        .write()
                        .wrap_err("Failed to write generated module")?;
                    match written {
                        WriteResult::Written => GenerationResult::Written(path.clone()),
                        WriteResult::Skipped => GenerationResult::Skipped(path.clone()),
                    }
                }
            }
            None => GenerationResult::Preview(generated.code),
        };

        let report = GenerateReport {
            diagnostics: generated.diagnostics,
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
