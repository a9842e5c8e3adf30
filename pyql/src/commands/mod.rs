mod check;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use pyql_codegen_python::RenderConfig;
use pyql_schema::Config;

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pyql_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `pyql.toml` if present; a missing file means defaults.
pub(crate) fn load_config(path: &Path) -> RenderConfig {
    let config = Config::from_file_or_default(path).unwrap_or_exit();
    RenderConfig::from(&config)
}

#[derive(Parser)]
#[command(name = "pyql")]
#[command(version)]
#[command(about = "Generate typed Python classes from a GraphQL schema")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Python module from a GraphQL schema
    Generate(GenerateCommand),

    /// Load and render a schema without writing anything
    Check(CheckCommand),
}
