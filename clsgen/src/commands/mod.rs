mod completions;
mod demo;
mod demos;
mod import;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use demo::DemoCommand;
use demos::DemosCommand;
use eyre::Result;
use import::ImportCommand;

/// Extension trait for exiting on import errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for clsgen_import::Result<T> {
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

#[derive(Parser)]
#[command(name = "clsgen")]
#[command(version)]
#[command(about = "Generate ObjectScript class definitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Import(cmd) => cmd.run(),
            Commands::Demo(cmd) => cmd.run(),
            Commands::Demos(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one persistent class per class name found in a CSV file
    Import(ImportCommand),

    /// Write one of the built-in demo classes
    Demo(DemoCommand),

    /// List the built-in demo classes
    Demos(DemosCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
