use std::path::{Path, PathBuf};

use clap::Args;
use clsgen_import::{ImportConfig, Importer};
use eyre::Result;

use super::UnwrapOrExit;
use crate::reports::{ImportSummary, Report, TerminalOutput, generating_file};

const DEFAULT_CONFIG: &str = "clsgen.toml";

#[derive(Args)]
pub struct ImportCommand {
    /// CSV file with one property per row
    pub input: PathBuf,

    /// Path to the import configuration (defaults to ./clsgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package prefix for generated class names (overrides the configuration)
    #[arg(short, long)]
    pub package: Option<String>,
}

impl ImportCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config().unwrap_or_exit();
        let importer = Importer::new(config);
        let mut out = TerminalOutput::new();
        let report = importer
            .run_with(&self.input, |path| generating_file(&mut out, path))
            .unwrap_or_exit();

        let summary = ImportSummary::new(&self.input, report);
        summary.render(&mut out);
        Ok(())
    }

    /// Load the configuration and apply command line overrides.
    fn config(&self) -> clsgen_import::Result<ImportConfig> {
        let mut config = match &self.config {
            Some(path) => ImportConfig::open(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => ImportConfig::open(DEFAULT_CONFIG)?,
            None => ImportConfig::default(),
        };
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        Ok(config)
    }
}
