use std::{io, path::PathBuf};

use clap::Args;
use clsgen_cls::ClassFile;
use eyre::{Context, Result, eyre};
use tracing::info;

use crate::demo;

#[derive(Args)]
pub struct DemoCommand {
    /// File to write the class to (defaults to standard output)
    pub output: Option<PathBuf>,

    /// Name of the demo class to generate
    #[arg(short, long, default_value = demo::SAMPLE)]
    pub class: String,
}

impl DemoCommand {
    pub fn run(&self) -> Result<()> {
        let class = demo::find(&self.class).ok_or_else(|| {
            eyre!(
                "unknown demo class '{}' (run 'clsgen demos' to list them)",
                self.class
            )
        })?;

        match &self.output {
            Some(path) => {
                info!(path = %path.display(), class = %class.name, "generating file");
                ClassFile::new(path, &class)
                    .write()
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            }
            None => {
                let stdout = io::stdout();
                class
                    .generate(&mut stdout.lock())
                    .wrap_err("Failed to write to standard output")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_writes_to_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Test.BO.cls");
        let cmd = DemoCommand {
            output: Some(path.clone()),
            class: "Test.BO".to_string(),
        };

        cmd.run().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Class Test.BO Extends Ens.BusinessOperation\n"));
    }

    #[test]
    fn test_unknown_class() {
        let cmd = DemoCommand {
            output: None,
            class: "Test.Nope".to_string(),
        };
        let err = cmd.run().unwrap_err();
        assert!(err.to_string().contains("unknown demo class 'Test.Nope'"));
    }
}
