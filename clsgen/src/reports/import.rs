//! Import command report.

use std::path::{Path, PathBuf};

use clsgen_import::ImportReport;

use super::output::{Output, Report};

/// Summary of a finished CSV import.
#[derive(Debug)]
pub struct ImportSummary {
    /// CSV file that was read.
    pub input: PathBuf,
    /// Number of property rows read.
    pub rows: usize,
    /// Files written, one per class.
    pub written: Vec<PathBuf>,
}

impl ImportSummary {
    pub fn new(input: &Path, report: ImportReport) -> Self {
        Self {
            input: input.to_path_buf(),
            rows: report.rows,
            written: report.written,
        }
    }
}

/// Announce a class file that is about to be written.
pub fn generating_file(out: &mut dyn Output, path: &Path) {
    out.preformatted(&format!("generating file {} ...", path.display()));
}

impl Report for ImportSummary {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.key_value("Input", &self.input.display().to_string());
        out.key_value("Properties", &self.rows.to_string());
        out.key_value("Classes", &self.written.len().to_string());
    }
}
