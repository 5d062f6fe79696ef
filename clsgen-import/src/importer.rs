//! Row-by-row conversion of CSV input into class models.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use clsgen_cls::{Class, ClassFile, Property};
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::{Error, ImportConfig, Result};

const COLUMNS: usize = 5;
const MAX_LENGTH_PARAM: &str = "MAXLEN";
const REQUIRED_KEYWORD: &str = "Required";

/// Classes keyed by their short name, in order of first appearance.
pub type ClassMap = IndexMap<String, Class>;

/// Outcome of a completed import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Number of data rows read.
    pub rows: usize,
    /// Written files, in class order.
    pub written: Vec<PathBuf>,
}

/// Converts property rows into classes and writes one file per class.
pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Read every row and build the classes.
    ///
    /// The input must start with a header row. Stops at the first bad row.
    pub fn collect<R: Read>(&self, reader: R) -> Result<ClassMap> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut classes = ClassMap::new();
        for record in reader.records() {
            let record = record.map_err(|source| Box::new(Error::Csv { source }))?;
            self.apply_row(&mut classes, &record)?;
        }
        Ok(classes)
    }

    fn apply_row(&self, classes: &mut ClassMap, record: &StringRecord) -> Result<()> {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != COLUMNS {
            return Err(Box::new(Error::MalformedRow {
                line,
                found: record.len(),
            }));
        }

        let (class_name, prop_name, prop_type, max_length, required) =
            (&record[0], &record[1], &record[2], &record[3], &record[4]);

        let ty = self.config.map_type(prop_type).ok_or_else(|| {
            Box::new(Error::UnknownType {
                line,
                type_name: prop_type.to_string(),
                class: class_name.to_string(),
                property: prop_name.to_string(),
                known: self
                    .config
                    .type_map
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        })?;

        let mut property = Property::new(prop_name, ty);
        if !max_length.is_empty() {
            let length: i64 = max_length.trim().parse().map_err(|source| {
                Box::new(Error::InvalidLength {
                    line,
                    value: max_length.to_string(),
                    source,
                })
            })?;
            property = property.param(MAX_LENGTH_PARAM, length);
        }
        if required.eq_ignore_ascii_case("true") {
            property = property.keyword(REQUIRED_KEYWORD);
        }

        debug!(line, class = class_name, property = prop_name, ty, "imported row");

        classes
            .entry(class_name.to_string())
            .or_insert_with(|| {
                Class::new(self.config.class_name(class_name))
                    .extends_all(self.config.extends.iter().cloned())
            })
            .push(property);
        Ok(())
    }

    /// Write one file per class into the output directory.
    pub fn write(&self, classes: &ClassMap) -> Result<Vec<PathBuf>> {
        self.write_with(classes, |_| {})
    }

    /// Like [`write`](Self::write), calling `on_file` before each file is written.
    pub fn write_with(
        &self,
        classes: &ClassMap,
        mut on_file: impl FnMut(&Path),
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(classes.len());
        for (short, class) in classes {
            let file = ClassFile::new(self.config.output_path(short), class);
            info!(path = %file.path().display(), "generating file");
            on_file(file.path());
            file.write().map_err(|source| {
                Box::new(Error::Write {
                    class: class.name.clone(),
                    source,
                })
            })?;
            written.push(file.path().to_path_buf());
        }
        Ok(written)
    }

    /// Import a CSV file: read every row, then write every class.
    ///
    /// Nothing is written when any row fails.
    pub fn run(&self, path: &Path) -> Result<ImportReport> {
        self.run_with(path, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_file` before each file is written.
    pub fn run_with(&self, path: &Path, on_file: impl FnMut(&Path)) -> Result<ImportReport> {
        let file = File::open(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let classes = self.collect(file)?;
        let rows = classes.values().map(|c| c.components.len()).sum();
        let written = self.write_with(&classes, on_file)?;
        Ok(ImportReport { rows, written })
    }
}
