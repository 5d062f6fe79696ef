//! Import configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::{Error, Result};

/// Settings for one importer invocation.
///
/// Usually loaded from a `clsgen.toml` file; every field is optional and
/// falls back to the defaults below.
///
/// ```toml
/// output_dir = "generated/csv"
/// package = "Demo.CSV"
/// extends = ["%Persistent"]
/// extension = "cls"
///
/// [type_map]
/// integer = "%Integer"
/// text = "%String"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Directory receiving one file per class.
    pub output_dir: PathBuf,
    /// Package prefix for generated class names. Empty for none.
    pub package: String,
    /// Superclasses of every generated class.
    pub extends: Vec<String>,
    /// File extension of generated files, without the dot.
    pub extension: String,
    /// Input type name to class type name.
    pub type_map: IndexMap<String, String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated/csv"),
            package: "Demo.CSV".to_string(),
            extends: vec!["%Persistent".to_string()],
            extension: "cls".to_string(),
            type_map: [
                ("integer", "%Integer"),
                ("text", "%String"),
                ("decimal", "%Numeric"),
                ("boolean", "%Boolean"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        }
    }
}

impl ImportConfig {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source: toml::de::Error| {
            let span = source.span().map(SourceSpan::from);
            Box::new(Error::Config {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }

    /// Qualified class name for a short name from the input.
    pub fn class_name(&self, short: &str) -> String {
        if self.package.is_empty() {
            short.to_string()
        } else {
            format!("{}.{}", self.package, short)
        }
    }

    /// Translate an input type name.
    pub fn map_type(&self, type_name: &str) -> Option<&str> {
        self.type_map.get(type_name).map(String::as_str)
    }

    /// Path of the generated file for a short class name.
    pub fn output_path(&self, short: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", short, self.extension))
    }
}

impl FromStr for ImportConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "clsgen.toml")
    }
}
