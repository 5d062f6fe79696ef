use std::{num::ParseIntError, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for import operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(clsgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse import configuration")]
    #[diagnostic(code(clsgen::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read CSV input")]
    #[diagnostic(code(clsgen::csv))]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 5 columns, found {found}")]
    #[diagnostic(
        code(clsgen::malformed_row),
        help("columns are: class_name, property_name, property_type, max_length, required")
    )]
    MalformedRow { line: u64, found: usize },

    #[error("line {line}: unknown property type '{type_name}' for {class}.{property}")]
    #[diagnostic(
        code(clsgen::unknown_type),
        help("known types are: {known}; add a [type_map] entry to the configuration")
    )]
    UnknownType {
        line: u64,
        type_name: String,
        class: String,
        property: String,
        known: String,
    },

    #[error("line {line}: invalid maximum length '{value}'")]
    #[diagnostic(
        code(clsgen::invalid_length),
        help("the max_length column must be empty or an integer")
    )]
    InvalidLength {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to write class '{class}'")]
    #[diagnostic(code(clsgen::write))]
    Write {
        class: String,
        #[source]
        source: clsgen_cls::Error,
    },
}
