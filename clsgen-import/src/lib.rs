//! CSV batch importer for ObjectScript persistent classes.
//!
//! Each input row describes one property:
//!
//! ```text
//! class_name,property_name,property_type,max_length,required
//! Person,Name,text,50,true
//! Person,Age,integer,,false
//! ```
//!
//! Rows are grouped by class name into [`Class`](clsgen_cls::Class) models
//! and written to one file per class. Everything the importer needs (output
//! directory, package, type table) comes from an explicit [`ImportConfig`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod importer;

pub use config::ImportConfig;
pub use error::{Error, Result};
pub use importer::{ClassMap, ImportReport, Importer};
