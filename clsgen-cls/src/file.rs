use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Class, Error, Result};

/// A class bound to the file it is written to.
///
/// The class is rendered in full before the file is opened, so a class that
/// fails validation leaves no file behind.
pub struct ClassFile<'a> {
    path: PathBuf,
    class: &'a Class,
}

impl<'a> ClassFile<'a> {
    pub fn new(path: impl Into<PathBuf>, class: &'a Class) -> Self {
        Self {
            path: path.into(),
            class,
        }
    }

    /// `<dir>/<stem>.<extension>`
    pub fn in_dir(dir: &Path, stem: &str, extension: &str, class: &'a Class) -> Self {
        Self::new(dir.join(format!("{}.{}", stem, extension)), class)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn class(&self) -> &Class {
        self.class
    }

    /// Render the class and write it, creating parent directories.
    pub fn write(&self) -> Result<()> {
        let source = self.class.render()?;
        write_file(&self.path, &source).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
