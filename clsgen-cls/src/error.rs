use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for class generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write class source")]
    Io(#[from] io::Error),

    #[error(
        "method '{method}' uses expression mode but has {statements} statements, expected exactly one"
    )]
    ExpressionBody { method: String, statements: usize },
}
