use std::path::PathBuf;

use routegen_core::NamingFormatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating handler files.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured file naming style is not recognized.
    #[error(transparent)]
    Naming(#[from] NamingFormatError),

    /// A built-in or override template failed to parse or render.
    #[error("failed to render template '{name}'")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Reading a template or writing a generated file failed.
    #[error("I/O error on '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn template(name: impl Into<String>, source: tera::Error) -> Self {
        Self::Template {
            name: name.into(),
            source,
        }
    }
}
