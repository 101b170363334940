use std::path::{Path, PathBuf};

use crate::{ApiSpec, Error, Result};

/// An API spec file on disk with its parsed model.
pub struct ApiFile {
    path: PathBuf,
    spec: ApiSpec,
}

impl ApiFile {
    /// Open and parse an API spec file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let spec = ApiSpec::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, spec })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed spec.
    pub fn spec(&self) -> &ApiSpec {
        &self.spec
    }
}
