//! Template lookup.
//!
//! Users can customize generated code by dropping template files into a
//! template home directory laid out as `<home>/<category>/<file>`. When no
//! home is configured, or the file is absent, the built-in template is used.

use std::{borrow::Cow, path::PathBuf};

use routegen_core::{File, Overwrite, WriteResult};

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    home: Option<PathBuf>,
}

impl TemplateStore {
    /// A store that only ever yields built-in templates.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// A store that looks for override templates under `home`.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Path where an override template for `category`/`file` would live.
    pub fn override_path(&self, category: &str, file: &str) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(category).join(file))
    }

    /// Resolve template text: the override file if present, else `builtin`.
    pub fn load<'a>(&self, category: &str, file: &str, builtin: &'a str) -> Result<Cow<'a, str>> {
        let Some(path) = self.override_path(category, file) else {
            return Ok(Cow::Borrowed(builtin));
        };
        if !path.is_file() {
            return Ok(Cow::Borrowed(builtin));
        }

        tracing::debug!(path = %path.display(), "using override template");
        std::fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|e| Error::io(path, e))
    }

    /// Write `builtin` to the override location so users can edit it.
    ///
    /// Existing templates are kept unless `force` is set.
    pub fn init(
        &self,
        category: &str,
        file: &str,
        builtin: &str,
        force: bool,
    ) -> Result<Option<(PathBuf, WriteResult)>> {
        let Some(path) = self.override_path(category, file) else {
            return Ok(None);
        };
        let overwrite = if force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };
        let result = File::new(&path, builtin)
            .with_overwrite(overwrite)
            .write()
            .map_err(|e| Error::io(&path, e))?;
        Ok(Some((path, result)))
    }
}
