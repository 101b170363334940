use std::path::{Path, PathBuf};

use routegen_core::{File, Overwrite, WriteResult};
use serde::Serialize;

use super::TemplateStore;
use crate::{Error, Result};

/// Everything needed to render one template into one file.
#[derive(Debug)]
pub struct FileGenConfig<'a, T> {
    /// Project output directory
    pub dir: &'a Path,
    /// Subdirectory of `dir` (e.g. "internal/handler/user")
    pub subdir: &'a str,
    /// File name including extension
    pub filename: String,
    /// Template name used in error messages
    pub template_name: &'a str,
    /// Template category under the template home (e.g. "api")
    pub category: &'a str,
    /// Override template file name (e.g. "handler.tpl")
    pub template_file: &'a str,
    /// Template used when no override exists
    pub builtin_template: &'a str,
    /// Render data
    pub data: &'a T,
}

impl<T> FileGenConfig<'_, T> {
    /// Path relative to the output directory, always `/`-separated.
    pub fn relative_path(&self) -> String {
        if self.subdir.is_empty() {
            self.filename.clone()
        } else {
            format!("{}/{}", self.subdir, self.filename)
        }
    }

    pub fn full_path(&self) -> PathBuf {
        self.dir.join(self.subdir).join(&self.filename)
    }
}

/// Renders templates and writes the results.
#[derive(Debug, Clone, Default)]
pub struct FileGenerator {
    store: TemplateStore,
    overwrite: Overwrite,
}

impl FileGenerator {
    /// Create a generator that leaves existing files untouched.
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
    }

    /// Render the file content without writing it.
    pub fn render<T: Serialize>(&self, config: &FileGenConfig<'_, T>) -> Result<String> {
        let text = if config.category.is_empty() || config.template_file.is_empty() {
            config.builtin_template.into()
        } else {
            self.store.load(
                config.category,
                config.template_file,
                config.builtin_template,
            )?
        };

        let context = tera::Context::from_serialize(config.data)
            .map_err(|e| Error::template(config.template_name, e))?;
        let code = tera::Tera::one_off(&text, &context, false)
            .map_err(|e| Error::template(config.template_name, e))?;
        Ok(tidy(&code))
    }

    /// Render and write the file.
    ///
    /// With [`Overwrite::IfMissing`] an existing file is reported as skipped
    /// and nothing is rendered.
    pub fn generate<T: Serialize>(&self, config: &FileGenConfig<'_, T>) -> Result<WriteResult> {
        let path = config.full_path();
        if self.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }

        let content = self.render(config)?;
        File::new(&path, content)
            .with_overwrite(Overwrite::Always)
            .write()
            .map_err(|e| Error::io(&path, e))
    }

    /// Render the file into a [`PreviewFile`].
    pub fn preview<T: Serialize>(&self, config: &FileGenConfig<'_, T>) -> Result<PreviewFile> {
        Ok(PreviewFile {
            path: config.relative_path(),
            content: self.render(config)?,
        })
    }
}

/// Normalize generated text: strip trailing whitespace, collapse runs of
/// blank lines, drop leading blank lines, end with a single newline.
pub fn tidy(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut previous_blank = false;

    for line in code.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if previous_blank || out.is_empty() {
                continue;
            }
            previous_blank = true;
        } else {
            previous_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Paths of written files.
    pub written: Vec<String>,
    /// Paths of skipped files (already existed).
    pub skipped: Vec<String>,
}

impl WriteStats {
    pub fn record(&mut self, path: String, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Skipped => self.skipped.push(path),
        }
    }

    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}
