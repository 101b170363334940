use std::{
    io,
    path::{Path, PathBuf},
};

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist (user-editable handlers)
    #[default]
    IfMissing,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (default: create if missing)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Override the overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self) -> io::Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}
