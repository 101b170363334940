//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from handler generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Service name from the API spec.
    pub service: String,

    /// Number of routes in the API spec.
    pub route_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of handler generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        dir: PathBuf,
        written: Vec<String>,
        skipped: Vec<String>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written {
                dir,
                written,
                skipped,
            } => {
                out.preformatted(&format!(
                    "{} ({} route{})",
                    self.service,
                    self.route_count,
                    if self.route_count == 1 { "" } else { "s" }
                ));
                out.key_value("Generated", &dir.display().to_string());

                if !written.is_empty() {
                    out.newline();
                    out.section("New handlers");
                    for file in written {
                        out.added_item(file);
                    }
                }

                if !skipped.is_empty() {
                    out.newline();
                    out.section("Kept existing handlers");
                    for file in skipped {
                        out.list_item(file);
                    }
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}
