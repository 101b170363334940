//! Code generation outputs and file management.
//!
//! - [`TemplateStore`] - Override template lookup with a built-in fallback
//! - [`FileGenerator`] - Render a template into a file under the output directory
//! - [`WriteStats`] / [`PreviewFile`] - What a generation run produced

mod files;
mod store;

pub use files::{FileGenConfig, FileGenerator, PreviewFile, WriteStats, tidy};
pub use store::TemplateStore;
