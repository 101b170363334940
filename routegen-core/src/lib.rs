//! Core utilities and types for the routegen handler generator.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace: version comparison, file naming styles, string helpers and
//! file writing.

mod file;
mod naming;
mod utils;
mod version;

// File operations
pub use file::{File, Overwrite, WriteResult, write_file};
// File naming styles
pub use naming::{DEFAULT_NAMING_FORMAT, NamingFormatError, format_file_name};
// String utilities
pub use utils::{clean_path, join_packages, split_words, title};
pub use version::{Version, VersionError};
