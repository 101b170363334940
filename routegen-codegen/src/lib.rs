//! Handler code generation for the routegen API generator.
//!
//! This crate turns an [`ApiSpec`](routegen_spec::ApiSpec) into one Go
//! handler file per route.
//!
//! # Module Organization
//!
//! - [`generation`] - Template lookup, rendering and file output
//! - [`handlers`] - Handler naming, folder resolution, imports and the generator
//! - [`paths`] - Directory and file constants of the generated project layout

mod error;

pub mod generation;
pub mod handlers;
pub mod paths;

pub use error::{Error, Result};
pub use generation::{FileGenerator, PreviewFile, TemplateStore, WriteStats};
pub use handlers::{Compat, HandlerContext, HandlerGenerator};
