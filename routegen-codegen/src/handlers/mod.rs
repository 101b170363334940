//! Handler generation: one Go handler file per API route.
//!
//! Per route, the generator:
//!
//! 1. derives the handler, logic and call names from the route's handler label
//! 2. resolves the output folder from the `group` annotation
//! 3. collects the imports the file needs
//! 4. assembles a [`HandlerContext`] and renders it through the handler template

mod compat;
mod context;
mod emitter;
mod folder;
mod generator;
mod imports;
mod naming;
mod template;

pub use compat::{Compat, LEGACY_BASELINE};
pub use context::HandlerContext;
pub use emitter::{handler_file_config, handler_file_name};
pub use folder::{handler_folder, logic_folder};
pub use generator::{HandlerGenerator, HandlerPlan};
pub use imports::HandlerImports;
pub use naming::{call_name, handler_base_name, handler_name, logic_name};
pub use template::HANDLER_TEMPLATE;
