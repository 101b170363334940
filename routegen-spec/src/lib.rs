//! API spec model for the routegen handler generator.
//!
//! An API spec is a service made of groups, and each group is an ordered
//! list of routes. Groups and routes carry string annotations; the `group`
//! annotation picks the output folder of generated code.
//!
//! Specs are written in TOML:
//!
//! ```toml
//! [info]
//! title = "user api"
//!
//! [service]
//! name = "user-api"
//!
//! [[service.groups]]
//! annotation = { group = "user" }
//!
//! [[service.groups.routes]]
//! method = "get"
//! path = "/users/:id"
//! handler = "getUser"
//! request = "GetUserReq"
//! response = "GetUserResp"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod spec;

pub use error::{Error, Result};
pub use file::ApiFile;
pub use spec::{Annotation, ApiSpec, Group, Info, Route, Service};
