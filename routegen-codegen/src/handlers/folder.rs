//! Output folder resolution.
//!
//! A route's `group` annotation wins over its group's; without either the
//! default directory is used. The annotation value is joined onto the
//! default directory and the result is cleaned like Go's `path.Join`, so
//! `.` and empty segments vanish and `..` consumes the segment before it.

use routegen_core::clean_path;
use routegen_spec::{Group, Route};

use crate::paths::{GROUP_PROPERTY, HANDLER_DIR, LOGIC_DIR};

/// Folder for the route's handler file (e.g. `internal/handler/user`).
pub fn handler_folder(group: &Group, route: &Route) -> String {
    nest(HANDLER_DIR, annotated_folder(group, route))
}

/// Folder of the route's logic package (e.g. `internal/logic/user`).
pub fn logic_folder(group: &Group, route: &Route) -> String {
    nest(LOGIC_DIR, annotated_folder(group, route))
}

fn annotated_folder<'a>(group: &'a Group, route: &'a Route) -> Option<&'a str> {
    route
        .annotation(GROUP_PROPERTY)
        .filter(|folder| !folder.is_empty())
        .or_else(|| {
            group
                .annotation(GROUP_PROPERTY)
                .filter(|folder| !folder.is_empty())
        })
}

fn nest(base: &str, folder: Option<&str>) -> String {
    match folder {
        Some(folder) => clean_path(&format!("{}/{}", base, folder)),
        None => base.to_string(),
    }
}
