use routegen_core::join_packages;
use routegen_spec::{Group, Route};

use super::{Compat, folder::logic_folder};
use crate::paths::{CONTEXT_DIR, PROJECT_OPEN_SOURCE_URL, TYPES_DIR};

/// Quoted import paths of a generated handler file, in emission order.
///
/// The order is fixed: logic package, service context, request/response
/// types (only with a request type), then the legacy `httpx` helper (only
/// for [`Compat::Legacy`]). No de-duplication is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerImports {
    paths: Vec<String>,
}

impl HandlerImports {
    pub fn build(group: &Group, route: &Route, root_pkg: &str, compat: Compat) -> Self {
        let mut paths = vec![
            quote(&join_packages(&[root_pkg, logic_folder(group, route).as_str()])),
            quote(&join_packages(&[root_pkg, CONTEXT_DIR])),
        ];
        if !route.request_type_name().is_empty() {
            paths.push(quote(&join_packages(&[root_pkg, TYPES_DIR])));
        }
        if compat == Compat::Legacy {
            paths.push(quote(&format!("{}/rest/httpx", PROJECT_OPEN_SOURCE_URL)));
        }
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Import block body, one path per line, indented for a Go `import (...)`.
    pub fn render(&self) -> String {
        self.paths.join("\n\t")
    }
}

fn quote(path: &str) -> String {
    format!("\"{}\"", path)
}
