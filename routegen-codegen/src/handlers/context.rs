use routegen_core::title;
use routegen_spec::{Group, Route};
use serde::Serialize;

use super::{
    Compat, HandlerImports,
    folder::handler_folder,
    naming::{call_name, handler_name, logic_name},
};
use crate::paths::HANDLER_DIR;

/// Render data for one handler file.
///
/// Field names serialize to the names the handler template refers to
/// (`{{ HandlerName }}`, `{% if HasResp %}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandlerContext {
    /// Pre-joined import block body
    pub import_packages: String,
    pub handler_name: String,
    pub request_type: String,
    pub logic_type: String,
    /// Method invoked on the logic unit
    pub call: String,
    pub has_resp: bool,
    pub has_request: bool,
    #[serde(rename = "After1_1_10")]
    pub after_1_1_10: bool,
}

impl HandlerContext {
    pub fn build(group: &Group, route: &Route, root_pkg: &str, compat: Compat) -> Self {
        let mut handler = handler_name(&route.handler);
        // Handlers nested in a sub-folder are referenced from another package.
        if handler_folder(group, route) != HANDLER_DIR {
            handler = title(&handler);
        }

        Self {
            import_packages: HandlerImports::build(group, route, root_pkg, compat).render(),
            request_type: title(route.request_type_name()),
            logic_type: title(&logic_name(&route.handler)),
            call: call_name(&handler),
            has_resp: !route.response_type_name().is_empty(),
            has_request: !route.request_type_name().is_empty(),
            after_1_1_10: compat.is_after_baseline(),
            handler_name: handler,
        }
    }
}
