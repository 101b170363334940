//! Identifier derivation from a route's handler label.
//!
//! All functions here are total: any label, including an empty one, maps to
//! a name.

use routegen_core::title;

const HANDLER_SUFFIX: &str = "Handler";
const LOGIC_SUFFIX: &str = "Logic";

/// Trim the label and strip one trailing `handler` suffix, in any case.
///
/// `"getUserHandler"` and `"getUserHANDLER"` both yield `"getUser"`.
pub fn handler_base_name(label: &str) -> &str {
    let label = label.trim();
    let split = label.len().saturating_sub(HANDLER_SUFFIX.len());
    match label.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(HANDLER_SUFFIX) => &label[..split],
        _ => label,
    }
}

/// `getUser` -> `getUserHandler`
pub fn handler_name(label: &str) -> String {
    format!("{}{}", handler_base_name(label), HANDLER_SUFFIX)
}

/// `getUser` -> `getUserLogic`
pub fn logic_name(label: &str) -> String {
    format!("{}{}", handler_base_name(label), LOGIC_SUFFIX)
}

/// Method called on the logic unit: `getUserHandler` -> `GetUser`
pub fn call_name(handler: &str) -> String {
    title(handler.strip_suffix(HANDLER_SUFFIX).unwrap_or(handler))
}
