/// Built-in handler template, used unless `<home>/api/handler.tpl` exists.
pub const HANDLER_TEMPLATE: &str = include_str!("handler.tpl");
