use std::path::Path;

use routegen_core::format_file_name;

use super::{HANDLER_TEMPLATE, HandlerContext};
use crate::{
    Result,
    generation::FileGenConfig,
    paths::{FILE_EXTENSION, HANDLER_TEMPLATE_FILE, HANDLER_TEMPLATE_NAME, TEMPLATE_CATEGORY},
};

/// File name for a handler, styled by `naming_format` (e.g. `gozero`,
/// `go_zero`, `goZero`).
pub fn handler_file_name(naming_format: &str, handler: &str) -> Result<String> {
    let stem = format_file_name(naming_format, handler)?;
    Ok(format!("{}.{}", stem, FILE_EXTENSION))
}

/// Render config for one handler file under `dir/folder`.
pub fn handler_file_config<'a>(
    dir: &'a Path,
    naming_format: &str,
    folder: &'a str,
    context: &'a HandlerContext,
) -> Result<FileGenConfig<'a, HandlerContext>> {
    Ok(FileGenConfig {
        dir,
        subdir: folder,
        filename: handler_file_name(naming_format, &context.handler_name)?,
        template_name: HANDLER_TEMPLATE_NAME,
        category: TEMPLATE_CATEGORY,
        template_file: HANDLER_TEMPLATE_FILE,
        builtin_template: HANDLER_TEMPLATE,
        data: context,
    })
}
