//! Check operation - API spec validation.

use std::path::Path;

use eyre::{Context, Result};
use routegen_codegen::HandlerGenerator;
use routegen_spec::ApiSpec;

use crate::reports::{CheckReport, RouteLine};

/// Execute the check operation.
///
/// Resolves every route's handler name and output file without writing.
pub fn check(api: &ApiSpec, api_path: &Path, style: &str) -> Result<CheckReport> {
    let plans = HandlerGenerator::new(".", "")
        .with_naming_format(style)
        .plan(api)
        .wrap_err("Validation failed")?;

    let routes = plans
        .into_iter()
        .map(|plan| RouteLine {
            method: plan.method.to_uppercase(),
            path: plan.path,
            handler: plan.context.handler_name,
            file: plan.file,
        })
        .collect();

    Ok(CheckReport {
        api_path: api_path.to_path_buf(),
        service: api.service.name.clone(),
        title: api.info.title.clone(),
        routes,
    })
}
