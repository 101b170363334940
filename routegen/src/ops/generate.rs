//! Generate operation - handler files from an API spec.

use std::path::Path;

use eyre::{Context, Result};
use routegen_codegen::{HandlerGenerator, TemplateStore};
use routegen_core::{Overwrite, Version};
use routegen_spec::ApiSpec;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root to generate into.
    pub dir: &'a Path,
    /// Go module path used for imports.
    pub module: &'a str,
    /// File naming style.
    pub style: &'a str,
    /// Override template home, if any.
    pub home: Option<&'a Path>,
    /// Targeted framework version.
    pub version: &'a Version,
    /// Overwrite existing handler files.
    pub force: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(api: &ApiSpec, opts: GenerateOptions) -> Result<GenerateReport> {
    let store = opts
        .home
        .map(TemplateStore::with_home)
        .unwrap_or_else(TemplateStore::builtin);
    let overwrite = if opts.force {
        Overwrite::Always
    } else {
        Overwrite::IfMissing
    };

    let generator = HandlerGenerator::new(opts.dir, opts.module)
        .with_naming_format(opts.style)
        .with_version(opts.version)
        .with_store(store)
        .with_overwrite(overwrite);
    tracing::debug!(compat = ?generator.compat(), version = %opts.version, "resolved import layout");

    let result = if opts.dry_run {
        let files = generator
            .preview(api)
            .wrap_err("Failed to render handlers")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let stats = generator
            .generate(api)
            .wrap_err("Failed to generate handlers")?;
        GenerationResult::Written {
            dir: opts.dir.to_path_buf(),
            written: stats.written,
            skipped: stats.skipped,
        }
    };

    Ok(GenerateReport {
        service: api.service.name.clone(),
        route_count: api.route_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    const API: &str = r#"
        [service]
        name = "users-api"

        [[service.groups]]
        annotation = { group = "user" }

        [[service.groups.routes]]
        method = "get"
        path = "/users/:id"
        handler = "getUser"
        request = "GetUserReq"
        response = "GetUserResp"
    "#;

    fn options<'a>(dir: &'a Path, version: &'a Version, dry_run: bool) -> GenerateOptions<'a> {
        GenerateOptions {
            dir,
            module: "github.com/acme/users",
            style: "gozero",
            home: None,
            version,
            force: false,
            dry_run,
        }
    }

    #[test]
    fn test_generate_writes_handler() {
        let temp = TempDir::new().unwrap();
        let api = ApiSpec::from_str(API).unwrap();
        let version = Version::new(1, 2, 0);

        let report = generate(&api, options(temp.path(), &version, false)).unwrap();

        assert_eq!(report.service, "users-api");
        assert_eq!(report.route_count, 1);
        let GenerationResult::Written { written, .. } = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written, vec!["internal/handler/user/getuserhandler.go"]);
        assert!(
            temp.path()
                .join("internal/handler/user/getuserhandler.go")
                .is_file()
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let api = ApiSpec::from_str(API).unwrap();
        let version = Version::new(1, 2, 0);

        let report = generate(&api, options(temp.path(), &version, true)).unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(files.len(), 1);
        assert!(files[0].content.contains("func GetUserHandler("));
        assert!(!temp.path().join("internal").exists());
    }

    #[test]
    fn test_bad_style_is_error() {
        let temp = TempDir::new().unwrap();
        let api = ApiSpec::from_str(API).unwrap();
        let version = Version::new(1, 2, 0);
        let mut opts = options(temp.path(), &version, false);
        opts.style = "snake";

        let err = generate(&api, opts).unwrap_err();
        assert!(format!("{:?}", err).contains("unsupported naming format 'snake'"));
    }
}
