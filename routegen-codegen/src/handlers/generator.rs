use std::path::PathBuf;

use routegen_core::{DEFAULT_NAMING_FORMAT, Overwrite, Version};
use routegen_spec::{ApiSpec, Group, Route};

use super::{Compat, HandlerContext, folder::handler_folder, handler_file_config};
use crate::{
    Result,
    generation::{FileGenerator, PreviewFile, TemplateStore, WriteStats},
};

/// What would be generated for a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerPlan {
    pub method: String,
    pub path: String,
    /// Output folder relative to the project root
    pub folder: String,
    /// Output file relative to the project root
    pub file: String,
    pub context: HandlerContext,
}

/// Generates one handler file per route of an [`ApiSpec`].
///
/// Groups and routes are processed in declared order. The first failing
/// route aborts the run; files written before it are kept.
#[derive(Debug, Clone)]
pub struct HandlerGenerator {
    dir: PathBuf,
    root_pkg: String,
    naming_format: String,
    compat: Compat,
    files: FileGenerator,
}

impl HandlerGenerator {
    /// Generator writing into `dir` for the Go module `root_pkg`.
    ///
    /// Defaults: `gozero` file names, built-in templates, existing files
    /// kept, and the import layout of this tool's own version.
    pub fn new(dir: impl Into<PathBuf>, root_pkg: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            root_pkg: root_pkg.into(),
            naming_format: DEFAULT_NAMING_FORMAT.to_string(),
            compat: Compat::resolve(&Version::current()),
            files: FileGenerator::default(),
        }
    }

    pub fn with_naming_format(mut self, format: impl Into<String>) -> Self {
        self.naming_format = format.into();
        self
    }

    pub fn with_compat(mut self, compat: Compat) -> Self {
        self.compat = compat;
        self
    }

    /// Resolve the import layout from the targeted framework version.
    pub fn with_version(self, version: &Version) -> Self {
        self.with_compat(Compat::resolve(version))
    }

    pub fn with_store(mut self, store: TemplateStore) -> Self {
        self.files = FileGenerator::new(store).with_overwrite(self.files.overwrite());
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.files = self.files.with_overwrite(overwrite);
        self
    }

    pub fn compat(&self) -> Compat {
        self.compat
    }

    /// Resolve names, folders and file paths without rendering anything.
    pub fn plan(&self, api: &ApiSpec) -> Result<Vec<HandlerPlan>> {
        api.routes()
            .map(|(group, route)| {
                let (folder, context) = self.route_context(group, route);
                let file = handler_file_config(&self.dir, &self.naming_format, &folder, &context)?
                    .relative_path();
                Ok(HandlerPlan {
                    method: route.method.clone(),
                    path: route.path.clone(),
                    folder,
                    file,
                    context,
                })
            })
            .collect()
    }

    /// Write every handler file.
    pub fn generate(&self, api: &ApiSpec) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for (group, route) in api.routes() {
            let (folder, context) = self.route_context(group, route);
            let config = handler_file_config(&self.dir, &self.naming_format, &folder, &context)?;
            let result = self.files.generate(&config)?;
            tracing::debug!(
                handler = %context.handler_name,
                file = %config.relative_path(),
                ?result,
                "generated handler"
            );
            stats.record(config.relative_path(), result);
        }

        tracing::info!(
            service = %api.service.name,
            written = stats.written.len(),
            skipped = stats.skipped.len(),
            "handler generation finished"
        );
        Ok(stats)
    }

    /// Render every handler file without touching the output directory.
    pub fn preview(&self, api: &ApiSpec) -> Result<Vec<PreviewFile>> {
        api.routes()
            .map(|(group, route)| {
                let (folder, context) = self.route_context(group, route);
                let config =
                    handler_file_config(&self.dir, &self.naming_format, &folder, &context)?;
                self.files.preview(&config)
            })
            .collect()
    }

    fn route_context(&self, group: &Group, route: &Route) -> (String, HandlerContext) {
        let folder = handler_folder(group, route);
        let context = HandlerContext::build(group, route, &self.root_pkg, self.compat);
        (folder, context)
    }
}
