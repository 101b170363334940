use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use routegen_core::{DEFAULT_NAMING_FORMAT, Version};
use routegen_spec::ApiFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the API spec (defaults to ./api.toml)
    #[arg(short, long, default_value = "api.toml")]
    pub api: PathBuf,

    /// Project root to generate into
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Go module path of the project (e.g. github.com/acme/users)
    #[arg(short, long)]
    pub module: String,

    /// File naming style (gozero, go_zero, go-zero, goZero, GoZero)
    #[arg(short, long, default_value = DEFAULT_NAMING_FORMAT)]
    pub style: String,

    /// Directory with override templates (<home>/api/handler.tpl)
    #[arg(long)]
    pub home: Option<PathBuf>,

    /// go-zero version to generate for (defaults to this tool's version)
    #[arg(long, value_name = "VERSION")]
    pub compat_version: Option<Version>,

    /// Overwrite handler files that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let api_file = ApiFile::open(&self.api).unwrap_or_exit();

        let version = self.compat_version.clone().unwrap_or_else(Version::current);
        let report = ops::generate(
            api_file.spec(),
            GenerateOptions {
                dir: &self.dir,
                module: &self.module,
                style: &self.style,
                home: self.home.as_deref(),
                version: &version,
                force: self.force,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
