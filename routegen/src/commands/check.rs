use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use routegen_core::DEFAULT_NAMING_FORMAT;
use routegen_spec::ApiFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the API spec (defaults to ./api.toml)
    #[arg(short, long, default_value = "api.toml")]
    pub api: PathBuf,

    /// File naming style used to show output paths
    #[arg(short, long, default_value = DEFAULT_NAMING_FORMAT)]
    pub style: String,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let api_file = ApiFile::open(&self.api).unwrap_or_exit();

        let report = ops::check(api_file.spec(), api_file.path(), &self.style)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
