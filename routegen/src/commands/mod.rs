mod check;
mod completions;
mod generate;
mod template;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use template::TemplateCommand;

use crate::logging;

/// Extension trait for exiting on spec errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for routegen_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version)]
#[command(about = "Generate go-zero HTTP handlers from a TOML API spec")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Template(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one handler file per route
    Generate(GenerateCommand),

    /// Validate an API spec and show what would be generated
    Check(CheckCommand),

    /// Manage the handler template
    Template(TemplateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
