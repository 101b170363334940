use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::{Context, Result, bail};
use routegen_codegen::{
    TemplateStore,
    handlers::HANDLER_TEMPLATE,
    paths::{HANDLER_TEMPLATE_FILE, TEMPLATE_CATEGORY},
};
use routegen_core::WriteResult;

#[derive(Args)]
pub struct TemplateCommand {
    #[command(subcommand)]
    action: TemplateAction,
}

#[derive(Subcommand)]
enum TemplateAction {
    /// Write the built-in handler template into a template home
    Init {
        /// Template home directory
        #[arg(long)]
        home: PathBuf,

        /// Replace a template that already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Print the built-in handler template
    Show,
}

impl TemplateCommand {
    pub fn run(&self) -> Result<()> {
        match &self.action {
            TemplateAction::Init { home, force } => {
                let store = TemplateStore::with_home(home);
                let Some((path, result)) = store
                    .init(TEMPLATE_CATEGORY, HANDLER_TEMPLATE_FILE, HANDLER_TEMPLATE, *force)
                    .wrap_err("Failed to write handler template")?
                else {
                    bail!("no template home configured");
                };
                match result {
                    WriteResult::Written => println!("Wrote {}", path.display()),
                    WriteResult::Skipped => println!(
                        "{} already exists, pass --force to replace it",
                        path.display()
                    ),
                }
            }
            TemplateAction::Show => print!("{}", HANDLER_TEMPLATE),
        }
        Ok(())
    }
}
