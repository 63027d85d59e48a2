use std::path::PathBuf;

use actionsmith_codegen_go::{ActionsRegistry, paths};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to the bot repository root
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = ActionsRegistry::open(paths::registry_path(&self.root)).unwrap_or_exit();
        let entries = registry.entries().unwrap_or_exit();

        if entries.is_empty() {
            println!("No actions registered");
        } else {
            println!("Actions:");
            for entry in entries {
                println!("  {}", entry);
            }
        }

        Ok(())
    }
}
