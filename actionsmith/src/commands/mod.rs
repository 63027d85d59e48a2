mod completions;
mod list;
mod new;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use new::NewCommand;

/// Extension trait for exiting on registry errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for actionsmith_codegen_go::Result<T> {
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
#[command(name = "actionsmith")]
#[command(version)]
#[command(about = "Scaffold chat bot actions and register them with the bot")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an action file and add it to the registry
    New(NewCommand),

    /// List actions currently in the registry
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
