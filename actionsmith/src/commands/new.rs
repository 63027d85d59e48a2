use std::path::PathBuf;

use actionsmith_codegen_go::{ActionsRegistry, files::ActionFile, paths};
use actionsmith_core::{GeneratedFile, is_affirmative};
use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct NewCommand {
    /// Action name, also the basis for the generated identifiers
    pub name: Option<String>,

    /// Regexp the action triggers on (embedded verbatim, not validated)
    pub pattern: Option<String>,

    /// Path to the bot repository root
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::prompt("Name")?,
        };
        if name.is_empty() || name.contains(char::is_whitespace) {
            bail!("action name must be a single non-empty token, got '{name}'");
        }

        let pattern = match &self.pattern {
            Some(pattern) => pattern.clone(),
            None => Self::prompt("Regexp")?,
        };

        let action = ActionFile::new(&name, &pattern);
        let action_path = action.path(&self.root);

        if action_path.exists() {
            if !Self::confirm_overwrite()? {
                return Ok(());
            }
            // Already registered, so only the file is rewritten.
        } else {
            let registry_path = paths::registry_path(&self.root);
            println!("Adding action to {}", registry_path.display());

            let mut registry = ActionsRegistry::open(&registry_path).unwrap_or_exit();
            registry.register(action.names()).unwrap_or_exit();
            registry.save().unwrap_or_exit();
        }

        println!("Writing action file {}", action_path.display());
        action.write(&self.root)?;

        Ok(())
    }

    fn prompt(label: &str) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .interact_text()
            .wrap_err_with(|| format!("Failed to read {label}"))
    }

    fn confirm_overwrite() -> Result<bool> {
        // Only `y`/`yes` confirms; any other answer, including an empty
        // one, declines. A plain Confirm would re-prompt instead.
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Action already exists, overwrite it? [y/N]")
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read confirmation")?;

        Ok(is_affirmative(&answer))
    }
}
