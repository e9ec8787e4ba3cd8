//! Rule document commands.

use crate::cli::common::{to_json, CliError, CliResult, RulesOptions};
use clap::{Args, Subcommand};

/// Inspect or reset the construction rules
#[derive(Args, Debug)]
pub struct RulesArgs {
    #[command(subcommand)]
    command: RulesCommand,

    #[command(flatten)]
    rules: RulesOptions,
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Print the effective rules (document merged over defaults)
    Show,
    /// Print the rule document path
    Path,
    /// Overwrite the rule document with the built-in defaults
    Reset,
}

impl RulesArgs {
    /// Execute rules subcommand
    pub fn execute(&self) -> CliResult<()> {
        let store = self.rules.store()?;
        match self.command {
            RulesCommand::Show => {
                let rules = store.load();
                println!("{}", to_json(rules.as_ref())?);
            }
            RulesCommand::Path => {
                println!("{}", store.path().display());
            }
            RulesCommand::Reset => {
                store
                    .reset()
                    .map_err(|e| CliError::io(format!("Failed to reset rules: {e:#}")))?;
                println!("✓ Rules reset to defaults at {}", store.path().display());
            }
        }
        Ok(())
    }
}
