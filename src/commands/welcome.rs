//! Welcome command.

use crate::commands::{Command, Invocation};
use crate::config::Config;
use crate::error::Result;
use crate::registry::builtin;
use crate::ui::ConsoleOutput;

/// Displays a welcome message and the available built-in commands.
///
/// The banner greets by the project's configured `app_name` when one is set.
pub struct WelcomeCommand;

impl Command for WelcomeCommand {
    fn name(&self) -> &str {
        "welcome"
    }

    fn description(&self) -> &str {
        "Display a welcome message"
    }

    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
        if inv.wants_help() {
            self.display_help(out);
            return Ok(());
        }

        let config = Config::load_or_default(inv.project_root())?;
        out.success(&format!(
            "Welcome to {}!",
            config.get_str("app_name", "Anvil")
        ));
        out.info(&format!(
            "Available commands: {}",
            builtin::names().join(", ")
        ));
        Ok(())
    }
}
