//! Create command: scaffolds migrations, modules, and commands.
//!
//! `create` is namespaced: the action after the colon selects the scaffold
//! (`create:migration`, `create:module`, `create:command`). The vocabulary
//! in [`SUBCOMMANDS`] is what the registry validates requested names
//! against; anything else never resolves to this command.

mod command;
mod migration;
mod module;

use crate::commands::{Command, Invocation};
use crate::error::{ConsoleError, Result};
use crate::opts::{OptionDef, OptionSchema};
use crate::ui::ConsoleOutput;

/// Sub-commands `create` declares to the registry.
pub const SUBCOMMANDS: &[&str] = &["migration", "module", "command"];

pub struct CreateCommand;

impl Command for CreateCommand {
    fn name(&self) -> &str {
        "create"
    }

    fn description(&self) -> &str {
        "Create a new migration, module, or command"
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::base().with(
            OptionDef::value("description", "Description for the generated command").short('d'),
        )
    }

    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
        if inv.wants_help() {
            self.display_help(out);
            return Ok(());
        }

        match inv.context().action() {
            "migration" => migration::scaffold(inv, out),
            "module" => module::scaffold(inv, out),
            "command" => command::scaffold(inv, out),
            other => Err(ConsoleError::invalid_argument(format!(
                "unknown create target: `{other}` (expected one of: {})",
                SUBCOMMANDS.join(", ")
            ))),
        }
    }
}

/// First positional argument: the name of the thing being created.
fn required_name(inv: &Invocation) -> Result<&str> {
    inv.argument(0)
        .ok_or_else(|| ConsoleError::invalid_argument("no name specified to create"))
}

/// `user_profile` / `user-profile` -> `UserProfile`.
fn pascal_case(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::ui::MockOutput;
    use std::path::Path;

    fn invoke(command: &str, args: &[&str], root: &Path) -> (Result<()>, MockOutput) {
        let mut out = MockOutput::new();
        let context = Context::new(command, args.iter().map(|s| s.to_string()).collect());
        let inv = Invocation::parse(context, CreateCommand.options(), root.to_path_buf());
        let result = CreateCommand.run(&inv, &mut out);
        (result, out)
    }

    #[test]
    fn bare_create_is_invalid_argument() {
        let temp = tempfile::TempDir::new().unwrap();
        let (result, _) = invoke("create", &["users"], temp.path());
        let err = result.unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidArgument { .. }));
        assert!(err.to_string().contains("migration, module, command"));
    }

    #[test]
    fn missing_name_is_invalid_argument() {
        let temp = tempfile::TempDir::new().unwrap();
        let (result, _) = invoke("create:module", &[], temp.path());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no name specified"));
    }

    #[test]
    fn help_takes_priority_over_action() {
        let temp = tempfile::TempDir::new().unwrap();
        let (result, out) = invoke("create:migration", &["-h"], temp.path());
        result.unwrap();
        assert!(out.messages()[0].contains("Command: create"));
    }

    #[test]
    fn pascal_case_joins_segments() {
        assert_eq!(pascal_case("user_profile"), "UserProfile");
        assert_eq!(pascal_case("user-profile"), "UserProfile");
        assert_eq!(pascal_case("users"), "Users");
        assert_eq!(pascal_case("__x"), "X");
    }
}
