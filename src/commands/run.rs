//! Run command: executes another framework command by name.

use crate::commands::{Command, Invocation};
use crate::context::Context;
use crate::error::{ConsoleError, Result};
use crate::opts::{OptionDef, OptionSchema};
use crate::registry::{builtin, primary_name};
use crate::ui::ConsoleOutput;

/// Runs a framework command selected with `-c`/`--cmd`.
pub struct RunCommand;

impl RunCommand {
    /// Re-dispatch to another built-in command, reusing this invocation's
    /// raw arguments (plus any injected extras) so the inner command scans
    /// them against its own schema.
    ///
    /// The inner command's faults bubble up unwrapped; the outer execute
    /// boundary performs the single normalization step.
    fn dispatch_inner(
        name: &str,
        inv: &Invocation,
        out: &mut dyn ConsoleOutput,
        extra_args: &[&str],
    ) -> Result<()> {
        let spec = builtin::get(primary_name(name))
            .filter(|spec| spec.accepts(name))
            .ok_or_else(|| ConsoleError::command_not_found(name))?;

        let mut args = inv.context().args().to_vec();
        args.extend(extra_args.iter().map(|s| s.to_string()));

        let command = spec.build();
        let inner = Invocation::parse(
            Context::new(name, args),
            command.options(),
            inv.project_root().to_path_buf(),
        );
        command.run(&inner, out)
    }
}

impl Command for RunCommand {
    fn name(&self) -> &str {
        "run"
    }

    fn description(&self) -> &str {
        "Run a framework command"
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::base().with(OptionDef::value("cmd", "The command to run").short('c'))
    }

    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
        if inv.wants_help() {
            self.display_help(out);
            return Ok(());
        }

        let Some(command) = inv.value("cmd") else {
            out.warning("No command specified. Use -c or --cmd to specify a command.");
            return Ok(());
        };

        out.running(&format!("Running command: {command}"));
        match command {
            "migrate" => Self::dispatch_inner("migrate", inv, out, &[]),
            "rollback" => Self::dispatch_inner("migrate", inv, out, &["--rollback"]),
            "create" => Self::dispatch_inner("create", inv, out, &[]),
            "welcome" => Self::dispatch_inner("welcome", inv, out, &[]),
            other => Err(ConsoleError::invalid_argument(format!(
                "unknown command: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockOutput;
    use std::path::PathBuf;

    fn invoke(args: &[&str], root: PathBuf) -> (Result<()>, MockOutput) {
        let mut out = MockOutput::new();
        let context = Context::new("run", args.iter().map(|s| s.to_string()).collect());
        let inv = Invocation::parse(context, RunCommand.options(), root);
        let result = RunCommand.run(&inv, &mut out);
        (result, out)
    }

    #[test]
    fn warns_when_no_command_given() {
        let (result, out) = invoke(&[], PathBuf::from("/tmp"));
        result.unwrap();
        assert!(out.warnings()[0].contains("No command specified"));
    }

    #[test]
    fn unknown_inner_command_is_invalid_argument() {
        let (result, out) = invoke(&["-c", "bogus"], PathBuf::from("/tmp"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidArgument { .. }));
        assert!(out.of_kind(crate::ui::MessageKind::Running)[0].contains("bogus"));
    }

    #[test]
    fn dispatches_welcome_via_long_option() {
        let temp = tempfile::TempDir::new().unwrap();
        let (result, out) = invoke(&["--cmd=welcome"], temp.path().to_path_buf());
        result.unwrap();
        assert_eq!(out.successes(), ["Welcome to Anvil!"]);
    }

    #[test]
    fn cmd_without_value_warns_instead_of_dispatching() {
        // `-c` at end of input scans as boolean true; there is no text value.
        let (result, out) = invoke(&["-c"], PathBuf::from("/tmp"));
        result.unwrap();
        assert!(out.warnings()[0].contains("No command specified"));
    }

    #[test]
    fn rollback_reaches_migrate_with_flag_injected() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(".anvil")).unwrap();
        std::fs::write(
            temp.path().join(".anvil/config.yml"),
            "migration:\n  path: migrations\n",
        )
        .unwrap();
        let (result, out) = invoke(&["-c", "rollback"], temp.path().to_path_buf());
        result.unwrap();
        // Empty ledger: rollback warns rather than failing.
        assert!(out
            .warnings()
            .iter()
            .any(|w| w.contains("No applied migrations")));
    }
}
