//! Project-supplied command table.
//!
//! A project may register extra commands in `.anvil/commands.yml`, mapping
//! a command name to a shell invocation:
//!
//! ```yaml
//! db:reset: "scripts/reset_db.sh"
//! greet: "echo hello"
//! ```
//!
//! This table is consulted only when the built-in table has no match, and
//! no sub-command validation applies: names are looked up verbatim.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

use crate::commands::{Command, Invocation};
use crate::error::{ConsoleError, Result};
use crate::ui::ConsoleOutput;

/// Path of the project command table for a project root.
pub fn table_path(project_root: &Path) -> PathBuf {
    project_root.join(".anvil").join("commands.yml")
}

/// Load the project command table, empty when the file is absent.
pub fn load(project_root: &Path) -> Result<BTreeMap<String, String>> {
    let path = table_path(project_root);
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(&path)?;
    serde_yaml::from_str(&content).map_err(|e| ConsoleError::ConfigParseError {
        path,
        message: e.to_string(),
    })
}

/// Look up a project command by its full requested name.
pub fn lookup(project_root: &Path, name: &str) -> Result<Option<ProjectCommand>> {
    Ok(load(project_root)?
        .get(name)
        .map(|command_line| ProjectCommand {
            name: name.to_string(),
            command_line: command_line.clone(),
        }))
}

/// A command backed by a project-defined shell invocation.
#[derive(Debug, Clone)]
pub struct ProjectCommand {
    name: String,
    command_line: String,
}

impl ProjectCommand {
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    #[cfg(unix)]
    fn shell() -> (&'static str, &'static str) {
        ("sh", "-c")
    }

    #[cfg(windows)]
    fn shell() -> (&'static str, &'static str) {
        ("cmd", "/C")
    }
}

impl Command for ProjectCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "project-defined command"
    }

    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
        if inv.wants_help() {
            self.display_help(out);
            return Ok(());
        }

        out.running(&format!("Running project command: {}", self.name));
        let (shell, flag) = Self::shell();
        let mut command = ProcessCommand::new(shell);
        command
            .arg(flag)
            .arg(&self.command_line)
            .arg(&self.name)
            .current_dir(inv.project_root());
        // The command name fills `$0`; positionals arrive as `$1` onward.
        command.args(inv.arguments());

        let status = command.status().map_err(|e| {
            ConsoleError::execution_failed(format!(
                "failed to start `{}`: {e}",
                self.command_line
            ))
        })?;

        if !status.success() {
            return Err(ConsoleError::execution_failed(format!(
                "project command `{}` exited with {status}",
                self.name
            )));
        }
        out.success(&format!("Command `{}` completed.", self.name));
        Ok(())
    }
}
