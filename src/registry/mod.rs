//! Command registry and name resolution.
//!
//! Resolution order (first match wins):
//! 1. Built-in table, keyed by the primary segment of the requested name,
//!    with the entry's sub-command vocabulary validating the full name
//! 2. Project table (`.anvil/commands.yml`), looked up verbatim with no
//!    sub-command validation
//!
//! A name absent from both tables is [`ConsoleError::CommandNotFound`]; no
//! command instance is ever constructed on that path.

pub mod builtin;
pub mod project;

use std::path::Path;

pub use builtin::CommandSpec;
pub use project::ProjectCommand;

use crate::error::{ConsoleError, Result};

/// The primary segment of a command name: everything before the first `:`.
pub fn primary_name(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}

/// Whether a requested name resolves to a built-in command, including
/// sub-command validation against the entry's declared vocabulary.
pub fn is_builtin(name: &str) -> bool {
    builtin::get(primary_name(name)).is_some_and(|spec| spec.accepts(name))
}

/// Outcome of a successful resolution.
#[derive(Debug)]
pub enum Resolution {
    Builtin(&'static CommandSpec),
    Project(ProjectCommand),
}

/// Resolve a requested command name against both tables.
pub fn resolve(requested: &str, project_root: &Path) -> Result<Resolution> {
    if let Some(spec) = builtin::get(primary_name(requested)) {
        if spec.accepts(requested) {
            tracing::debug!(command = requested, "resolved to built-in command");
            return Ok(Resolution::Builtin(spec));
        }
    }

    if let Some(command) = project::lookup(project_root, requested)? {
        tracing::debug!(command = requested, "resolved to project command");
        return Ok(Resolution::Project(command));
    }

    Err(ConsoleError::command_not_found(requested))
}
