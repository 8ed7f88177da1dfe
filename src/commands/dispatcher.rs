//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`Invocation`] carrying the parsed state of a single call
//! - [`execute`], the uniform fault boundary
//! - [`Dispatcher`] for resolving and running a requested command

use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::{CommandFailure, Result};
use crate::opts::{help, scan, OptionSchema, OptionValue, ParsedOptions};
use crate::registry::{self, Resolution};
use crate::ui::ConsoleOutput;

/// Trait for command implementations.
///
/// A command declares its name, description, and option schema; the
/// dispatcher scans arguments against that schema and hands the command a
/// fresh [`Invocation`] for each call.
pub trait Command {
    /// Declared command name.
    fn name(&self) -> &str;

    /// One-line description shown in help output.
    fn description(&self) -> &str;

    /// Option schema. Defaults to the shared base (`--help`/`-h`).
    fn options(&self) -> OptionSchema {
        OptionSchema::base()
    }

    /// Execute the command's logic. Any error is normalized by [`execute`].
    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()>;

    /// Print this command's help text.
    fn display_help(&self, out: &mut dyn ConsoleOutput) {
        out.message(&help::render(self.name(), self.description(), &self.options()));
    }
}

/// Parsed state of a single command invocation.
///
/// Created fresh per invocation and discarded afterwards; parsed options
/// are never reused across calls.
#[derive(Debug)]
pub struct Invocation {
    context: Context,
    project_root: PathBuf,
    schema: OptionSchema,
    options: ParsedOptions,
    positionals: Vec<String>,
}

impl Invocation {
    /// Scan the context's raw arguments against a command's schema.
    pub fn parse(context: Context, schema: OptionSchema, project_root: PathBuf) -> Self {
        let outcome = scan::scan(context.args(), &schema);
        tracing::debug!(
            command = context.command(),
            options = outcome.options.len(),
            positionals = outcome.positionals.len(),
            "parsed arguments"
        );
        Self {
            context,
            project_root,
            schema,
            options: outcome.options,
            positionals: outcome.positionals,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Look up an option by long or short key.
    ///
    /// Falls back to the counterpart key via the schema when the requested
    /// key is not directly present.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key).or_else(|| {
            self.schema
                .alias_of(key)
                .and_then(|alias| self.options.get(&alias))
        })
    }

    /// Truthiness of an option (false when absent).
    pub fn flag(&self, key: &str) -> bool {
        self.option(key).is_some_and(OptionValue::as_bool)
    }

    /// Textual value of an option, if one was supplied.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.option(key).and_then(OptionValue::as_str)
    }

    /// Positional argument at a 0-based index.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// All positional arguments in command-line order.
    pub fn arguments(&self) -> &[String] {
        &self.positionals
    }

    /// Whether `--help`/`-h` was requested.
    pub fn wants_help(&self) -> bool {
        self.flag("help")
    }
}

/// Run a command under the uniform fault boundary.
///
/// Every fault raised by `run()` results in exactly one error-level console
/// message and one normalized [`CommandFailure`]; absence of an error is
/// the only success signal.
pub fn execute(
    command: &dyn Command,
    inv: &Invocation,
    out: &mut dyn ConsoleOutput,
) -> std::result::Result<(), CommandFailure> {
    tracing::debug!(command = command.name(), "running command");
    match command.run(inv, out) {
        Ok(()) => {
            tracing::debug!(command = command.name(), "command succeeded");
            Ok(())
        }
        Err(err) => {
            out.error(&err.to_string());
            tracing::debug!(command = command.name(), code = err.code(), "command faulted");
            Err(CommandFailure::new(command.name(), err))
        }
    }
}

/// Resolves requested command names and executes them.
pub struct Dispatcher {
    project_root: PathBuf,
}

impl Dispatcher {
    /// Create a dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve, construct, parse, and execute one command.
    ///
    /// Resolution happens strictly before construction: an unknown name
    /// reports `CommandNotFound` without ever building a command.
    pub fn dispatch(
        &self,
        context: Context,
        out: &mut dyn ConsoleOutput,
    ) -> std::result::Result<(), CommandFailure> {
        let requested = context.command().to_string();
        let command: Box<dyn Command> = match registry::resolve(&requested, &self.project_root) {
            Ok(Resolution::Builtin(spec)) => spec.build(),
            Ok(Resolution::Project(project_command)) => Box::new(project_command),
            Err(err) => {
                out.error(&err.to_string());
                return Err(CommandFailure::new(requested, err));
            }
        };

        let inv = Invocation::parse(context, command.options(), self.project_root.clone());
        execute(command.as_ref(), &inv, out)
    }
}
