//! Built-in command table.
//!
//! Every framework command registers here explicitly with its primary name,
//! its accepted sub-command vocabulary, and a factory. The table is built
//! once on first lookup and cached for the life of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::commands::create::CreateCommand;
use crate::commands::init::InitCommand;
use crate::commands::migrate::MigrateCommand;
use crate::commands::run::RunCommand;
use crate::commands::welcome::WelcomeCommand;
use crate::commands::Command;

/// Registration entry for a built-in command.
#[derive(Debug)]
pub struct CommandSpec {
    name: &'static str,
    subcommands: &'static [&'static str],
    factory: fn() -> Box<dyn Command>,
}

impl CommandSpec {
    /// Primary name the entry is keyed by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Accepted sub-command vocabulary (empty for non-namespaced commands).
    pub fn subcommands(&self) -> &'static [&'static str] {
        self.subcommands
    }

    /// Construct a fresh command instance.
    pub fn build(&self) -> Box<dyn Command> {
        (self.factory)()
    }

    /// Whether the entry accepts a full requested name.
    ///
    /// The bare primary name always matches. A single colon-suffixed
    /// qualifier matches only when it is in the declared vocabulary; more
    /// than one colon never matches.
    pub fn accepts(&self, requested: &str) -> bool {
        match requested.split_once(':') {
            None => requested == self.name,
            Some((primary, action)) => {
                primary == self.name
                    && !action.contains(':')
                    && self.subcommands.contains(&action)
            }
        }
    }
}

static BUILTINS: OnceLock<HashMap<&'static str, CommandSpec>> = OnceLock::new();

fn register(
    table: &mut HashMap<&'static str, CommandSpec>,
    name: &'static str,
    subcommands: &'static [&'static str],
    factory: fn() -> Box<dyn Command>,
) {
    table.insert(
        name,
        CommandSpec {
            name,
            subcommands,
            factory,
        },
    );
}

/// The built-in table, initialized exactly once on first access.
pub fn table() -> &'static HashMap<&'static str, CommandSpec> {
    BUILTINS.get_or_init(|| {
        tracing::debug!("initializing built-in command table");
        let mut table = HashMap::new();
        register(&mut table, "run", &[], || Box::new(RunCommand));
        register(&mut table, "welcome", &[], || Box::new(WelcomeCommand));
        register(&mut table, "migrate", &[], || Box::new(MigrateCommand));
        register(
            &mut table,
            "create",
            crate::commands::create::SUBCOMMANDS,
            || Box::new(CreateCommand),
        );
        register(&mut table, "init", &[], || Box::new(InitCommand));
        table
    })
}

/// Look up a built-in entry by its primary name.
pub fn get(primary: &str) -> Option<&'static CommandSpec> {
    table().get(primary)
}

/// Sorted primary names of all built-in commands.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = table().keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_framework_commands() {
        for name in ["run", "welcome", "migrate", "create", "init"] {
            assert!(get(name).is_some(), "missing built-in: {name}");
        }
        assert!(get("bogus").is_none());
    }

    #[test]
    fn table_is_memoized() {
        let a: *const _ = table();
        let b: *const _ = table();
        assert_eq!(a, b);
    }

    #[test]
    fn plain_command_accepts_only_itself() {
        let spec = get("migrate").unwrap();
        assert!(spec.accepts("migrate"));
        assert!(!spec.accepts("migrate:up"));
        assert!(!spec.accepts("migrat"));
    }

    #[test]
    fn create_accepts_declared_vocabulary() {
        let spec = get("create").unwrap();
        assert!(spec.accepts("create"));
        assert!(spec.accepts("create:migration"));
        assert!(spec.accepts("create:module"));
        assert!(spec.accepts("create:command"));
        assert!(!spec.accepts("create:bogus"));
        assert!(!spec.accepts("create:migration:extra"));
    }

    #[test]
    fn names_are_sorted() {
        let names = names();
        assert_eq!(names, ["create", "init", "migrate", "run", "welcome"]);
    }
}
