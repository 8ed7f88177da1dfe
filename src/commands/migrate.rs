//! Migrate command: applies pending migration files and records them in
//! the project ledger. `--rollback` undoes the most recent entry.
//!
//! Applying a migration means recording it as applied; executing SQL
//! against a database is the host application's concern.

use std::fs;
use std::path::Path;

use crate::commands::{Command, Invocation};
use crate::config::Config;
use crate::error::{ConsoleError, Result};
use crate::opts::{OptionDef, OptionSchema};
use crate::state::Ledger;
use crate::ui::ConsoleOutput;

pub struct MigrateCommand;

impl MigrateCommand {
    fn migrate(dir: &Path, root: &Path, out: &mut dyn ConsoleOutput) -> Result<()> {
        out.loading("Running migrations...");
        if !dir.is_dir() {
            return Err(ConsoleError::execution_failed(format!(
                "migration path does not exist: {}",
                dir.display()
            )));
        }

        let mut files: Vec<String> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "sql"))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        files.sort();

        if files.is_empty() {
            out.warning(&format!(
                "No migration files found in {}",
                dir.display()
            ));
            return Ok(());
        }

        let mut ledger = Ledger::load(root)?;
        let mut applied = 0;
        for file in files {
            if ledger.is_applied(&file) {
                continue;
            }
            out.info(&format!("Applying migration: {file}"));
            ledger.record(file);
            applied += 1;
        }

        if applied == 0 {
            out.warning("No pending migrations.");
            return Ok(());
        }

        ledger.save(root)?;
        out.success(&format!(
            "Migrations completed successfully ({applied} applied)."
        ));
        Ok(())
    }

    fn rollback(root: &Path, out: &mut dyn ConsoleOutput) -> Result<()> {
        out.loading("Running rollback...");
        let mut ledger = Ledger::load(root)?;
        match ledger.rollback() {
            Some(entry) => {
                ledger.save(root)?;
                out.info(&format!("Rolling back migration: {}", entry.migration));
                out.success("Rollback completed successfully.");
                Ok(())
            }
            None => {
                out.warning("No applied migrations to roll back.");
                Ok(())
            }
        }
    }
}

impl Command for MigrateCommand {
    fn name(&self) -> &str {
        "migrate"
    }

    fn description(&self) -> &str {
        "Run database migrations"
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::base().with(
            OptionDef::flag("rollback", "Roll back the most recently applied migration")
                .short('r'),
        )
    }

    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
        if inv.wants_help() {
            self.display_help(out);
            return Ok(());
        }

        let root = inv.project_root();
        if inv.flag("rollback") {
            return Self::rollback(root, out);
        }

        let config = Config::load_or_default(root)?;
        let dir = config
            .migration_path(root)
            .ok_or_else(|| ConsoleError::invalid_argument("migration path is not configured"))?;
        Self::migrate(&dir, root, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::ui::MockOutput;
    use tempfile::TempDir;

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".anvil");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn invoke(args: &[&str], root: &Path) -> (Result<()>, MockOutput) {
        let mut out = MockOutput::new();
        let context = Context::new("migrate", args.iter().map(|s| s.to_string()).collect());
        let inv = Invocation::parse(context, MigrateCommand.options(), root.to_path_buf());
        let result = MigrateCommand.run(&inv, &mut out);
        (result, out)
    }

    #[test]
    fn unconfigured_migration_path_is_invalid_argument() {
        let temp = TempDir::new().unwrap();
        let (result, _) = invoke(&[], temp.path());
        assert!(matches!(
            result.unwrap_err(),
            ConsoleError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn missing_migration_directory_is_execution_failure() {
        let temp = project("migration:\n  path: migrations\n");
        let (result, _) = invoke(&[], temp.path());
        assert!(matches!(
            result.unwrap_err(),
            ConsoleError::ExecutionFailed { .. }
        ));
    }

    #[test]
    fn applies_pending_migrations_in_name_order() {
        let temp = project("migration:\n  path: migrations\n");
        let dir = temp.path().join("migrations");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("002_posts.sql"), "-- posts").unwrap();
        fs::write(dir.join("001_users.sql"), "-- users").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let (result, out) = invoke(&[], temp.path());
        result.unwrap();
        assert_eq!(
            out.infos(),
            [
                "Applying migration: 001_users.sql",
                "Applying migration: 002_posts.sql"
            ]
        );
        assert!(out.successes()[0].contains("2 applied"));

        let ledger = Ledger::load(temp.path()).unwrap();
        assert!(ledger.is_applied("001_users.sql"));
        assert!(!ledger.is_applied("notes.txt"));
    }

    #[test]
    fn second_run_finds_nothing_pending() {
        let temp = project("migration:\n  path: migrations\n");
        let dir = temp.path().join("migrations");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("001_users.sql"), "-- users").unwrap();

        invoke(&[], temp.path()).0.unwrap();
        let (result, out) = invoke(&[], temp.path());
        result.unwrap();
        assert!(out.warnings()[0].contains("No pending migrations"));
    }

    #[test]
    fn rollback_pops_the_most_recent_migration() {
        let temp = project("migration:\n  path: migrations\n");
        let dir = temp.path().join("migrations");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("001_users.sql"), "-- users").unwrap();
        invoke(&[], temp.path()).0.unwrap();

        let (result, out) = invoke(&["--rollback"], temp.path());
        result.unwrap();
        assert!(out.infos()[0].contains("001_users.sql"));
        assert!(!Ledger::load(temp.path()).unwrap().is_applied("001_users.sql"));
    }

    #[test]
    fn rollback_short_form_works_without_config() {
        let temp = TempDir::new().unwrap();
        let (result, out) = invoke(&["-r"], temp.path());
        result.unwrap();
        assert!(out.warnings()[0].contains("No applied migrations"));
    }

    #[test]
    fn empty_migration_directory_warns() {
        let temp = project("migration:\n  path: migrations\n");
        fs::create_dir_all(temp.path().join("migrations")).unwrap();
        let (result, out) = invoke(&[], temp.path());
        result.unwrap();
        assert!(out.warnings()[0].contains("No migration files found"));
    }
}
