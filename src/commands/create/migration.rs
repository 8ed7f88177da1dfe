//! `create:migration` scaffold.

use chrono::Local;

use crate::commands::Invocation;
use crate::config::Config;
use crate::error::{ConsoleError, Result};
use crate::scaffold;
use crate::ui::ConsoleOutput;

/// Write a timestamped migration file into the configured migration path.
pub(super) fn scaffold(inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
    let name = super::required_name(inv)?;
    out.message(&format!("Creating migration: {name}"));

    let root = inv.project_root();
    let config = Config::load_or_default(root)?;
    let dir = config
        .migration_path(root)
        .ok_or_else(|| ConsoleError::invalid_argument("migration path is not configured"))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let file_name = format!("migration_{timestamp}_{name}.sql");
    let path = dir.join(&file_name);

    let content = scaffold::render(
        "migration.stub",
        &[("name", name), ("timestamp", &timestamp)],
    )?;
    scaffold::write_new(&path, &content)?;

    out.success(&format!("Migration file created: {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::CreateCommand;
    use crate::commands::{Command, Invocation};
    use crate::context::Context;
    use crate::error::ConsoleError;
    use crate::ui::MockOutput;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".anvil");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "migration:\n  path: migrations\n").unwrap();
        temp
    }

    fn invoke(args: &[&str], root: &std::path::Path) -> (crate::error::Result<()>, MockOutput) {
        let mut out = MockOutput::new();
        let context = Context::new(
            "create:migration",
            args.iter().map(|s| s.to_string()).collect(),
        );
        let inv = Invocation::parse(context, CreateCommand.options(), root.to_path_buf());
        let result = CreateCommand.run(&inv, &mut out);
        (result, out)
    }

    #[test]
    fn creates_timestamped_sql_file() {
        let temp = project();
        let (result, out) = invoke(&["add_users"], temp.path());
        result.unwrap();
        assert!(out.successes()[0].contains("Migration file created"));

        let entries: Vec<_> = fs::read_dir(temp.path().join("migrations"))
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(entries.len(), 1);
        let file_name = entries[0].file_name().into_string().unwrap();
        assert!(file_name.starts_with("migration_"));
        assert!(file_name.ends_with("_add_users.sql"));

        let content = fs::read_to_string(entries[0].path()).unwrap();
        assert!(content.contains("add_users"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn unconfigured_path_is_invalid_argument() {
        let temp = TempDir::new().unwrap();
        let (result, _) = invoke(&["add_users"], temp.path());
        assert!(matches!(
            result.unwrap_err(),
            ConsoleError::InvalidArgument { .. }
        ));
    }
}
