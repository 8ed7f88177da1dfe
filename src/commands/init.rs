//! Init command: writes starter project files.

use crate::commands::{Command, Invocation};
use crate::config::Config;
use crate::error::{ConsoleError, Result};
use crate::opts::{OptionDef, OptionSchema};
use crate::scaffold;
use crate::ui::ConsoleOutput;

/// Environments accepted by `--env`.
pub const VALID_ENVS: &[&str] = &["development", "testing", "staging", "production"];

/// Initializes a project: config file plus a console runner script.
pub struct InitCommand;

impl Command for InitCommand {
    fn name(&self) -> &str {
        "init"
    }

    fn description(&self) -> &str {
        "Initialize a project for the console runner"
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::base()
            .with(
                OptionDef::value("env", "The environment to initialize (e.g. development, production)")
                    .short('e')
                    .default_value("development"),
            )
            .with(
                OptionDef::flag("suppress-errors", "Suppress error output in the generated project")
                    .short('s')
                    .default_value(false),
            )
    }

    fn run(&self, inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
        if inv.wants_help() {
            self.display_help(out);
            return Ok(());
        }

        // The default fills this in; absence means a bare `-e` consumed no value.
        let env = inv
            .value("env")
            .ok_or_else(|| ConsoleError::invalid_argument("no environment specified"))?;
        if !VALID_ENVS.contains(&env) {
            return Err(ConsoleError::invalid_argument(format!(
                "invalid environment `{env}`; valid options are: {}",
                VALID_ENVS.join(", ")
            )));
        }

        out.info(&format!("Initializing project for environment: {env}"));

        let root = inv.project_root();
        let app_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app")
            .to_string();
        let suppress_errors = inv.flag("suppress-errors").to_string();

        let config = scaffold::render(
            "config.stub",
            &[
                ("app_name", &app_name),
                ("env", env),
                ("suppress_errors", &suppress_errors),
            ],
        )?;
        let config_path = Config::path_for(root);
        scaffold::write_new(&config_path, &config)?;
        out.message(&format!("Created {}", config_path.display()));

        let runner = scaffold::render("runner.stub", &[("app_name", &app_name)])?;
        let runner_path = root.join("console");
        scaffold::write_new(&runner_path, &runner)?;
        out.message(&format!("Created {}", runner_path.display()));

        out.success(&format!(
            "Project initialized successfully for environment: {env}"
        ));
        out.info("Run `anvil migrate` to apply migrations.");
        out.info("Run `anvil create:migration <name>` to scaffold a migration.");
        Ok(())
    }
}
