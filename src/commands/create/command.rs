//! `create:command` scaffold.

use crate::commands::Invocation;
use crate::error::Result;
use crate::scaffold;
use crate::ui::ConsoleOutput;

/// Create a command source stub under `src/commands/`.
///
/// `-d`/`--description` sets the description baked into the stub.
pub(super) fn scaffold(inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
    let name = super::required_name(inv)?;
    out.message(&format!("Creating command: {name}"));

    let description = inv
        .value("description")
        .unwrap_or("Describe what the command does");
    let struct_name = format!("{}Command", super::pascal_case(name));
    let path = inv
        .project_root()
        .join("src")
        .join("commands")
        .join(format!("{name}.rs"));

    let content = scaffold::render(
        "command.stub",
        &[
            ("name", name),
            ("struct", &struct_name),
            ("description", description),
        ],
    )?;
    scaffold::write_new(&path, &content)?;

    out.success(&format!("Command file created: {}", path.display()));
    Ok(())
}
