//! `create:module` scaffold.

use crate::commands::Invocation;
use crate::error::{ConsoleError, Result};
use crate::scaffold;
use crate::ui::ConsoleOutput;

/// Create a module directory with a starter `mod.rs` under `src/modules/`.
pub(super) fn scaffold(inv: &Invocation, out: &mut dyn ConsoleOutput) -> Result<()> {
    let name = super::required_name(inv)?;
    out.message(&format!("Creating module: {name}"));

    let module_dir = inv
        .project_root()
        .join("src")
        .join("modules")
        .join(name);
    if module_dir.exists() {
        return Err(ConsoleError::execution_failed(format!(
            "module already exists: {name}"
        )));
    }

    let content = scaffold::render(
        "module.stub",
        &[("name", name), ("module", &super::pascal_case(name))],
    )?;
    scaffold::write_new(&module_dir.join("mod.rs"), &content)?;

    out.success(&format!(
        "Module {name} created at {}",
        module_dir.display()
    ));
    Ok(())
}
