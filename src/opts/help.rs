//! Help text rendering.
//!
//! Pure formatting over a command's name, description, and option schema.
//! The output is deterministic: options appear in declaration order.

use std::fmt::Write;

use crate::opts::schema::OptionSchema;

/// Render the help text for a command.
pub fn render(name: &str, description: &str, schema: &OptionSchema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Command: {name}");
    let _ = writeln!(out, "Description: {description}");
    let _ = writeln!(out, "Usage: anvil {name} [options] [arguments]");
    let _ = writeln!(out, "Options:");
    for def in schema.defs() {
        let mut line = String::from("  ");
        if let Some(short) = def.short_name() {
            let _ = write!(line, "-{short}, ");
        }
        let _ = write!(line, "--{}", def.long());
        if def.takes_value() {
            let _ = write!(line, "=<value>");
        }
        let _ = writeln!(out, "{line}\t{}", def.help());
    }
    out
}
