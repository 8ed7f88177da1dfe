//! Scaffold template rendering.
//!
//! Templates are embedded at compile time from `templates/` and rendered
//! with simple `{{key}}` substitution. Generated files are never allowed
//! to overwrite existing ones.

use std::fs;
use std::path::Path;

use include_dir::{include_dir, Dir};

use crate::error::{ConsoleError, Result};

/// Embedded scaffold templates.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Render an embedded template, substituting `{{key}}` placeholders.
pub fn render(name: &str, vars: &[(&str, &str)]) -> Result<String> {
    let file = TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| ConsoleError::TemplateMissing {
            name: name.to_string(),
        })?;
    let content = file
        .contents_utf8()
        .ok_or_else(|| ConsoleError::TemplateMissing {
            name: name.to_string(),
        })?;

    let mut rendered = content.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    Ok(rendered)
}

/// Write a new file, creating parent directories and refusing to overwrite.
pub fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Err(ConsoleError::FileExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
