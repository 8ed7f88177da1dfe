//! Visual theme for console messages.

use console::Style;

use crate::ui::MessageKind;

/// Check whether colored output should be used.
///
/// Honors the `NO_COLOR` convention (set by `--no-color` at the entry point).
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Fixed color mapping for each message kind.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Default messages (white).
    pub default: Style,
    /// Informational messages (blue).
    pub info: Style,
    /// Success messages (green).
    pub success: Style,
    /// Warnings (yellow).
    pub warning: Style,
    /// Errors (red).
    pub error: Style,
    /// Loading/progress messages (cyan).
    pub loading: Style,
    /// Running-state messages (magenta).
    pub running: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// The standard colored theme.
    pub fn new() -> Self {
        Self {
            default: Style::new().white().bold(),
            info: Style::new().blue().bold(),
            success: Style::new().green().bold(),
            warning: Style::new().yellow().bold(),
            error: Style::new().red().bold(),
            loading: Style::new().cyan().bold(),
            running: Style::new().magenta().bold(),
        }
    }

    /// A theme without colors (for non-TTY or `--no-color`).
    pub fn plain() -> Self {
        Self {
            default: Style::new(),
            info: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            loading: Style::new(),
            running: Style::new(),
        }
    }

    /// Style for a message kind.
    pub fn style_for(&self, kind: MessageKind) -> &Style {
        match kind {
            MessageKind::Default => &self.default,
            MessageKind::Info => &self.info,
            MessageKind::Success => &self.success,
            MessageKind::Warning => &self.warning,
            MessageKind::Error => &self.error,
            MessageKind::Loading => &self.loading,
            MessageKind::Running => &self.running,
        }
    }

    /// Apply the kind's style to a message.
    pub fn format(&self, kind: MessageKind, message: &str) -> String {
        format!("{}", self.style_for(kind).apply_to(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert_eq!(theme.format(MessageKind::Error, "boom"), "boom");
        assert_eq!(theme.format(MessageKind::Success, "done"), "done");
    }

    #[test]
    fn every_kind_has_a_style() {
        let theme = Theme::new();
        for kind in [
            MessageKind::Default,
            MessageKind::Info,
            MessageKind::Success,
            MessageKind::Warning,
            MessageKind::Error,
            MessageKind::Loading,
            MessageKind::Running,
        ] {
            // Just exercise the mapping; styling depends on terminal detection.
            let _ = theme.format(kind, "msg");
        }
    }
}
