//! Terminal output sink.

use crate::ui::theme::{should_use_colors, Theme};
use crate::ui::{ConsoleOutput, MessageKind};

/// Console output writing styled lines to stdout/stderr.
///
/// Errors go to stderr; everything else goes to stdout. Quiet mode
/// suppresses default, info, loading, and running messages.
#[derive(Debug)]
pub struct TerminalOutput {
    theme: Theme,
    quiet: bool,
}

impl TerminalOutput {
    /// Create a terminal sink, picking a colored or plain theme based on
    /// the `NO_COLOR` convention.
    pub fn new(quiet: bool) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme, quiet }
    }

    /// Create a terminal sink with an explicit theme.
    pub fn with_theme(theme: Theme, quiet: bool) -> Self {
        Self { theme, quiet }
    }

    fn suppressed(&self, kind: MessageKind) -> bool {
        self.quiet
            && matches!(
                kind,
                MessageKind::Default
                    | MessageKind::Info
                    | MessageKind::Loading
                    | MessageKind::Running
            )
    }
}

impl ConsoleOutput for TerminalOutput {
    fn show(&mut self, kind: MessageKind, message: &str) {
        if self.suppressed(kind) {
            return;
        }
        let line = self.theme.format(kind, message);
        if kind == MessageKind::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn is_interactive(&self) -> bool {
        console::user_attended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_chatter_but_not_results() {
        let out = TerminalOutput::with_theme(Theme::plain(), true);
        assert!(out.suppressed(MessageKind::Info));
        assert!(out.suppressed(MessageKind::Loading));
        assert!(out.suppressed(MessageKind::Running));
        assert!(out.suppressed(MessageKind::Default));
        assert!(!out.suppressed(MessageKind::Success));
        assert!(!out.suppressed(MessageKind::Warning));
        assert!(!out.suppressed(MessageKind::Error));
    }

    #[test]
    fn normal_mode_suppresses_nothing() {
        let out = TerminalOutput::with_theme(Theme::plain(), false);
        assert!(!out.suppressed(MessageKind::Info));
    }
}
