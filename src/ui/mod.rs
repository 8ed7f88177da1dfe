//! Console output components.
//!
//! This module provides:
//! - [`ConsoleOutput`] trait for message emission
//! - [`TerminalOutput`] for real terminal usage
//! - [`MockOutput`] for capturing messages in tests
//! - [`Theme`] mapping message kinds to fixed terminal colors
//!
//! # Example
//!
//! ```
//! use anvil::ui::{ConsoleOutput, MockOutput};
//!
//! let mut out = MockOutput::new();
//! out.info("Running migrations...");
//! out.success("Done!");
//! assert_eq!(out.successes(), ["Done!"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockOutput;
pub use terminal::TerminalOutput;
pub use theme::{should_use_colors, Theme};

/// Classification of a user-facing message.
///
/// Each kind maps to a fixed terminal color (see [`Theme`]). This is an
/// output concern only; it is not part of the parsing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Default,
    Info,
    Success,
    Warning,
    Error,
    Loading,
    Running,
}

/// Sink for user-facing console messages.
///
/// Commands emit all output through this trait, which allows capturing
/// messages in tests via [`MockOutput`].
pub trait ConsoleOutput {
    /// Emit a message of the given kind.
    fn show(&mut self, kind: MessageKind, message: &str);

    /// Whether the console is attached to an interactive terminal.
    fn is_interactive(&self) -> bool {
        false
    }

    fn message(&mut self, message: &str) {
        self.show(MessageKind::Default, message);
    }

    fn info(&mut self, message: &str) {
        self.show(MessageKind::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.show(MessageKind::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.show(MessageKind::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.show(MessageKind::Error, message);
    }

    fn loading(&mut self, message: &str) {
        self.show(MessageKind::Loading, message);
    }

    fn running(&mut self, message: &str) {
        self.show(MessageKind::Running, message);
    }
}
