//! Mock output sink for testing.
//!
//! `MockOutput` implements [`ConsoleOutput`] and captures every message
//! with its kind for later assertion.

use crate::ui::{ConsoleOutput, MessageKind};

/// Capturing output sink for tests.
#[derive(Debug, Default)]
pub struct MockOutput {
    records: Vec<(MessageKind, String)>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages in emission order.
    pub fn all(&self) -> &[(MessageKind, String)] {
        &self.records
    }

    /// Messages of one kind, in emission order.
    pub fn of_kind(&self, kind: MessageKind) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.of_kind(MessageKind::Default)
    }

    pub fn infos(&self) -> Vec<&str> {
        self.of_kind(MessageKind::Info)
    }

    pub fn successes(&self) -> Vec<&str> {
        self.of_kind(MessageKind::Success)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.of_kind(MessageKind::Warning)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.of_kind(MessageKind::Error)
    }

    /// Whether any captured message of the kind contains the needle.
    pub fn contains(&self, kind: MessageKind, needle: &str) -> bool {
        self.of_kind(kind).iter().any(|m| m.contains(needle))
    }
}

impl ConsoleOutput for MockOutput {
    fn show(&mut self, kind: MessageKind, message: &str) {
        self.records.push((kind, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_by_kind() {
        let mut out = MockOutput::new();
        out.info("starting");
        out.error("failed");
        out.error("failed again");
        assert_eq!(out.infos(), ["starting"]);
        assert_eq!(out.errors(), ["failed", "failed again"]);
        assert!(out.contains(MessageKind::Error, "again"));
        assert_eq!(out.all().len(), 3);
    }
}
