//! Notification sink: where the form reports outcomes to the operator.

use crate::ui::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

pub trait NotificationSink {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Prints notifications to the terminal.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&mut self, severity: Severity, message: &str) {
        messages::notify(severity, message);
    }
}

/// Keeps every notification in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<(Severity, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|(s, _)| *s == severity).count()
    }

    pub fn last(&self) -> Option<&(Severity, String)> {
        self.entries.last()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.entries.push((severity, message.to_string()));
    }
}
