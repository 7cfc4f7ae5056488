//! Queued, non-blocking notifications.
//!
//! Replaces blocking alert/confirm dialogs: UI code pushes a severity-tagged
//! message and moves on, the surface drains and displays them when it
//! pleases. No I/O, no timers — dismissal policy belongs to the surface.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// FIFO queue of pending notices.
#[derive(Debug, Default)]
pub struct Notifier {
    queue: VecDeque<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.queue.push_back(Notice {
            severity,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// Dismiss and return the oldest pending notice.
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.queue.pop_front()
    }

    /// Drain all pending notices in arrival order.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
