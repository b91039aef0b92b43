//! Short-lived notification events.
//!
//! Command handlers push notices while they work and the CLI drains and
//! prints them at the end, so user-facing messages are never embedded in
//! application state.

use std::collections::VecDeque;

/// Severity of a notice, mapped to a theme color when printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// One dismissible user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: Level::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: Level::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: Level::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: Level::Error, text: text.into() }
    }
}

/// FIFO queue of pending notices.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Remove and return all pending notices in arrival order.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}
