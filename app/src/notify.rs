//! Transient user-facing notices (the toast equivalent).

use std::collections::VecDeque;

const MAX_NOTICES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A single notice: level, short title, human-readable detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub detail: String,
}

/// Bounded queue of notices, newest first.
///
/// No failure routed through here is fatal; the queue just grows at the
/// front and drops at the back.
#[derive(Default)]
pub struct Notifier {
    entries: VecDeque<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, title: impl Into<String>, detail: impl Into<String>) {
        self.push(NoticeLevel::Info, title, detail);
    }

    pub fn error(&mut self, title: impl Into<String>, detail: impl Into<String>) {
        self.push(NoticeLevel::Error, title, detail);
    }

    /// Newest notice, if any.
    pub fn latest(&self) -> Option<&Notice> {
        self.entries.front()
    }

    /// All retained notices, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, level: NoticeLevel, title: impl Into<String>, detail: impl Into<String>) {
        self.entries.push_front(Notice {
            level,
            title: title.into(),
            detail: detail.into(),
        });
        self.entries.truncate(MAX_NOTICES);
    }
}
