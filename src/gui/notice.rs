//! Transient notices shown at the bottom of the window.

use egui::{Color32, RichText};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn color(self) -> Color32 {
        match self {
            NoticeLevel::Info => Color32::GRAY,
            NoticeLevel::Success => crate::charts::OK_COLOR,
            NoticeLevel::Error => crate::charts::WARNING_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// Short-lived status messages, newest last.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    lifetime: Duration,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            notices: Vec::new(),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) {
        self.notices.push(Notice {
            level,
            message: message.into(),
            expires_at: now + self.lifetime,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NoticeLevel::Success, message, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NoticeLevel::Error, message, now);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NoticeLevel::Info, message, now);
    }

    /// Drop expired notices.
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|n| n.expires_at > now);
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    /// Time until the earliest notice expires.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.notices
            .iter()
            .map(|n| n.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.notices.is_empty() {
            ui.label(RichText::new("Ready").size(11.0).color(Color32::GRAY));
            return;
        }
        for notice in &self.notices {
            ui.label(
                RichText::new(&notice.message)
                    .size(12.0)
                    .color(notice.level.color()),
            );
        }
    }
}
