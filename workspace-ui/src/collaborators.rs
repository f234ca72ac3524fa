//! Capability interfaces the workbench drives
//!
//! Each component receives the collaborators it needs at construction time.
//! The Dioxus shell provides signal-backed implementations (see `surfaces`).

use chrono::{DateTime, Utc};
use shared_types::LanguageMode;

/// Text editor widget holding the single active file buffer
pub trait Editor {
    fn set_content(&self, content: &str);
    fn content(&self) -> String;
    fn set_mode(&self, mode: LanguageMode);
    /// Disabled editors must not accept edits
    fn set_enabled(&self, enabled: bool);
}

/// Anything that can display a complete HTML document
pub trait PreviewSurface {
    fn render(&self, document: &str);
}

/// Free-text prompt input for AI-driven rewrites
pub trait PromptField {
    fn text(&self) -> String;
    fn clear(&self);
}

/// Sink for user-visible messages
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }

    /// `HH:MM:SS` stamp for the status bar
    pub fn time_label(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}
