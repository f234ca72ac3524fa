//! Signal-backed collaborators for the Dioxus shell
//!
//! Writes go through copies of the (Copy) signal handles so the trait
//! methods can take `&self`.

use dioxus::prelude::*;
use shared_types::LanguageMode;

use crate::collaborators::{Editor, Notice, Notifier, PreviewSurface, PromptField};

/// Notices kept for the status bar
const MAX_NOTICES: usize = 5;

pub(crate) fn set_signal<T: 'static>(signal: Signal<T>, value: T) {
    let mut signal = signal;
    signal.set(value);
}

#[derive(Clone, Copy)]
pub struct SignalEditor {
    pub content: Signal<String>,
    pub mode: Signal<LanguageMode>,
    pub enabled: Signal<bool>,
}

impl Editor for SignalEditor {
    fn set_content(&self, content: &str) {
        set_signal(self.content, content.to_string());
    }

    fn content(&self) -> String {
        self.content.peek().clone()
    }

    fn set_mode(&self, mode: LanguageMode) {
        set_signal(self.mode, mode);
    }

    fn set_enabled(&self, enabled: bool) {
        set_signal(self.enabled, enabled);
    }
}

#[derive(Clone, Copy)]
pub struct SignalPreview {
    pub document: Signal<String>,
}

impl PreviewSurface for SignalPreview {
    fn render(&self, document: &str) {
        set_signal(self.document, document.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct SignalPrompt {
    pub text: Signal<String>,
}

impl PromptField for SignalPrompt {
    fn text(&self) -> String {
        self.text.peek().clone()
    }

    fn clear(&self) {
        set_signal(self.text, String::new());
    }
}

#[derive(Clone, Copy)]
pub struct SignalNotifier {
    pub notices: Signal<Vec<Notice>>,
}

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        let mut notices = self.notices;
        let mut list = notices.write();
        list.push(notice);
        let overflow = list.len().saturating_sub(MAX_NOTICES);
        list.drain(..overflow);
    }
}
