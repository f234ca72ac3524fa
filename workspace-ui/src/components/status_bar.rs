use dioxus::prelude::*;

use crate::collaborators::{Notice, NoticeLevel};

#[component]
pub fn StatusBar(notices: Vec<Notice>) -> Element {
    let Some(latest) = notices.last() else {
        return rsx! {
            div {
                class: "status-bar",
                style: "padding: 0.25rem 1rem; font-size: 0.75rem; color: var(--text-muted, #6b7280); border-top: 1px solid var(--border-color, #374151);",
                "Ready"
            }
        };
    };

    let color = match latest.level {
        NoticeLevel::Info => "var(--text-secondary, #9ca3af)",
        NoticeLevel::Success => "var(--success-bg, #10b981)",
        NoticeLevel::Error => "var(--danger-text, #ef4444)",
    };

    rsx! {
        div {
            class: "status-bar",
            style: "display: flex; gap: 0.75rem; padding: 0.25rem 1rem; font-size: 0.75rem; border-top: 1px solid var(--border-color, #374151);",
            span { style: "color: var(--text-muted, #6b7280);", "{latest.time_label()}" }
            span { style: "color: {color};", "{latest.message}" }
        }
    }
}
