use dioxus::prelude::*;
use shared_types::{FileName, LanguageMode};

use crate::session::BufferState;

#[component]
pub fn EditorPanel(
    file: Option<FileName>,
    content: String,
    mode: LanguageMode,
    enabled: bool,
    buffer: BufferState,
    on_input: Callback<String>,
    on_save: Callback<()>,
    on_reload: Callback<()>,
) -> Element {
    let can_save = matches!(&buffer, BufferState::Ready(_));
    let title = file
        .as_ref()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "No file open".to_string());

    rsx! {
        div {
            class: "editor-panel",
            style: "display: flex; flex-direction: column; min-width: 0; border-right: 1px solid var(--border-color, #374151);",

            div {
                style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--border-color, #374151); flex-shrink: 0;",
                span { style: "flex: 1; font-size: 0.8125rem; font-weight: 500;", "{title}" }
                if file.is_some() {
                    span { class: "mode-badge", "{mode.label()}" }
                }
                button {
                    class: "wb-button",
                    disabled: file.is_none(),
                    onclick: move |_| on_reload.call(()),
                    "Reload"
                }
                button {
                    class: "wb-button primary",
                    disabled: !can_save,
                    onclick: move |_| on_save.call(()),
                    "Save"
                }
            }

            if let BufferState::Failed { message, .. } = &buffer {
                div {
                    style: "padding: 0.5rem 0.75rem; font-size: 0.75rem; color: var(--danger-text, #ef4444); background: var(--danger-bg-subtle, rgba(239, 68, 68, 0.08));",
                    "{message}"
                }
            }

            textarea {
                class: "editor-textarea",
                spellcheck: "false",
                value: "{content}",
                disabled: !enabled,
                oninput: move |e: FormEvent| on_input.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.modifiers().ctrl() && e.key() == Key::Character("s".to_string()) {
                        e.prevent_default();
                        on_save.call(());
                    }
                },
            }
        }
    }
}
