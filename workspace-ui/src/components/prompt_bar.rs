use dioxus::prelude::*;

#[component]
pub fn PromptBar(
    text: String,
    enabled: bool,
    busy: bool,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> Element {
    let can_submit = enabled && !busy && !text.trim().is_empty();

    rsx! {
        div {
            class: "prompt-bar",
            style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1rem; background: var(--promptbar-bg, #111827); border-top: 1px solid var(--border-color, #374151); flex-shrink: 0;",

            input {
                class: "prompt-input",
                style: "flex: 1; padding: 0.5rem 1rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); font-size: 0.875rem; outline: none; min-width: 0;",
                placeholder: "Describe the changes you want to make to this file...",
                value: "{text}",
                disabled: !enabled || busy,
                oninput: move |e| on_input.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter && can_submit {
                        on_submit.call(());
                    }
                }
            }

            button {
                class: "wb-button primary",
                disabled: !can_submit,
                onclick: move |_| on_submit.call(()),
                if busy { "Updating..." } else { "Update" }
            }
        }
    }
}
