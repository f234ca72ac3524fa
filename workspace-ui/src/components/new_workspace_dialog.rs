use dioxus::prelude::*;

#[component]
pub fn NewWorkspaceDialog(
    busy: bool,
    on_create: Callback<(String, String)>,
    on_cancel: Callback<()>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut prompt = use_signal(String::new);

    rsx! {
        div {
            class: "dialog-backdrop",
            div {
                class: "dialog",
                h3 { style: "margin: 0; font-size: 1rem;", "New Workspace" }
                input {
                    placeholder: "Workspace name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                textarea {
                    rows: "5",
                    placeholder: "Describe the site to generate...",
                    value: "{prompt}",
                    oninput: move |e| prompt.set(e.value()),
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 0.5rem;",
                    button {
                        class: "wb-button",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "wb-button primary",
                        disabled: busy,
                        onclick: move |_| on_create.call((name(), prompt())),
                        if busy { "Generating..." } else { "Create" }
                    }
                }
            }
        }
    }
}
