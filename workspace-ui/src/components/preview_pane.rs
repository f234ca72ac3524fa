use dioxus::prelude::*;

#[component]
pub fn PreviewPane(document: String, on_refresh: Callback<()>) -> Element {
    rsx! {
        div {
            class: "preview-pane",
            style: "display: flex; flex-direction: column; min-width: 0;",

            div {
                style: "display: flex; align-items: center; padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--border-color, #374151); flex-shrink: 0;",
                span { style: "flex: 1; font-size: 0.8125rem; font-weight: 500;", "Preview" }
                button {
                    class: "wb-button",
                    title: "Refresh preview",
                    onclick: move |_| on_refresh.call(()),
                    "↻"
                }
            }

            iframe {
                class: "preview-frame",
                title: "Preview",
                "sandbox": "allow-scripts",
                srcdoc: "{document}",
            }
        }
    }
}
