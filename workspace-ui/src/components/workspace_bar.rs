use dioxus::prelude::*;
use shared_types::WorkspaceId;

#[component]
pub fn WorkspaceBar(
    workspaces: Vec<WorkspaceId>,
    selected: Option<WorkspaceId>,
    description: Option<String>,
    on_select: Callback<Option<WorkspaceId>>,
    on_refresh: Callback<()>,
    on_new: Callback<()>,
) -> Element {
    let selected_value = selected
        .as_ref()
        .map(|ws| ws.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "workspace-bar",
            style: "display: flex; align-items: center; gap: 0.75rem; padding: 0.625rem 1rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); flex-shrink: 0;",

            span { style: "font-weight: 600; font-size: 0.9375rem;", "Codeforge" }

            select {
                style: "padding: 0.375rem 0.5rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); font-size: 0.8125rem; min-width: 200px;",
                value: "{selected_value}",
                onchange: move |e| {
                    let value = e.value();
                    if value.is_empty() {
                        on_select.call(None);
                    } else {
                        on_select.call(Some(WorkspaceId::new(value)));
                    }
                },
                option { value: "", "Select a workspace" }
                for ws in workspaces.iter() {
                    option {
                        key: "{ws}",
                        value: "{ws}",
                        selected: selected.as_ref() == Some(ws),
                        "{ws}"
                    }
                }
            }

            button {
                class: "wb-button",
                title: "Refresh workspace list",
                onclick: move |_| on_refresh.call(()),
                "↻"
            }
            button {
                class: "wb-button primary",
                onclick: move |_| on_new.call(()),
                "New Workspace"
            }

            if let Some(text) = description {
                span {
                    style: "flex: 1; min-width: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; font-size: 0.8125rem; color: var(--text-secondary, #9ca3af);",
                    title: "{text}",
                    "{text}"
                }
            }
        }
    }
}
