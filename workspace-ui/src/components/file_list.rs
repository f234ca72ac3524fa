use dioxus::prelude::*;
use shared_types::FileName;

#[component]
pub fn FileList(
    files: Vec<FileName>,
    selected: Option<FileName>,
    has_workspace: bool,
    on_select: Callback<FileName>,
) -> Element {
    rsx! {
        div {
            class: "file-list",

            div {
                style: "padding: 0.5rem 0.75rem; font-size: 0.6875rem; text-transform: uppercase; letter-spacing: 0.05em; color: var(--text-muted, #6b7280);",
                "Files"
            }

            if !has_workspace {
                div {
                    style: "padding: 0.75rem; font-size: 0.8125rem; color: var(--text-muted, #6b7280);",
                    "No workspace selected"
                }
            } else if files.is_empty() {
                div {
                    style: "padding: 0.75rem; font-size: 0.8125rem; color: var(--text-muted, #6b7280);",
                    "No files in this workspace"
                }
            }

            for file in files.iter() {
                FileItem {
                    key: "{file}",
                    file: file.clone(),
                    is_active: selected.as_ref() == Some(file),
                    on_select,
                }
            }
        }
    }
}

#[component]
fn FileItem(file: FileName, is_active: bool, on_select: Callback<FileName>) -> Element {
    let label = file.mode().label();
    let target = file.clone();

    rsx! {
        div {
            class: if is_active { "file-item active" } else { "file-item" },
            onclick: move |_| on_select.call(target.clone()),
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{file}"
            }
            span { class: "mode-badge", "{label}" }
        }
    }
}
