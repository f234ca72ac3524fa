use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use gloo_timers::future::TimeoutFuture;
use shared_types::{FileName, LanguageMode, WorkspaceId};

use crate::api::HttpBackend;
use crate::collaborators::Notice;
use crate::components::styles::WORKBENCH_STYLES;
use crate::components::{
    EditorPanel, FileList, NewWorkspaceDialog, PreviewPane, PromptBar, StatusBar, WorkspaceBar,
};
use crate::config::ClientConfig;
use crate::preview::NOTHING_SELECTED_DOCUMENT;
use crate::session::{BufferState, SessionEvent};
use crate::surfaces::{set_signal, SignalEditor, SignalNotifier, SignalPreview, SignalPrompt};
use crate::workbench::{Surfaces, Workbench};

#[component]
pub fn WorkbenchShell() -> Element {
    let editor_content = use_signal(String::new);
    let editor_mode = use_signal(|| LanguageMode::PlainText);
    let editor_enabled = use_signal(|| false);
    let preview_document = use_signal(|| NOTHING_SELECTED_DOCUMENT.to_string());
    let mut prompt_text = use_signal(String::new);
    let notices = use_signal(Vec::<Notice>::new);

    let workspaces = use_signal(Vec::<WorkspaceId>::new);
    let selected_workspace = use_signal(|| None::<WorkspaceId>);
    let files = use_signal(Vec::<FileName>::new);
    let selected_file = use_signal(|| None::<FileName>);
    let description = use_signal(|| None::<String>);
    let buffer = use_signal(BufferState::default);
    let mut mutation_busy = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut show_new_workspace = use_signal(|| false);

    let workbench = use_hook(|| {
        let config = ClientConfig::from_location();
        let backend = Rc::new(HttpBackend::new(config.api_base.clone()));
        let surfaces = Surfaces {
            editor: Rc::new(SignalEditor {
                content: editor_content,
                mode: editor_mode,
                enabled: editor_enabled,
            }),
            preview: Rc::new(SignalPreview {
                document: preview_document,
            }),
            prompt: Rc::new(SignalPrompt { text: prompt_text }),
            notifier: Rc::new(SignalNotifier { notices }),
        };
        let workbench = Workbench::new(config, backend, surfaces);

        workbench.session().subscribe(move |event| match event.clone() {
            SessionEvent::WorkspacesListed(list) => set_signal(workspaces, list),
            SessionEvent::WorkspaceChanged(ws) => set_signal(selected_workspace, ws),
            SessionEvent::FilesListed(list) => set_signal(files, list),
            SessionEvent::FileChanged(file) => set_signal(selected_file, file),
            SessionEvent::DescriptionChanged(text) => set_signal(description, text),
            SessionEvent::BufferChanged(state) => set_signal(buffer, state),
        });
        workbench
    });

    {
        let workbench = workbench.clone();
        use_effect(move || {
            let workbench = workbench.clone();
            spawn(async move {
                let _ = workbench.refresh_workspaces().await;
            });
        });
    }

    let on_select_workspace = {
        let workbench = workbench.clone();
        use_callback(move |ws: Option<WorkspaceId>| {
            let workbench = workbench.clone();
            match ws {
                Some(ws) => {
                    spawn(async move {
                        let _ = workbench.select_workspace(ws).await;
                    });
                }
                None => workbench.clear_workspace(),
            }
        })
    };

    let on_refresh_workspaces = {
        let workbench = workbench.clone();
        use_callback(move |_| {
            let workbench = workbench.clone();
            spawn(async move {
                let _ = workbench.refresh_workspaces().await;
            });
        })
    };

    let on_select_file = {
        let workbench = workbench.clone();
        use_callback(move |file: FileName| {
            let workbench = workbench.clone();
            spawn(async move {
                let _ = workbench.select_file(file).await;
            });
        })
    };

    // Editor edits recompose after a quiet window
    let on_edit = {
        let workbench = workbench.clone();
        use_callback(move |text: String| {
            set_signal(editor_content, text);
            let Some(ticket) = workbench.on_editor_change() else {
                return;
            };
            let workbench = workbench.clone();
            let delay = workbench.config().edit_debounce_ms;
            spawn(async move {
                TimeoutFuture::new(delay).await;
                if workbench.flush_edit(ticket).await.is_none() {
                    debug!("Edit superseded before flush");
                }
            });
        })
    };

    let on_save = {
        let workbench = workbench.clone();
        use_callback(move |_| {
            let workbench = workbench.clone();
            spawn(async move {
                let _ = workbench.save().await;
            });
        })
    };

    let on_reload = {
        let workbench = workbench.clone();
        use_callback(move |_| {
            let workbench = workbench.clone();
            spawn(async move {
                let _ = workbench.reload().await;
            });
        })
    };

    let on_refresh_preview = {
        let workbench = workbench.clone();
        use_callback(move |_| {
            let workbench = workbench.clone();
            spawn(async move {
                workbench.refresh_preview().await;
            });
        })
    };

    let on_submit_prompt = {
        let workbench = workbench.clone();
        use_callback(move |_| {
            let workbench = workbench.clone();
            spawn(async move {
                mutation_busy.set(true);
                let _ = workbench.submit_prompt().await;
                mutation_busy.set(false);
            });
        })
    };

    let on_create_workspace = {
        let workbench = workbench.clone();
        use_callback(move |(name, prompt): (String, String)| {
            let workbench = workbench.clone();
            spawn(async move {
                creating.set(true);
                let created = workbench.create_workspace(&name, &prompt).await;
                creating.set(false);
                if created.is_ok() {
                    show_new_workspace.set(false);
                }
            });
        })
    };

    let current_file = selected_file();
    let content_ready = current_file
        .as_ref()
        .is_some_and(|file| buffer().is_ready_for(file));

    rsx! {
        style { {WORKBENCH_STYLES} }
        div {
            class: "workbench",

            WorkspaceBar {
                workspaces: workspaces(),
                selected: selected_workspace(),
                description: description(),
                on_select: on_select_workspace,
                on_refresh: on_refresh_workspaces,
                on_new: move |_| show_new_workspace.set(true),
            }

            div {
                class: "workbench-body",

                FileList {
                    files: files(),
                    selected: current_file.clone(),
                    has_workspace: selected_workspace().is_some(),
                    on_select: on_select_file,
                }

                EditorPanel {
                    file: current_file,
                    content: editor_content(),
                    mode: editor_mode(),
                    enabled: editor_enabled(),
                    buffer: buffer(),
                    on_input: on_edit,
                    on_save: on_save,
                    on_reload: on_reload,
                }

                PreviewPane {
                    document: preview_document(),
                    on_refresh: on_refresh_preview,
                }
            }

            PromptBar {
                text: prompt_text(),
                enabled: content_ready,
                busy: mutation_busy(),
                on_input: move |text| prompt_text.set(text),
                on_submit: on_submit_prompt,
            }

            StatusBar { notices: notices() }

            if show_new_workspace() {
                NewWorkspaceDialog {
                    busy: creating(),
                    on_create: on_create_workspace,
                    on_cancel: move |_| show_new_workspace.set(false),
                }
            }
        }
    }
}
