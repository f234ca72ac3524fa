//! File load/save against the single editor buffer

use std::rc::Rc;

use dioxus_logger::tracing::{debug, info, warn};
use shared_types::{FileName, LanguageMode, UpdateFileRequest, WorkspaceId};

use crate::backend::Backend;
use crate::collaborators::{Editor, Notice, Notifier};
use crate::error::{Applied, Precondition, WorkbenchResult};
use crate::preview::PreviewComposer;
use crate::session::{BufferState, SelectionTicket, SessionHandle};

pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Inert text shown in the (disabled) editor when a load fails
pub fn load_error_placeholder(file: &FileName, message: &str) -> String {
    format!("// Error loading {file}: {message}")
}

/// Content of the active file as applied to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBuffer {
    pub file: FileName,
    pub content: String,
    pub mode: LanguageMode,
}

pub struct FileCoordinator {
    backend: Rc<dyn Backend>,
    session: SessionHandle,
    editor: Rc<dyn Editor>,
    composer: Rc<PreviewComposer>,
    notifier: Rc<dyn Notifier>,
}

impl FileCoordinator {
    pub fn new(
        backend: Rc<dyn Backend>,
        session: SessionHandle,
        editor: Rc<dyn Editor>,
        composer: Rc<PreviewComposer>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            backend,
            session,
            editor,
            composer,
            notifier,
        }
    }

    /// Load the file `ticket` was issued for into the editor, then recompose.
    ///
    /// The editor stays disabled until content arrives. A response for a
    /// selection that has since changed is dropped as [`Applied::Stale`].
    pub async fn load_file(&self, ticket: &SelectionTicket) -> WorkbenchResult<Applied<FileBuffer>> {
        let (Some(workspace), Some(file)) = (ticket.workspace.clone(), ticket.file.clone()) else {
            return Err(Precondition::NoFile.into());
        };

        self.editor.set_enabled(false);
        self.editor.set_content(LOADING_PLACEHOLDER);

        let result = self.backend.read_file(&workspace, &file).await;
        if !self.session.is_current(ticket) {
            debug!("Discarding late content for {}/{}", workspace, file);
            return Ok(Applied::Stale);
        }

        match result {
            Ok(content) => {
                let mode = file.mode();
                self.editor.set_mode(mode);
                self.editor.set_content(&content);
                self.editor.set_enabled(true);
                self.session
                    .set_buffer(ticket, BufferState::Ready(file.clone()));
                info!("Loaded {}/{} ({} bytes)", workspace, file, content.len());

                self.composer.compose(None).await;
                Ok(Applied::Current(FileBuffer {
                    file,
                    content,
                    mode,
                }))
            }
            Err(e) => {
                warn!("Failed to load {}/{}: {}", workspace, file, e);
                let message = e.to_string();
                self.editor.set_mode(LanguageMode::PlainText);
                self.editor
                    .set_content(&load_error_placeholder(&file, &message));
                self.session.set_buffer(
                    ticket,
                    BufferState::Failed {
                        file: file.clone(),
                        message,
                    },
                );
                self.notifier
                    .notify(Notice::error(format!("Failed to load {file}: {e}")));

                self.composer.compose(None).await;
                Err(e.into())
            }
        }
    }

    /// Re-fetch the selected file, discarding unsaved edits
    pub async fn reload(&self) -> WorkbenchResult<Applied<FileBuffer>> {
        let file = self.session.selected_file().ok_or(Precondition::NoFile)?;
        let ticket = self.session.select_file(file)?;
        self.load_file(&ticket).await
    }

    /// Persist `content` as-is. Markup and style files recompose right away.
    ///
    /// On failure the buffer keeps the unsaved content.
    pub async fn save_file(
        &self,
        workspace: &WorkspaceId,
        file: &FileName,
        content: String,
    ) -> WorkbenchResult<()> {
        let ticket = self.session.ticket();
        if ticket.workspace.as_ref() != Some(workspace) || ticket.file.as_ref() != Some(file) {
            return Err(Precondition::NotCurrent(file.to_string()).into());
        }
        if !self.session.buffer().is_ready_for(file) {
            return Err(Precondition::ContentNotLoaded.into());
        }

        let request = UpdateFileRequest {
            workspace_name: workspace.clone(),
            file_name: file.clone(),
            content,
        };
        if let Err(e) = self.backend.update_file(&request).await {
            warn!("Failed to save {}/{}: {}", workspace, file, e);
            self.notifier
                .notify(Notice::error(format!("Failed to save {file}: {e}")));
            return Err(e.into());
        }

        info!("Saved {}/{}", workspace, file);
        self.notifier
            .notify(Notice::success(format!("{file} saved successfully")));
        if file.mode().is_previewable() && self.session.is_current(&ticket) {
            self.composer.compose(None).await;
        }
        Ok(())
    }
}
