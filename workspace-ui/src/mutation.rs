//! Prompt-driven rewrites via `/api/update-from-prompt`

use std::cell::Cell;
use std::rc::Rc;

use dioxus_logger::tracing::{debug, info, warn};
use shared_types::{
    FileName, RewriteResult, UpdateFromPromptRequest, UpdateFromPromptResponse, WorkspaceId,
};

use crate::backend::Backend;
use crate::collaborators::{Editor, Notice, Notifier, PromptField};
use crate::error::{ApiError, Applied, Precondition, WorkbenchError, WorkbenchResult};
use crate::preview::{companion_for, CompanionContent, PreviewComposer};
use crate::session::SessionHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub workspace: WorkspaceId,
    pub file: FileName,
    pub prompt: String,
    pub previous_content: Option<String>,
    pub description: Option<String>,
}

/// Companion content carried by a multi-file rewrite of `file`
pub fn companion_handoff(
    rewrite: &RewriteResult,
    file: &FileName,
    listed: &[FileName],
) -> Option<CompanionContent> {
    let RewriteResult::Files(entries) = rewrite else {
        return None;
    };
    let companion = companion_for(file, listed)?;
    entries
        .iter()
        .find(|entry| entry.file_name == companion)
        .map(|entry| CompanionContent {
            file: entry.file_name.clone(),
            content: entry.content.clone(),
        })
}

/// Clears the in-flight flag however the request future ends
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct MutationPipeline {
    backend: Rc<dyn Backend>,
    session: SessionHandle,
    editor: Rc<dyn Editor>,
    composer: Rc<PreviewComposer>,
    prompt: Rc<dyn PromptField>,
    notifier: Rc<dyn Notifier>,
    in_flight: Cell<bool>,
}

impl MutationPipeline {
    pub fn new(
        backend: Rc<dyn Backend>,
        session: SessionHandle,
        editor: Rc<dyn Editor>,
        composer: Rc<PreviewComposer>,
        prompt: Rc<dyn PromptField>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            backend,
            session,
            editor,
            composer,
            prompt,
            notifier,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Ask the backend to rewrite `request.file` and apply the result.
    ///
    /// Preconditions are checked before any network call, including that
    /// the file's content has finished loading. The result is
    /// applied only if the same workspace and file are still selected; the
    /// preview is always recomposed with any companion the response carried,
    /// and the prompt input is cleared. On failure nothing is touched.
    pub async fn request_mutation(
        &self,
        request: MutationRequest,
    ) -> WorkbenchResult<Applied<RewriteResult>> {
        let prompt = request.prompt.trim();
        if prompt.is_empty() {
            return Err(Precondition::EmptyPrompt.into());
        }
        let ticket = self.session.ticket();
        if ticket.workspace.as_ref() != Some(&request.workspace) {
            return Err(Precondition::NotCurrent(request.workspace.to_string()).into());
        }
        if ticket.file.as_ref() != Some(&request.file) {
            return Err(Precondition::NotCurrent(request.file.to_string()).into());
        }
        if !self.session.buffer().is_ready_for(&request.file) {
            return Err(Precondition::ContentNotLoaded.into());
        }

        let response = {
            let Some(_guard) = InFlight::acquire(&self.in_flight) else {
                return Err(Precondition::MutationInFlight.into());
            };
            info!("Requesting rewrite of {}/{}", request.workspace, request.file);
            self.send(&request, prompt).await
        };

        let rewrite = match response {
            Ok(response) => RewriteResult::try_from(response).map_err(WorkbenchError::MalformedResponse),
            Err(e) => Err(e.into()),
        };
        let rewrite = match rewrite {
            Ok(rewrite) => rewrite,
            Err(e) => {
                warn!("Rewrite of {} failed: {}", request.file, e);
                self.notifier
                    .notify(Notice::error(format!("Failed to update {}: {e}", request.file)));
                return Err(e);
            }
        };

        if let RewriteResult::Files(entries) = &rewrite {
            self.session.add_files(
                &request.workspace,
                entries.iter().map(|entry| entry.file_name.clone()),
            );
        }

        if !self.session.is_current(&ticket) {
            debug!("Selection moved on; not applying rewrite of {}", request.file);
            self.notifier.notify(Notice::info(format!(
                "{} was updated; reopen it to see the changes",
                request.file
            )));
            return Ok(Applied::Stale);
        }

        match rewrite.content_for(&request.file, &request.file) {
            Some(content) => self.editor.set_content(content),
            None => warn!("Rewrite response did not include {}", request.file),
        }
        let handoff = companion_handoff(&rewrite, &request.file, &self.session.files());
        self.composer.compose(handoff).await;
        self.prompt.clear();

        self.notifier
            .notify(Notice::success(format!("{} updated successfully", request.file)));
        Ok(Applied::Current(rewrite))
    }

    async fn send(
        &self,
        request: &MutationRequest,
        prompt: &str,
    ) -> Result<UpdateFromPromptResponse, ApiError> {
        let body = UpdateFromPromptRequest {
            workspace_name: request.workspace.clone(),
            file_name: request.file.clone(),
            prompt: prompt.to_string(),
            previous_code: request.previous_content.clone(),
            workspace_description: request.description.clone(),
        };
        self.backend.update_from_prompt(&body).await
    }
}
