//! The workbench: one session plus the components that act on it
//!
//! Every user action enters here. Components report transport failures to
//! the notifier themselves; rejected preconditions are reported here.

use std::rc::Rc;
use std::sync::OnceLock;

use dioxus_logger::tracing::{debug, info, warn};
use regex::Regex;
use shared_types::{default_selection, FileName, GenerateRequest, RewriteResult, WorkspaceId};

use crate::backend::Backend;
use crate::collaborators::{Editor, Notice, Notifier, PreviewSurface, PromptField};
use crate::config::ClientConfig;
use crate::coordinator::{FileBuffer, FileCoordinator};
use crate::error::{Applied, Precondition, WorkbenchError, WorkbenchResult};
use crate::mutation::{MutationPipeline, MutationRequest};
use crate::preview::{EditDebounce, EditTicket, PreviewComposer, NOTHING_SELECTED_DOCUMENT};
use crate::session::SessionHandle;

const README: &str = "README.md";

/// Collaborators the workbench drives
#[derive(Clone)]
pub struct Surfaces {
    pub editor: Rc<dyn Editor>,
    pub preview: Rc<dyn PreviewSurface>,
    pub prompt: Rc<dyn PromptField>,
    pub notifier: Rc<dyn Notifier>,
}

#[derive(Clone)]
pub struct Workbench {
    config: ClientConfig,
    session: SessionHandle,
    backend: Rc<dyn Backend>,
    surfaces: Surfaces,
    composer: Rc<PreviewComposer>,
    files: Rc<FileCoordinator>,
    mutations: Rc<MutationPipeline>,
    debounce: Rc<EditDebounce>,
}

impl Workbench {
    pub fn new(config: ClientConfig, backend: Rc<dyn Backend>, surfaces: Surfaces) -> Self {
        let session = SessionHandle::new();
        let composer = Rc::new(PreviewComposer::new(
            backend.clone(),
            session.clone(),
            surfaces.editor.clone(),
            surfaces.preview.clone(),
        ));
        let files = Rc::new(FileCoordinator::new(
            backend.clone(),
            session.clone(),
            surfaces.editor.clone(),
            composer.clone(),
            surfaces.notifier.clone(),
        ));
        let mutations = Rc::new(MutationPipeline::new(
            backend.clone(),
            session.clone(),
            surfaces.editor.clone(),
            composer.clone(),
            surfaces.prompt.clone(),
            surfaces.notifier.clone(),
        ));

        Self {
            config,
            session,
            backend,
            surfaces,
            composer,
            files,
            mutations,
            debounce: Rc::new(EditDebounce::default()),
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_mutation_in_flight(&self) -> bool {
        self.mutations.is_in_flight()
    }

    /// Fetch the workspace list into the session
    pub async fn refresh_workspaces(&self) -> WorkbenchResult<Vec<WorkspaceId>> {
        match self.backend.list_workspaces().await {
            Ok(workspaces) => {
                debug!("Listed {} workspaces", workspaces.len());
                self.session.set_workspaces(workspaces.clone());
                Ok(workspaces)
            }
            Err(e) => {
                warn!("Failed to list workspaces: {}", e);
                self.surfaces
                    .notifier
                    .notify(Notice::error(format!("Failed to load workspaces: {e}")));
                Err(e.into())
            }
        }
    }

    /// Switch to `workspace`.
    ///
    /// The file list is fetched before anything changes, so an unknown
    /// workspace leaves the session as it was. Once committed, the default
    /// file is opened and the workspace description looked up.
    pub async fn select_workspace(&self, workspace: WorkspaceId) -> WorkbenchResult<Applied<()>> {
        let request = self.session.begin_workspace_selection(workspace.clone());
        let listed = match self.backend.list_files(&workspace).await {
            Ok(listed) => listed,
            Err(e) => {
                warn!("Failed to list files for {}: {}", workspace, e);
                self.surfaces.notifier.notify(Notice::error(format!(
                    "Failed to load files for {workspace}: {e}"
                )));
                return Err(e.into());
            }
        };
        let Some(files) = self.session.commit_workspace(&request, listed) else {
            debug!("Workspace selection {} superseded", workspace);
            return Ok(Applied::Stale);
        };
        info!("Selected workspace {} ({} files)", workspace, files.len());

        self.surfaces.editor.set_content("");
        self.surfaces.editor.set_enabled(false);

        match default_selection(&files).cloned() {
            Some(file) => {
                if let Err(e) = self.open_file(file).await {
                    debug!("Default file did not open: {}", e);
                }
            }
            None => {
                self.composer.compose(None).await;
            }
        }

        self.lookup_description(&workspace).await;
        Ok(Applied::Current(()))
    }

    /// Deselect the workspace; editor and preview return to their idle state
    pub fn clear_workspace(&self) {
        self.session.clear_workspace();
        self.surfaces.editor.set_content("");
        self.surfaces.editor.set_enabled(false);
        self.surfaces.preview.render(NOTHING_SELECTED_DOCUMENT);
        info!("Workspace cleared");
    }

    pub async fn select_file(&self, file: FileName) -> WorkbenchResult<Applied<FileBuffer>> {
        let result = self.open_file(file).await;
        self.report(result)
    }

    async fn open_file(&self, file: FileName) -> WorkbenchResult<Applied<FileBuffer>> {
        let ticket = self.session.select_file(file)?;
        self.files.load_file(&ticket).await
    }

    /// Re-fetch the open file, discarding unsaved edits
    pub async fn reload(&self) -> WorkbenchResult<Applied<FileBuffer>> {
        let result = self.files.reload().await;
        self.report(result)
    }

    /// Save the editor content to the open file
    pub async fn save(&self) -> WorkbenchResult<()> {
        let result = self.save_open_file().await;
        self.report(result)
    }

    async fn save_open_file(&self) -> WorkbenchResult<()> {
        let workspace = self
            .session
            .selected_workspace()
            .ok_or(Precondition::NoWorkspace)?;
        let file = self.session.selected_file().ok_or(Precondition::NoFile)?;
        let content = self.surfaces.editor.content();
        self.files.save_file(&workspace, &file, content).await
    }

    /// Note an edit to the buffer.
    ///
    /// Returns a ticket when the edit should recompose the preview; the
    /// caller waits [`ClientConfig::edit_debounce_ms`] and then calls
    /// [`Self::flush_edit`].
    pub fn on_editor_change(&self) -> Option<EditTicket> {
        let file = self.session.selected_file()?;
        if !file.mode().is_previewable() || !self.session.buffer().is_ready_for(&file) {
            return None;
        }
        Some(self.debounce.touch())
    }

    /// Recompose for a debounced edit, unless a later edit superseded it
    pub async fn flush_edit(&self, ticket: EditTicket) -> Option<Applied<String>> {
        if !self.debounce.is_latest(ticket) {
            return None;
        }
        Some(self.composer.compose(None).await)
    }

    pub async fn refresh_preview(&self) -> Applied<String> {
        self.composer.compose(None).await
    }

    /// Send the prompt input as a rewrite request for the open file
    pub async fn submit_prompt(&self) -> WorkbenchResult<Applied<RewriteResult>> {
        let result = self.rewrite_open_file().await;
        self.report(result)
    }

    async fn rewrite_open_file(&self) -> WorkbenchResult<Applied<RewriteResult>> {
        let workspace = self
            .session
            .selected_workspace()
            .ok_or(Precondition::NoWorkspace)?;
        let file = self.session.selected_file().ok_or(Precondition::NoFile)?;
        let previous_content = Some(self.surfaces.editor.content());
        let request = MutationRequest {
            workspace,
            file,
            prompt: self.surfaces.prompt.text(),
            previous_content,
            description: self.session.workspace_description(),
        };
        self.mutations.request_mutation(request).await
    }

    /// Generate a new workspace from `prompt` and switch to it
    pub async fn create_workspace(&self, name: &str, prompt: &str) -> WorkbenchResult<Applied<()>> {
        let result = self.generate_workspace(name.trim(), prompt.trim()).await;
        self.report(result)
    }

    async fn generate_workspace(&self, name: &str, prompt: &str) -> WorkbenchResult<Applied<()>> {
        if name.is_empty() {
            return Err(Precondition::EmptyWorkspaceName.into());
        }
        if prompt.is_empty() {
            return Err(Precondition::EmptyPrompt.into());
        }

        let request = GenerateRequest {
            workspace_name: WorkspaceId::new(name),
            prompt: prompt.to_string(),
        };
        let response = match self.backend.generate(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to generate workspace {}: {}", name, e);
                self.surfaces
                    .notifier
                    .notify(Notice::error(format!("Failed to create workspace: {e}")));
                return Err(e.into());
            }
        };

        let created = if response.workspace_name.as_str().is_empty() {
            request.workspace_name
        } else {
            response.workspace_name
        };
        info!("Generated workspace {} ({} files)", created, response.files.len());
        self.session
            .remember_description(&created, prompt.to_string());
        self.surfaces
            .notifier
            .notify(Notice::success(format!("Workspace {created} created")));

        // A failed listing is already reported; the new workspace can still open
        let _ = self.refresh_workspaces().await;
        self.select_workspace(created).await
    }

    async fn lookup_description(&self, workspace: &WorkspaceId) {
        if self.session.known_description(workspace).is_some() {
            return;
        }
        match self
            .backend
            .read_file(workspace, &FileName::from(README))
            .await
        {
            Ok(readme) => {
                if let Some(description) = extract_description(&readme) {
                    self.session.remember_description(workspace, description);
                }
            }
            Err(e) => debug!("No README description for {}: {}", workspace, e),
        }
    }

    fn report<T>(&self, result: WorkbenchResult<T>) -> WorkbenchResult<T> {
        if let Err(WorkbenchError::Precondition(reason)) = &result {
            self.surfaces.notifier.notify(Notice::error(reason.to_string()));
        }
        result
    }
}

/// Text after the first `Description:` marker in a README, trimmed
pub fn extract_description(readme: &str) -> Option<String> {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let marker =
        MARKER.get_or_init(|| Regex::new(r"(?i)Description:(.*)").expect("Invalid regex pattern"));
    marker
        .captures(readme)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|d| !d.is_empty())
}
