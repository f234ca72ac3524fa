//! Shared fakes for workbench integration tests
//!
//! `FakeBackend` serves an in-memory set of workspaces. Any call can be
//! held at a gate until the test releases it, which lets tests interleave
//! responses deterministically on a `LocalPool`.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use shared_types::{
    FileEntry, FileName, GenerateRequest, GenerateResponse, LanguageMode, UpdateFileRequest,
    UpdateFromPromptRequest, UpdateFromPromptResponse, WorkspaceId,
};

use workspace_ui::{
    ApiError, Backend, ClientConfig, Editor, Notice, NoticeLevel, Notifier, PreviewSurface,
    PromptField, Surfaces, Workbench,
};

// ============================================================================
// Fake backend
// ============================================================================

#[derive(Default)]
pub struct FakeBackend {
    workspaces: RefCell<BTreeMap<WorkspaceId, BTreeMap<FileName, String>>>,
    gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<()>>>>,
    failures: RefCell<HashMap<String, ApiError>>,
    rewrite: RefCell<Option<UpdateFromPromptResponse>>,
    calls: RefCell<Vec<String>>,
    pub saved: RefCell<Vec<UpdateFileRequest>>,
    pub rewrite_requests: RefCell<Vec<UpdateFromPromptRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace(self, name: &str, files: &[(&str, &str)]) -> Self {
        let contents = files
            .iter()
            .map(|(file, content)| (FileName::from(*file), content.to_string()))
            .collect();
        self.workspaces
            .borrow_mut()
            .insert(WorkspaceId::from(name), contents);
        self
    }

    /// Hold the next call matching `key` (e.g. `read:alpha/index.html`,
    /// `list:alpha`, `rewrite`) until the returned sender fires
    pub fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    /// Make every call matching `key` fail with `error`
    pub fn fail(&self, key: &str, error: ApiError) {
        self.failures.borrow_mut().insert(key.to_string(), error);
    }

    pub fn respond_to_rewrite(&self, response: UpdateFromPromptResponse) {
        *self.rewrite.borrow_mut() = Some(response);
    }

    pub fn calls(&self, key: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == key).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    async fn enter(&self, key: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(key.clone());
        let gate = self
            .gates
            .borrow_mut()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        match self.failures.borrow().get(&key) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn not_found(what: impl std::fmt::Display) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn list_workspaces(&self) -> Result<Vec<WorkspaceId>, ApiError> {
        self.enter("workspaces".to_string()).await?;
        Ok(self.workspaces.borrow().keys().cloned().collect())
    }

    async fn list_files(&self, workspace: &WorkspaceId) -> Result<Vec<FileName>, ApiError> {
        self.enter(format!("list:{workspace}")).await?;
        self.workspaces
            .borrow()
            .get(workspace)
            .map(|files| files.keys().cloned().collect())
            .ok_or_else(|| not_found(format!("Workspace {workspace}")))
    }

    async fn read_file(
        &self,
        workspace: &WorkspaceId,
        file: &FileName,
    ) -> Result<String, ApiError> {
        self.enter(format!("read:{workspace}/{file}")).await?;
        self.workspaces
            .borrow()
            .get(workspace)
            .and_then(|files| files.get(file).cloned())
            .ok_or_else(|| not_found(format!("File {file}")))
    }

    async fn update_file(&self, request: &UpdateFileRequest) -> Result<(), ApiError> {
        self.enter(format!("save:{}/{}", request.workspace_name, request.file_name))
            .await?;
        self.saved.borrow_mut().push(request.clone());
        self.workspaces
            .borrow_mut()
            .entry(request.workspace_name.clone())
            .or_default()
            .insert(request.file_name.clone(), request.content.clone());
        Ok(())
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.enter(format!("generate:{}", request.workspace_name))
            .await?;
        let files = vec![
            FileEntry {
                file_name: FileName::from("index.html"),
                content: format!("<html><head></head><body>{}</body></html>", request.prompt),
            },
            FileEntry {
                file_name: FileName::from("styles.css"),
                content: "body { margin: 0; }".to_string(),
            },
        ];
        self.workspaces.borrow_mut().insert(
            request.workspace_name.clone(),
            files
                .iter()
                .map(|e| (e.file_name.clone(), e.content.clone()))
                .collect(),
        );
        Ok(GenerateResponse {
            workspace_name: request.workspace_name.clone(),
            files,
        })
    }

    async fn update_from_prompt(
        &self,
        request: &UpdateFromPromptRequest,
    ) -> Result<UpdateFromPromptResponse, ApiError> {
        self.rewrite_requests.borrow_mut().push(request.clone());
        self.enter("rewrite".to_string()).await?;
        self.rewrite
            .borrow()
            .clone()
            .ok_or_else(|| ApiError::Status {
                status: 500,
                message: "no rewrite scripted".to_string(),
            })
    }
}

// ============================================================================
// Recording collaborators
// ============================================================================

#[derive(Default)]
pub struct RecordingEditor {
    content: RefCell<String>,
    mode: Cell<Option<LanguageMode>>,
    enabled: Cell<bool>,
}

impl RecordingEditor {
    pub fn mode(&self) -> Option<LanguageMode> {
        self.mode.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Simulate the user typing
    pub fn type_text(&self, text: &str) {
        *self.content.borrow_mut() = text.to_string();
    }
}

impl Editor for RecordingEditor {
    fn set_content(&self, content: &str) {
        *self.content.borrow_mut() = content.to_string();
    }

    fn content(&self) -> String {
        self.content.borrow().clone()
    }

    fn set_mode(&self, mode: LanguageMode) {
        self.mode.set(Some(mode));
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

#[derive(Default)]
pub struct RecordingPreview {
    renders: RefCell<Vec<String>>,
}

impl RecordingPreview {
    pub fn last(&self) -> Option<String> {
        self.renders.borrow().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }
}

impl PreviewSurface for RecordingPreview {
    fn render(&self, document: &str) {
        self.renders.borrow_mut().push(document.to_string());
    }
}

#[derive(Default)]
pub struct RecordingPrompt {
    text: RefCell<String>,
}

impl RecordingPrompt {
    pub fn type_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

impl PromptField for RecordingPrompt {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn clear(&self) {
        self.text.borrow_mut().clear();
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.messages(NoticeLevel::Error)
    }

    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub workbench: Workbench,
    pub backend: Rc<FakeBackend>,
    pub editor: Rc<RecordingEditor>,
    pub preview: Rc<RecordingPreview>,
    pub prompt: Rc<RecordingPrompt>,
    pub notifier: Rc<RecordingNotifier>,
    pool: RefCell<LocalPool>,
}

impl Harness {
    pub fn new(backend: FakeBackend) -> Self {
        let backend = Rc::new(backend);
        let editor = Rc::new(RecordingEditor::default());
        let preview = Rc::new(RecordingPreview::default());
        let prompt = Rc::new(RecordingPrompt::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let surfaces = Surfaces {
            editor: editor.clone(),
            preview: preview.clone(),
            prompt: prompt.clone(),
            notifier: notifier.clone(),
        };
        let workbench = Workbench::new(ClientConfig::default(), backend.clone(), surfaces);
        Self {
            workbench,
            backend,
            editor,
            preview,
            prompt,
            notifier,
            pool: RefCell::new(LocalPool::new()),
        }
    }

    /// Drive `future` (and any spawned tasks) to completion
    pub fn run<F: Future>(&self, future: F) -> F::Output {
        self.pool.borrow_mut().run_until(future)
    }

    /// Start a task in the background; its output lands in the returned slot
    pub fn spawn<T: 'static>(&self, future: impl Future<Output = T> + 'static) -> Rc<RefCell<Option<T>>> {
        let slot = Rc::new(RefCell::new(None));
        let out = slot.clone();
        self.pool
            .borrow()
            .spawner()
            .spawn_local(async move {
                *out.borrow_mut() = Some(future.await);
            })
            .expect("Failed to spawn task");
        slot
    }

    /// Run every task until all of them are blocked or done
    pub fn settle(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    pub fn wb(&self) -> Workbench {
        self.workbench.clone()
    }

    pub fn open_workspace(&self, name: &str) {
        self.run(self.workbench.select_workspace(WorkspaceId::from(name)))
            .expect("Failed to select workspace");
    }
}
