//! Workspace session state
//!
//! One [`Session`] per tab, shared through a [`SessionHandle`] that every
//! component receives at construction. Mutations go through the handle so
//! subscribers see a [`SessionEvent`] for each change.
//!
//! Async operations capture a [`SelectionTicket`] when issued and check it
//! with [`SessionHandle::is_current`] when they resume.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_types::{sort_file_list, FileName, WorkspaceId};

use crate::error::Precondition;

/// Lifecycle of the single editor buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BufferState {
    #[default]
    Empty,
    Loading(FileName),
    Ready(FileName),
    Failed { file: FileName, message: String },
}

impl BufferState {
    pub fn is_ready_for(&self, file: &FileName) -> bool {
        matches!(self, BufferState::Ready(f) if f == file)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    WorkspacesListed(Vec<WorkspaceId>),
    WorkspaceChanged(Option<WorkspaceId>),
    FilesListed(Vec<FileName>),
    FileChanged(Option<FileName>),
    DescriptionChanged(Option<String>),
    BufferChanged(BufferState),
}

/// Identity of the selection an async operation was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    pub workspace: Option<WorkspaceId>,
    pub file: Option<FileName>,
    generation: u64,
}

/// A workspace selection waiting for its file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRequest {
    pub workspace: WorkspaceId,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct Session {
    workspaces: Vec<WorkspaceId>,
    selected_workspace: Option<WorkspaceId>,
    selected_file: Option<FileName>,
    workspace_description: Option<String>,
    files: Vec<FileName>,
    buffer: BufferState,
    /// Bumped on every workspace or file selection change
    generation: u64,
    /// Latest issued workspace selection; older ones never commit
    workspace_seq: u64,
    /// Descriptions learned per workspace (generation prompt or README)
    known_descriptions: HashMap<WorkspaceId, String>,
}

impl Session {
    pub fn selected_workspace(&self) -> Option<&WorkspaceId> {
        self.selected_workspace.as_ref()
    }

    pub fn selected_file(&self) -> Option<&FileName> {
        self.selected_file.as_ref()
    }

    pub fn workspace_description(&self) -> Option<&str> {
        self.workspace_description.as_deref()
    }

    pub fn files(&self) -> &[FileName] {
        &self.files
    }

    pub fn workspaces(&self) -> &[WorkspaceId] {
        &self.workspaces
    }

    pub fn buffer(&self) -> &BufferState {
        &self.buffer
    }

    fn ticket(&self) -> SelectionTicket {
        SelectionTicket {
            workspace: self.selected_workspace.clone(),
            file: self.selected_file.clone(),
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
            && ticket.workspace == self.selected_workspace
            && ticket.file == self.selected_file
    }
}

type Subscriber = Rc<dyn Fn(&SessionEvent)>;

/// Shared, single-threaded handle to the tab's [`Session`]
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Rc<RefCell<Session>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&SessionEvent) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(subscriber));
    }

    /// Run `f` against a read-only view of the session
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn selected_workspace(&self) -> Option<WorkspaceId> {
        self.read(|s| s.selected_workspace.clone())
    }

    pub fn selected_file(&self) -> Option<FileName> {
        self.read(|s| s.selected_file.clone())
    }

    pub fn workspace_description(&self) -> Option<String> {
        self.read(|s| s.workspace_description.clone())
    }

    pub fn files(&self) -> Vec<FileName> {
        self.read(|s| s.files.clone())
    }

    pub fn buffer(&self) -> BufferState {
        self.read(|s| s.buffer.clone())
    }

    pub fn ticket(&self) -> SelectionTicket {
        self.read(Session::ticket)
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.read(|s| s.is_current(ticket))
    }

    pub fn known_description(&self, workspace: &WorkspaceId) -> Option<String> {
        self.read(|s| s.known_descriptions.get(workspace).cloned())
    }

    pub fn set_workspaces(&self, workspaces: Vec<WorkspaceId>) {
        self.inner.borrow_mut().workspaces = workspaces.clone();
        self.emit(&[SessionEvent::WorkspacesListed(workspaces)]);
    }

    /// Start selecting `workspace`; nothing changes until [`Self::commit_workspace`]
    pub fn begin_workspace_selection(&self, workspace: WorkspaceId) -> WorkspaceRequest {
        let mut session = self.inner.borrow_mut();
        session.workspace_seq += 1;
        WorkspaceRequest {
            workspace,
            seq: session.workspace_seq,
        }
    }

    /// Commit a workspace selection once its file list arrived.
    ///
    /// Clears the selected file and description. Returns `None` when a newer
    /// selection (or a clear) was issued in the meantime.
    pub fn commit_workspace(
        &self,
        request: &WorkspaceRequest,
        files: Vec<FileName>,
    ) -> Option<Vec<FileName>> {
        let (events, files) = {
            let mut session = self.inner.borrow_mut();
            if session.workspace_seq != request.seq {
                return None;
            }
            let files = sort_file_list(files);
            session.selected_workspace = Some(request.workspace.clone());
            session.selected_file = None;
            session.workspace_description =
                session.known_descriptions.get(&request.workspace).cloned();
            session.files = files.clone();
            session.buffer = BufferState::Empty;
            session.generation += 1;
            let events = vec![
                SessionEvent::WorkspaceChanged(Some(request.workspace.clone())),
                SessionEvent::FilesListed(files.clone()),
                SessionEvent::FileChanged(None),
                SessionEvent::DescriptionChanged(session.workspace_description.clone()),
                SessionEvent::BufferChanged(BufferState::Empty),
            ];
            (events, files)
        };
        self.emit(&events);
        Some(files)
    }

    /// Drop the workspace selection and anything waiting to commit
    pub fn clear_workspace(&self) {
        {
            let mut session = self.inner.borrow_mut();
            session.workspace_seq += 1;
            session.selected_workspace = None;
            session.selected_file = None;
            session.workspace_description = None;
            session.files.clear();
            session.buffer = BufferState::Empty;
            session.generation += 1;
        }
        self.emit(&[
            SessionEvent::WorkspaceChanged(None),
            SessionEvent::FilesListed(Vec::new()),
            SessionEvent::FileChanged(None),
            SessionEvent::DescriptionChanged(None),
            SessionEvent::BufferChanged(BufferState::Empty),
        ]);
    }

    /// Make `file` the selected file; its buffer starts out loading
    pub fn select_file(&self, file: FileName) -> Result<SelectionTicket, Precondition> {
        let ticket = {
            let mut session = self.inner.borrow_mut();
            if session.selected_workspace.is_none() {
                return Err(Precondition::NoWorkspace);
            }
            session.selected_file = Some(file.clone());
            session.buffer = BufferState::Loading(file.clone());
            session.generation += 1;
            session.ticket()
        };
        self.emit(&[
            SessionEvent::FileChanged(Some(file.clone())),
            SessionEvent::BufferChanged(BufferState::Loading(file)),
        ]);
        Ok(ticket)
    }

    /// Record the buffer state for `ticket`'s file; ignored if the ticket is stale
    pub fn set_buffer(&self, ticket: &SelectionTicket, state: BufferState) -> bool {
        {
            let mut session = self.inner.borrow_mut();
            if !session.is_current(ticket) {
                return false;
            }
            session.buffer = state.clone();
        }
        self.emit(&[SessionEvent::BufferChanged(state)]);
        true
    }

    /// Merge files the backend reported creating into the selected workspace's list
    pub fn add_files(&self, workspace: &WorkspaceId, created: impl IntoIterator<Item = FileName>) {
        let listed = {
            let mut session = self.inner.borrow_mut();
            if session.selected_workspace.as_ref() != Some(workspace) {
                return;
            }
            let before = session.files.len();
            let mut files = std::mem::take(&mut session.files);
            for file in created {
                if !files.contains(&file) {
                    files.push(file);
                }
            }
            session.files = sort_file_list(files);
            if session.files.len() == before {
                return;
            }
            session.files.clone()
        };
        self.emit(&[SessionEvent::FilesListed(listed)]);
    }

    /// Remember a description for `workspace`; applied now if it is selected
    pub fn remember_description(&self, workspace: &WorkspaceId, description: String) {
        let changed = {
            let mut session = self.inner.borrow_mut();
            session
                .known_descriptions
                .insert(workspace.clone(), description.clone());
            if session.selected_workspace.as_ref() == Some(workspace) {
                session.workspace_description = Some(description.clone());
                true
            } else {
                false
            }
        };
        if changed {
            self.emit(&[SessionEvent::DescriptionChanged(Some(description))]);
        }
    }

    fn emit(&self, events: &[SessionEvent]) {
        // Subscribers may read the session; no borrow is held here
        let subscribers = self.subscribers.borrow().clone();
        for event in events {
            for subscriber in &subscribers {
                subscriber(event);
            }
        }
    }
}
