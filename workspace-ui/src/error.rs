//! Error taxonomy for workbench operations
//!
//! Stale responses are not errors; see [`Applied::Stale`].

use thiserror::Error;

/// Transport-level failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {status} ({message})")]
    Status { status: u16, message: String },
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// A user action was rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("No workspace selected")]
    NoWorkspace,
    #[error("No file selected")]
    NoFile,
    #[error("Please enter a description of the changes")]
    EmptyPrompt,
    #[error("Please enter a workspace name")]
    EmptyWorkspaceName,
    #[error("{0} is not the current selection")]
    NotCurrent(String),
    #[error("File content is not loaded")]
    ContentNotLoaded,
    #[error("Another update is already running")]
    MutationInFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkbenchError {
    #[error(transparent)]
    Precondition(#[from] Precondition),
    #[error(transparent)]
    Transport(#[from] ApiError),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Outcome of an async operation that was checked against the session on completion
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<T> {
    /// Result was applied to the current selection
    Current(T),
    /// Selection moved on while the request was in flight; result dropped
    Stale,
}

pub type WorkbenchResult<T> = Result<T, WorkbenchError>;
