use async_trait::async_trait;
use shared_types::{
    FileName, GenerateRequest, GenerateResponse, UpdateFileRequest, UpdateFromPromptRequest,
    UpdateFromPromptResponse, WorkspaceId,
};

use crate::error::ApiError;

/// The generation backend's REST contract.
///
/// Futures are `!Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /api/workspaces`
    async fn list_workspaces(&self) -> Result<Vec<WorkspaceId>, ApiError>;

    /// `GET /api/workspace/{ws}/files`
    async fn list_files(&self, workspace: &WorkspaceId) -> Result<Vec<FileName>, ApiError>;

    /// `GET /api/workspace/{ws}/file/{name}`; a missing file is a non-2xx status
    async fn read_file(&self, workspace: &WorkspaceId, file: &FileName)
        -> Result<String, ApiError>;

    /// `POST /api/update-file`
    async fn update_file(&self, request: &UpdateFileRequest) -> Result<(), ApiError>;

    /// `POST /api/generate`
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    /// `POST /api/update-from-prompt`
    async fn update_from_prompt(
        &self,
        request: &UpdateFromPromptRequest,
    ) -> Result<UpdateFromPromptResponse, ApiError>;
}
