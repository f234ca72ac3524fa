use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    FileContentResponse, FileName, GenerateRequest, GenerateResponse, UpdateFileRequest,
    UpdateFromPromptRequest, UpdateFromPromptResponse, WorkspaceId,
};

use crate::backend::Backend;
use crate::error::ApiError;

/// gloo-net client for the generation backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    api_base: String,
}

impl HttpBackend {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.api_base, path)
    }

    fn file_url(&self, workspace: &WorkspaceId, file: &FileName) -> String {
        // Nested names keep their slashes; the route is `{file_name:path}`
        let encoded = file
            .as_str()
            .split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/");
        self.url(&format!(
            "/workspace/{}/file/{}",
            encode_segment(workspace.as_str()),
            encoded
        ))
    }
}

fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment)
        .as_string()
        .unwrap_or_else(|| segment.to_string())
}

/// Fold a non-2xx response into an [`ApiError::Status`], keeping whatever
/// message the backend put in the body.
async fn describe_http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: error_message_from_body(&body),
    }
}

pub(crate) fn error_message_from_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "no response body".to_string();
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "error", "message"] {
            if let Some(text) = json.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    body.to_string()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(describe_http_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    read_json(response).await
}

async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    read_json(response).await
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list_workspaces(&self) -> Result<Vec<WorkspaceId>, ApiError> {
        get_json(&self.url("/workspaces")).await
    }

    async fn list_files(&self, workspace: &WorkspaceId) -> Result<Vec<FileName>, ApiError> {
        let url = self.url(&format!(
            "/workspace/{}/files",
            encode_segment(workspace.as_str())
        ));
        get_json(&url).await
    }

    async fn read_file(
        &self,
        workspace: &WorkspaceId,
        file: &FileName,
    ) -> Result<String, ApiError> {
        let data: FileContentResponse = get_json(&self.file_url(workspace, file)).await?;
        Ok(data.content)
    }

    async fn update_file(&self, request: &UpdateFileRequest) -> Result<(), ApiError> {
        // The ack body is informational only
        let _: serde_json::Value = post_json(&self.url("/update-file"), request).await?;
        Ok(())
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        post_json(&self.url("/generate"), request).await
    }

    async fn update_from_prompt(
        &self,
        request: &UpdateFromPromptRequest,
    ) -> Result<UpdateFromPromptResponse, ApiError> {
        post_json(&self.url("/update-from-prompt"), request).await
    }
}
