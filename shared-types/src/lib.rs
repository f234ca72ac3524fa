//! Shared types between the workspace UI and the generation backend
//!
//! These types describe:
//! - Workspace and file identifiers
//! - File classification (editor mode, preview role, list ordering)
//! - Request/response bodies of the backend REST contract
//!
//! Serializable with serde for JSON over HTTP

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Name of a workspace (a backend-managed project of generated files)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkspaceId(pub String);

impl WorkspaceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Workspace-relative file name, possibly nested (`src/App.js`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(pub String);

impl FileName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased extension without the dot, if any
    pub fn extension(&self) -> Option<String> {
        let base = self.0.rsplit('/').next().unwrap_or(&self.0);
        let (stem, ext) = base.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// File name without its extension, directory prefix included
    pub fn stem(&self) -> &str {
        let base_start = self.0.rfind('/').map(|i| i + 1).unwrap_or(0);
        match self.0[base_start..].rfind('.') {
            Some(dot) if dot > 0 => &self.0[..base_start + dot],
            _ => &self.0,
        }
    }

    pub fn mode(&self) -> LanguageMode {
        LanguageMode::from_file_name(self)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// File Classification
// ============================================================================

/// Editor language mode, derived from the file extension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageMode {
    Markup,
    Style,
    Script,
    PlainText,
}

impl LanguageMode {
    /// Pure and total: every name maps to exactly one mode
    pub fn from_file_name(name: &FileName) -> Self {
        match name.extension().as_deref() {
            Some("html") => LanguageMode::Markup,
            Some("css") => LanguageMode::Style,
            Some("js") | Some("json") => LanguageMode::Script,
            _ => LanguageMode::PlainText,
        }
    }

    /// Whether files of this mode take part in preview composition
    pub fn is_previewable(self) -> bool {
        matches!(self, LanguageMode::Markup | LanguageMode::Style)
    }

    /// Ordering group used by the file list: markup, then style, then the rest
    pub fn list_rank(self) -> u8 {
        match self {
            LanguageMode::Markup => 0,
            LanguageMode::Style => 1,
            LanguageMode::Script | LanguageMode::PlainText => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LanguageMode::Markup => "HTML",
            LanguageMode::Style => "CSS",
            LanguageMode::Script => "JavaScript",
            LanguageMode::PlainText => "Plain text",
        }
    }
}

/// Sort a fetched file list: grouped by type rank, alphabetical within a group
pub fn sort_file_list(mut files: Vec<FileName>) -> Vec<FileName> {
    files.sort_by(|a, b| {
        a.mode()
            .list_rank()
            .cmp(&b.mode().list_rank())
            .then_with(|| a.as_str().to_lowercase().cmp(&b.as_str().to_lowercase()))
            .then_with(|| a.cmp(b))
    });
    files
}

/// File to auto-select after a list refresh: first markup file, else the first file
pub fn default_selection(files: &[FileName]) -> Option<&FileName> {
    files
        .iter()
        .find(|f| f.mode() == LanguageMode::Markup)
        .or_else(|| files.first())
}

// ============================================================================
// REST Contract
// ============================================================================

/// `GET /api/workspace/{ws}/file/{name}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileContentResponse {
    #[serde(default)]
    pub name: Option<String>,
    pub content: String,
}

/// `POST /api/update-file`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateFileRequest {
    pub workspace_name: WorkspaceId,
    pub file_name: FileName,
    pub content: String,
}

/// `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub workspace_name: WorkspaceId,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub workspace_name: WorkspaceId,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// `POST /api/update-from-prompt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateFromPromptRequest {
    pub workspace_name: WorkspaceId,
    pub file_name: FileName,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_description: Option<String>,
}

/// A `(file name, content)` pair in a generation or rewrite response.
/// Older backends send `name` instead of `file_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileEntry {
    #[serde(alias = "name")]
    pub file_name: FileName,
    #[serde(default)]
    pub content: String,
}

/// Raw rewrite response; exactly one of `content` / `files` is expected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateFromPromptResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<FileEntry>>,
}

/// Validated outcome of a prompt-driven rewrite
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteResult {
    /// New content for the requested file
    Single(String),
    /// Rewritten files, possibly including companions of the requested file
    Files(Vec<FileEntry>),
}

impl RewriteResult {
    /// Content for `file`, if the rewrite produced any
    pub fn content_for(&self, requested: &FileName, file: &FileName) -> Option<&str> {
        match self {
            RewriteResult::Single(content) => (requested == file).then_some(content.as_str()),
            RewriteResult::Files(entries) => entries
                .iter()
                .find(|e| &e.file_name == file)
                .map(|e| e.content.as_str()),
        }
    }
}

impl TryFrom<UpdateFromPromptResponse> for RewriteResult {
    type Error = String;

    fn try_from(value: UpdateFromPromptResponse) -> Result<Self, Self::Error> {
        match (value.files, value.content) {
            (Some(files), _) if !files.is_empty() => Ok(RewriteResult::Files(files)),
            (_, Some(content)) => Ok(RewriteResult::Single(content)),
            _ => Err("response carried neither `content` nor `files`".to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
