//! REST API Client
//!
//! `NotesApi` is the seam between the sidebar protocol and the remote
//! collaborator; `HttpApi` is the fetch-backed implementation.

mod http;

pub use http::HttpApi;

use async_trait::async_trait;

use crate::models::{
    Folder, FolderId, FolderPatch, NewFolder, NewNote, Note, NoteId, NotePatch, UploadFile, UploadedFile,
};

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-success status
    Status { status: u16, body: String },
    /// The response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, body } if body.is_empty() => write!(f, "HTTP {}", status),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Endpoints the sidebar depends on
#[async_trait(?Send)]
pub trait NotesApi {
    /// `GET /folders`, flattened
    async fn list_folders(&self) -> ApiResult<Vec<Folder>>;

    /// `POST /folders`
    async fn create_folder(&self, folder: &NewFolder) -> ApiResult<Folder>;

    /// `PATCH /folders/{id}`
    async fn update_folder(&self, id: FolderId, patch: &FolderPatch) -> ApiResult<Folder>;

    /// `DELETE /folders/{id}`
    async fn delete_folder(&self, id: FolderId) -> ApiResult<()>;

    /// `GET /notes`
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;

    /// `POST /notes`
    async fn create_note(&self, note: &NewNote) -> ApiResult<Note>;

    /// `PATCH /notes/{id}`
    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> ApiResult<Note>;

    /// `PATCH /notes/{id}/favorite`
    async fn set_favorite(&self, id: NoteId, is_favorite: bool) -> ApiResult<Note>;

    /// `DELETE /notes/{id}`
    async fn delete_note(&self, id: NoteId) -> ApiResult<()>;

    /// `POST /files/upload` (multipart)
    async fn upload_file(&self, file: &UploadFile, folder_id: Option<FolderId>) -> ApiResult<UploadedFile>;
}
