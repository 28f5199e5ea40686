//! Fetch-backed `NotesApi`

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, NotesApi};
use crate::config::AppConfig;
use crate::models::{
    flatten_folder_records, FavoritePatch, Folder, FolderId, FolderPatch, FolderRecord, NewFolder, NewNote, Note,
    NoteId, NotePatch, UploadFile, UploadedFile,
};
use crate::session;

/// Multipart field carrying the file bytes
const UPLOAD_FIELD: &str = "upload_file";

/// Supplies the bearer token at request time
pub type TokenSource = fn() -> Option<String>;

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    api_root: String,
    token: TokenSource,
}

/// `location.origin` of the page, used for same-origin deployments
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Text fields sent next to the file part; `folder_id` only for folder targets
fn upload_text_fields(folder_id: Option<FolderId>) -> Vec<(&'static str, String)> {
    folder_id.map(|id| ("folder_id", id.to_string())).into_iter().collect()
}

impl HttpApi {
    pub fn new(api_root: impl Into<String>, token: TokenSource) -> Self {
        Self {
            client: Client::new(),
            api_root: api_root.into(),
            token,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let origin = page_origin();
        Self::new(config.api_root(origin.as_deref()), session::access_token)
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Request against `path` carrying the current bearer token, if any
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match (self.token)() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn upload_form(file: &UploadFile, folder_id: Option<FolderId>) -> ApiResult<Form> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if !file.mime.is_empty() {
            part = part.mime_str(&file.mime)?;
        }
        let mut form = Form::new().part(UPLOAD_FIELD, part);
        for (name, value) in upload_text_fields(folder_id) {
            form = form.text(name, value);
        }
        Ok(form)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl NotesApi for HttpApi {
    async fn list_folders(&self) -> ApiResult<Vec<Folder>> {
        let records: Vec<FolderRecord> = self.fetch_json(self.request(Method::GET, "/folders")).await?;
        Ok(flatten_folder_records(records))
    }

    async fn create_folder(&self, folder: &NewFolder) -> ApiResult<Folder> {
        self.fetch_json(self.request(Method::POST, "/folders").json(folder)).await
    }

    async fn update_folder(&self, id: FolderId, patch: &FolderPatch) -> ApiResult<Folder> {
        self.fetch_json(self.request(Method::PATCH, &format!("/folders/{}", id)).json(patch))
            .await
    }

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("/folders/{}", id))).await?;
        Ok(())
    }

    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        self.fetch_json(self.request(Method::GET, "/notes")).await
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        self.fetch_json(self.request(Method::POST, "/notes").json(note)).await
    }

    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> ApiResult<Note> {
        self.fetch_json(self.request(Method::PATCH, &format!("/notes/{}", id)).json(patch))
            .await
    }

    async fn set_favorite(&self, id: NoteId, is_favorite: bool) -> ApiResult<Note> {
        let body = FavoritePatch { is_favorite };
        self.fetch_json(self.request(Method::PATCH, &format!("/notes/{}/favorite", id)).json(&body))
            .await
    }

    async fn delete_note(&self, id: NoteId) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("/notes/{}", id))).await?;
        Ok(())
    }

    async fn upload_file(&self, file: &UploadFile, folder_id: Option<FolderId>) -> ApiResult<UploadedFile> {
        let form = Self::upload_form(file, folder_id)?;
        self.fetch_json(self.request(Method::POST, "/files/upload").multipart(form))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn api_with_token() -> HttpApi {
        HttpApi::new("https://notes.example.com/api/v1", || Some("secret-token".to_string()))
    }

    #[test]
    fn test_urls_hang_off_api_root() {
        let config = AppConfig::from_values(Some("https://notes.example.com/"), None);
        let api = HttpApi::new(config.api_root(None), || None);
        assert_eq!(api.url("/folders"), "https://notes.example.com/api/v1/folders");
        assert_eq!(api.url(&format!("/notes/{}/favorite", 7)), "https://notes.example.com/api/v1/notes/7/favorite");
    }

    #[test]
    fn test_same_origin_root_builds_absolute_requests() {
        let root = AppConfig::default().api_root(Some("https://app.example.com"));
        let api = HttpApi::new(root, || None);
        let request = api.request(Method::GET, "/folders").build().unwrap();
        assert_eq!(request.url().as_str(), "https://app.example.com/api/v1/folders");
    }

    #[test]
    fn test_token_sent_as_bearer_on_every_method() {
        let api = api_with_token();
        for (method, path) in [
            (Method::GET, "/folders"),
            (Method::PATCH, "/notes/3"),
            (Method::DELETE, "/folders/1"),
            (Method::POST, "/files/upload"),
        ] {
            let request = api.request(method, path).build().unwrap();
            assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret-token");
        }
    }

    #[test]
    fn test_missing_token_sends_no_authorization() {
        let api = HttpApi::new("https://notes.example.com/api/v1", || None);
        let request = api.request(Method::GET, "/notes").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_folder_id_only_sent_for_folder_targets() {
        assert_eq!(upload_text_fields(Some(5)), vec![("folder_id", "5".to_string())]);
        assert!(upload_text_fields(None).is_empty());
    }

    #[test]
    fn test_upload_form_rejects_bad_mime() {
        let file = UploadFile {
            name: "a.png".into(),
            mime: "not a mime".into(),
            bytes: vec![1, 2, 3],
        };
        assert!(HttpApi::upload_form(&file, None).is_err());

        let file = UploadFile { mime: "image/png".into(), ..file };
        assert!(HttpApi::upload_form(&file, Some(2)).is_ok());
    }
}
