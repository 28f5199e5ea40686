//! In-memory `NotesApi` and `SidebarHost` recorders for protocol tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{Notice, SidebarHost};
use crate::api::{ApiError, ApiResult, NotesApi};
use crate::models::{
    Folder, FolderId, FolderPatch, NewFolder, NewNote, Note, NoteId, NotePatch, UploadFile, UploadedFile,
};

pub fn make_folder(id: FolderId, parent_id: Option<FolderId>) -> Folder {
    Folder {
        id,
        name: format!("Folder {}", id),
        parent_id,
        user_id: Some(1),
    }
}

pub fn make_note(id: NoteId, folder_id: Option<FolderId>) -> Note {
    Note {
        id,
        title: format!("Note {}", id),
        content: String::new(),
        folder_id,
        is_favorite: false,
        created_at: None,
        updated_at: None,
    }
}

pub fn upload(name: &str, mime: &str) -> UploadFile {
    UploadFile {
        name: name.to_string(),
        mime: mime.to_string(),
        bytes: name.as_bytes().to_vec(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListFolders,
    CreateFolder(NewFolder),
    UpdateFolder(FolderId, FolderPatch),
    DeleteFolder(FolderId),
    ListNotes,
    CreateNote(NewNote),
    UpdateNote(NoteId, NotePatch),
    SetFavorite(NoteId, bool),
    DeleteNote(NoteId),
    Upload(String, Option<FolderId>),
}

pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<i64>,
    failing_uploads: Vec<String>,
    fail_updates: bool,
    fail_creates: bool,
    fail_favorite: bool,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
            failing_uploads: Vec::new(),
            fail_updates: false,
            fail_creates: false,
            fail_favorite: false,
        }
    }

    pub fn failing_upload(mut self, name: &str) -> Self {
        self.failing_uploads.push(name.to_string());
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn failing_creates(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    pub fn failing_favorite(mut self) -> Self {
        self.fail_favorite = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".into(),
        }
    }
}

#[async_trait(?Send)]
impl NotesApi for MockApi {
    async fn list_folders(&self) -> ApiResult<Vec<Folder>> {
        self.record(Call::ListFolders);
        Ok(Vec::new())
    }

    async fn create_folder(&self, folder: &NewFolder) -> ApiResult<Folder> {
        self.record(Call::CreateFolder(folder.clone()));
        if self.fail_creates {
            return Err(Self::failure());
        }
        Ok(Folder {
            id: self.next_id(),
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            user_id: Some(1),
        })
    }

    async fn update_folder(&self, id: FolderId, patch: &FolderPatch) -> ApiResult<Folder> {
        self.record(Call::UpdateFolder(id, patch.clone()));
        if self.fail_updates {
            return Err(Self::failure());
        }
        Ok(make_folder(id, patch.parent_id.flatten()))
    }

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()> {
        self.record(Call::DeleteFolder(id));
        Ok(())
    }

    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        self.record(Call::ListNotes);
        Ok(Vec::new())
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        self.record(Call::CreateNote(note.clone()));
        if self.fail_creates {
            return Err(Self::failure());
        }
        Ok(Note {
            title: note.title.clone(),
            content: note.content.clone(),
            ..make_note(self.next_id(), note.folder_id)
        })
    }

    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> ApiResult<Note> {
        self.record(Call::UpdateNote(id, patch.clone()));
        if self.fail_updates {
            return Err(Self::failure());
        }
        Ok(make_note(id, patch.folder_id.flatten()))
    }

    async fn set_favorite(&self, id: NoteId, is_favorite: bool) -> ApiResult<Note> {
        self.record(Call::SetFavorite(id, is_favorite));
        if self.fail_favorite {
            return Err(Self::failure());
        }
        Ok(Note {
            is_favorite,
            ..make_note(id, None)
        })
    }

    async fn delete_note(&self, id: NoteId) -> ApiResult<()> {
        self.record(Call::DeleteNote(id));
        Ok(())
    }

    async fn upload_file(&self, file: &UploadFile, folder_id: Option<FolderId>) -> ApiResult<UploadedFile> {
        self.record(Call::Upload(file.name.clone(), folder_id));
        if self.failing_uploads.contains(&file.name) {
            return Err(ApiError::Network("connection reset".into()));
        }
        Ok(UploadedFile {
            url: format!("/files/{}", file.name),
            original_name: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ReloadFolders,
    ReloadNotes,
    ShowAll,
    OpenNote(NoteId),
    FavoriteLocally(NoteId, bool),
    Notify(Notice),
}

/// Records host effects; prompts pop scripted answers, confirm returns a fixed answer
#[derive(Default)]
pub struct MockHost {
    events: RefCell<Vec<HostEvent>>,
    answers: RefCell<VecDeque<Option<String>>>,
    confirm_answer: bool,
}

impl MockHost {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            ..Default::default()
        }
    }

    pub fn confirming() -> Self {
        Self {
            confirm_answer: true,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: &HostEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    fn push(&self, event: HostEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[async_trait(?Send)]
impl SidebarHost for MockHost {
    async fn reload_folders(&self) {
        self.push(HostEvent::ReloadFolders);
    }

    async fn reload_notes(&self) {
        self.push(HostEvent::ReloadNotes);
    }

    fn show_all_notes(&self) {
        self.push(HostEvent::ShowAll);
    }

    fn open_note(&self, note_id: NoteId) {
        self.push(HostEvent::OpenNote(note_id));
    }

    fn set_favorite_locally(&self, note_id: NoteId, is_favorite: bool) {
        self.push(HostEvent::FavoriteLocally(note_id, is_favorite));
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.answers.borrow_mut().pop_front().flatten()
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirm_answer
    }

    fn notify(&self, notice: Notice) {
        self.push(HostEvent::Notify(notice));
    }
}
