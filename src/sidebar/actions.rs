//! Sidebar Mutation Protocol
//!
//! Every mutation issues its request(s) and then goes back through the host
//! loaders. Cached folders and notes are never patched by hand; the one
//! exception is the optimistic favorite flag, reconciled right after.

use leptos_dragdrop::{DropPayload, DropTarget};

use super::context_menu::{FolderMenuAction, NoteMenuAction};
use super::{Notice, SidebarHost};
use crate::api::{ApiError, ApiResult, NotesApi};
use crate::models::{Folder, FolderId, FolderPatch, NewFolder, NewNote, Note, NoteId, NotePatch, UploadFile};
use crate::tree::can_move_folder;

/// What a drop ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Uploaded { created: Vec<NoteId>, failed: usize },
    NoteMoved { ok: bool },
    FolderMoved { ok: bool },
    /// Folder move refused by the cycle guard; nothing was sent
    Rejected,
}

/// Trimmed prompt answer, None when cancelled or blank
fn prompt_name<H: SidebarHost + ?Sized>(host: &H, message: &str) -> Option<String> {
    host.prompt(message)
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty())
}

fn report<H: SidebarHost + ?Sized>(host: &H, context: &str, err: &ApiError) {
    log::error!("[Sidebar] {}: {}", context, err);
    host.notify(Notice::error(format!("{}: {}", context, err)));
}

// ========================
// Folder / note CRUD
// ========================

pub async fn create_folder<A, H>(api: &A, host: &H, parent_id: Option<FolderId>)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let Some(name) = prompt_name(host, "New folder name") else {
        return;
    };
    match api.create_folder(&NewFolder { name, parent_id }).await {
        Ok(folder) => log::info!("[Sidebar] Created folder {} under {:?}", folder.id, parent_id),
        Err(err) => report(host, "Could not create folder", &err),
    }
    host.reload_folders().await;
}

pub async fn create_note<A, H>(api: &A, host: &H, folder_id: Option<FolderId>)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let Some(title) = prompt_name(host, "New note title") else {
        return;
    };
    let new_note = NewNote {
        title,
        content: String::new(),
        folder_id,
    };
    match api.create_note(&new_note).await {
        Ok(note) => log::info!("[Sidebar] Created note {} in {:?}", note.id, folder_id),
        Err(err) => report(host, "Could not create note", &err),
    }
    host.reload_notes().await;
}

pub async fn rename_folder<A, H>(api: &A, host: &H, folder_id: FolderId)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let Some(name) = prompt_name(host, "Rename folder") else {
        return;
    };
    if let Err(err) = api.update_folder(folder_id, &FolderPatch::rename(name)).await {
        report(host, "Could not rename folder", &err);
    }
    host.reload_folders().await;
}

/// Rename keeps the note in the folder it was shown under
pub async fn rename_note<A, H>(api: &A, host: &H, note_id: NoteId, folder_id: Option<FolderId>)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let Some(title) = prompt_name(host, "Rename note") else {
        return;
    };
    if let Err(err) = api.update_note(note_id, &NotePatch::rename(title, folder_id)).await {
        report(host, "Could not rename note", &err);
    }
    host.reload_notes().await;
}

/// The server may delete contained notes too, so both lists are reloaded
pub async fn delete_folder<A, H>(api: &A, host: &H, folder_id: FolderId)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    if !host.confirm("Delete this folder?") {
        return;
    }
    if let Err(err) = api.delete_folder(folder_id).await {
        report(host, "Could not delete folder", &err);
    }
    host.reload_folders().await;
    host.reload_notes().await;
}

pub async fn delete_note<A, H>(api: &A, host: &H, note_id: NoteId)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    if !host.confirm("Delete this note?") {
        return;
    }
    if let Err(err) = api.delete_note(note_id).await {
        report(host, "Could not delete note", &err);
    }
    host.reload_notes().await;
}

pub async fn run_folder_action<A, H>(api: &A, host: &H, folder_id: FolderId, action: FolderMenuAction)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    match action {
        FolderMenuAction::NewNote => create_note(api, host, Some(folder_id)).await,
        FolderMenuAction::NewFolder => create_folder(api, host, Some(folder_id)).await,
        FolderMenuAction::Rename => rename_folder(api, host, folder_id).await,
        FolderMenuAction::Delete => delete_folder(api, host, folder_id).await,
    }
}

pub async fn run_note_action<A, H>(
    api: &A,
    host: &H,
    note_id: NoteId,
    folder_id: Option<FolderId>,
    action: NoteMenuAction,
) where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    match action {
        NoteMenuAction::Rename => rename_note(api, host, note_id, folder_id).await,
        NoteMenuAction::Delete => delete_note(api, host, note_id).await,
    }
}

// ========================
// Drops
// ========================

pub async fn handle_drop<A, H>(
    api: &A,
    host: &H,
    folders: &[Folder],
    target: DropTarget,
    payload: DropPayload<UploadFile>,
) -> DropOutcome
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    log::debug!("[DND] {} dropped on {:?}", payload.kind(), target);
    match payload {
        DropPayload::Files(files) => drop_files(api, host, target.folder_id(), files).await,
        DropPayload::Note(note_id) => drop_note(api, host, note_id, target.folder_id()).await,
        DropPayload::Folder(folder_id) => drop_folder(api, host, folders, folder_id, target.folder_id()).await,
    }
}

/// Markdown body for a note wrapping an uploaded file
pub fn attachment_markdown(name: &str, url: &str, is_image: bool) -> String {
    let label = name.replace('"', "");
    if is_image {
        format!("![{}]({})", label, url)
    } else {
        format!("[{}]({})", label, url)
    }
}

async fn upload_as_note<A>(api: &A, file: &UploadFile, folder_id: Option<FolderId>) -> ApiResult<Note>
where
    A: NotesApi + ?Sized,
{
    let uploaded = api.upload_file(file, folder_id).await?;
    let title = uploaded
        .original_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| file.name.clone());
    let content = attachment_markdown(&title, &uploaded.url, file.is_image());
    api.create_note(&NewNote {
        title,
        content,
        folder_id,
    })
    .await
}

/// Upload files one after another, each becoming a note in `folder_id`.
///
/// A failed file is logged and skipped. Afterwards notes are reloaded, the
/// view switches to all notes and the last created note is opened.
pub async fn drop_files<A, H>(api: &A, host: &H, folder_id: Option<FolderId>, files: Vec<UploadFile>) -> DropOutcome
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let mut created = Vec::new();
    let mut failed = 0;
    for file in &files {
        match upload_as_note(api, file, folder_id).await {
            Ok(note) => {
                log::info!("[DND] Uploaded \"{}\" as note {}", file.name, note.id);
                created.push(note.id);
            }
            Err(err) => {
                log::error!("[DND] Upload of \"{}\" failed: {}", file.name, err);
                failed += 1;
            }
        }
    }

    host.reload_notes().await;
    host.show_all_notes();
    if let Some(&last) = created.last() {
        host.open_note(last);
    }
    if failed > 0 {
        host.notify(Notice::error(format!(
            "{} of {} file(s) could not be uploaded",
            failed,
            files.len()
        )));
    }
    DropOutcome::Uploaded { created, failed }
}

/// Move a note; failures are only logged, the reload shows the real state
pub async fn drop_note<A, H>(api: &A, host: &H, note_id: NoteId, folder_id: Option<FolderId>) -> DropOutcome
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let result = api.update_note(note_id, &NotePatch::move_to(folder_id)).await;
    if let Err(err) = &result {
        log::error!("[DND] Moving note {} to {:?} failed: {}", note_id, folder_id, err);
    }
    host.reload_notes().await;
    host.show_all_notes();
    DropOutcome::NoteMoved { ok: result.is_ok() }
}

/// Reparent a folder unless that would put it inside its own subtree
pub async fn drop_folder<A, H>(
    api: &A,
    host: &H,
    folders: &[Folder],
    folder_id: FolderId,
    target: Option<FolderId>,
) -> DropOutcome
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    if !can_move_folder(folders, folder_id, target) {
        log::warn!("[DND] Refusing to move folder {} into {:?}", folder_id, target);
        return DropOutcome::Rejected;
    }
    let result = api.update_folder(folder_id, &FolderPatch::reparent(target)).await;
    if let Err(err) = &result {
        report(host, "Could not move folder", err);
    }
    host.reload_folders().await;
    DropOutcome::FolderMoved { ok: result.is_ok() }
}

// ========================
// Favorites
// ========================

/// Flip the favorite flag optimistically, then reconcile with the server
pub async fn toggle_favorite<A, H>(api: &A, host: &H, note: &Note)
where
    A: NotesApi + ?Sized,
    H: SidebarHost + ?Sized,
{
    let wanted = !note.is_favorite;
    host.set_favorite_locally(note.id, wanted);
    match api.set_favorite(note.id, wanted).await {
        Ok(updated) => {
            host.set_favorite_locally(updated.id, updated.is_favorite);
            let message = if updated.is_favorite {
                "Added to favorites"
            } else {
                "Removed from favorites"
            };
            host.notify(Notice::success(message));
        }
        Err(err) => {
            report(host, "Could not update favorite", &err);
            host.reload_notes().await;
        }
    }
}
