//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Folder and note
//! lists are written only by the loaders in `host`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Folder, FolderId, Note, NoteFilter, NoteId};
use crate::sidebar::Notice;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat folder list as last fetched
    pub folders: Vec<Folder>,
    /// All notes as last fetched
    pub notes: Vec<Note>,
    /// Sidebar view selector
    pub filter: NoteFilter,
    /// Folder whose notes the main pane lists (None = use the filter)
    pub selected_folder: Option<FolderId>,
    /// Note opened in the detail pane
    pub selected_note: Option<NoteId>,
    /// Success toast currently shown
    pub toast: Option<Notice>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_folders(store: &AppStore, folders: Vec<Folder>) {
    *store.folders().write() = folders;
}

/// Replace notes, dropping the selection if the note disappeared
pub fn store_set_notes(store: &AppStore, notes: Vec<Note>) {
    if let Some(selected) = store.selected_note().get_untracked() {
        if !notes.iter().any(|n| n.id == selected) {
            store.selected_note().set(None);
        }
    }
    *store.notes().write() = notes;
}

/// Set the favorite flag of a cached note
pub fn store_set_favorite(store: &AppStore, note_id: NoteId, is_favorite: bool) {
    if let Some(note) = store.notes().write().iter_mut().find(|n| n.id == note_id) {
        note.is_favorite = is_favorite;
    }
}

pub fn store_select_filter(store: &AppStore, filter: NoteFilter) {
    store.filter().set(filter);
    store.selected_folder().set(None);
}

pub fn store_select_folder(store: &AppStore, folder_id: FolderId) {
    store.selected_folder().set(Some(folder_id));
}

pub fn store_open_note(store: &AppStore, note_id: NoteId) {
    store.selected_note().set(Some(note_id));
}

/// Currently opened note, if it is still cached (tracked)
pub fn store_selected_note(store: &AppStore) -> Option<Note> {
    let selected = store.selected_note().get()?;
    store.notes().with(|notes| notes.iter().find(|n| n.id == selected).cloned())
}

pub fn store_show_toast(store: &AppStore, notice: Notice) {
    store.toast().set(Some(notice));
}

pub fn store_dismiss_toast(store: &AppStore) {
    store.toast().set(None);
}
