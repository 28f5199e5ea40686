//! Sidebar Core
//!
//! Framework-independent state and mutation protocol behind the folder tree.
//! Components own the signals; everything here can run without a browser.

mod actions;
mod context_menu;
mod open_map;
#[cfg(test)]
mod testing;

pub use actions::{create_folder, handle_drop, run_folder_action, run_note_action, toggle_favorite};
pub use context_menu::{ContextMenu, FolderMenuAction, MenuRect, NoteMenuAction};
pub use open_map::OpenMap;

use async_trait::async_trait;

use crate::models::NoteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// UI side effects the mutation protocol relies on.
///
/// `reload_folders` and `reload_notes` are the only writers of the cached
/// folder and note lists.
#[async_trait(?Send)]
pub trait SidebarHost {
    /// Re-fetch folders and replace the cached flat list
    async fn reload_folders(&self);

    /// Re-fetch notes and rebuild the folder/note index
    async fn reload_notes(&self);

    /// Switch the main pane to the "all notes" view
    fn show_all_notes(&self);

    fn open_note(&self, note_id: NoteId);

    /// Optimistic favorite flag, reconciled by the caller
    fn set_favorite_locally(&self, note_id: NoteId, is_favorite: bool);

    /// Ask for a line of text; None when cancelled
    fn prompt(&self, message: &str) -> Option<String>;

    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, notice: Notice);
}
