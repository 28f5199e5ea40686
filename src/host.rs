//! Browser Host
//!
//! `SidebarHost` backed by the app store and `window` dialogs. The two
//! loaders here are the only code that replaces cached folders and notes.

use async_trait::async_trait;
use leptos::prelude::*;

use crate::api::NotesApi;
use crate::context::AppContext;
use crate::models::{NoteFilter, NoteId};
use crate::sidebar::{Notice, NoticeLevel, SidebarHost};
use crate::store::{
    store_open_note, store_select_filter, store_set_favorite, store_set_folders, store_set_notes, store_show_toast,
};

#[derive(Clone, Copy)]
pub struct BrowserHost {
    ctx: AppContext,
}

impl BrowserHost {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

#[async_trait(?Send)]
impl SidebarHost for BrowserHost {
    async fn reload_folders(&self) {
        match self.ctx.api().list_folders().await {
            Ok(folders) => {
                log::debug!("[Loader] Loaded {} folders", folders.len());
                self.ctx.open_map.update(|map| map.retain_existing(&folders));
                store_set_folders(&self.ctx.store, folders);
            }
            // Keep showing the last good list
            Err(err) => log::error!("[Loader] Loading folders failed: {}", err),
        }
    }

    async fn reload_notes(&self) {
        match self.ctx.api().list_notes().await {
            Ok(notes) => {
                log::debug!("[Loader] Loaded {} notes", notes.len());
                store_set_notes(&self.ctx.store, notes);
            }
            Err(err) => log::error!("[Loader] Loading notes failed: {}", err),
        }
    }

    fn show_all_notes(&self) {
        store_select_filter(&self.ctx.store, NoteFilter::All);
    }

    fn open_note(&self, note_id: NoteId) {
        store_open_note(&self.ctx.store, note_id);
    }

    fn set_favorite_locally(&self, note_id: NoteId, is_favorite: bool) {
        store_set_favorite(&self.ctx.store, note_id, is_favorite);
    }

    fn prompt(&self, message: &str) -> Option<String> {
        web_sys::window()?.prompt_with_message(message).ok().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(&notice.message);
                }
            }
            NoticeLevel::Success => store_show_toast(&self.ctx.store, notice),
        }
    }
}
