//! Note list selection for the main pane

use std::cmp::Reverse;

use crate::models::{FolderId, Note, NoteFilter};

/// How many notes the "recent" view shows
pub const RECENT_LIMIT: usize = 20;

/// Notes shown in the main pane.
///
/// A selected folder wins over the filter and lists that folder's notes in
/// server order.
pub fn filter_notes(notes: &[Note], filter: NoteFilter, folder: Option<FolderId>) -> Vec<Note> {
    if let Some(folder_id) = folder {
        return notes.iter().filter(|n| n.folder_id == Some(folder_id)).cloned().collect();
    }
    match filter {
        NoteFilter::All => notes.to_vec(),
        NoteFilter::Favorites => notes.iter().filter(|n| n.is_favorite).cloned().collect(),
        NoteFilter::Recent => {
            let mut recent = notes.to_vec();
            // Stable sort, undated notes go last
            recent.sort_by_key(|n| Reverse(n.last_touched()));
            recent.truncate(RECENT_LIMIT);
            recent
        }
    }
}
