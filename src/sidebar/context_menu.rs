//! Context Menu State
//!
//! At most one menu is open: opening a folder menu replaces an open note
//! menu and vice versa.

use crate::models::{FolderId, NoteId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContextMenu {
    #[default]
    Closed,
    Folder {
        folder_id: FolderId,
        x: i32,
        y: i32,
    },
    Note {
        note_id: NoteId,
        /// Folder the note was shown under (None = root)
        folder_id: Option<FolderId>,
        x: i32,
        y: i32,
    },
}

/// Bounding rectangle of the rendered menu, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl MenuRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

impl ContextMenu {
    pub fn open_folder(&mut self, folder_id: FolderId, x: i32, y: i32) {
        *self = ContextMenu::Folder { folder_id, x, y };
    }

    pub fn open_note(&mut self, note_id: NoteId, folder_id: Option<FolderId>, x: i32, y: i32) {
        *self = ContextMenu::Note { note_id, folder_id, x, y };
    }

    pub fn close(&mut self) {
        *self = ContextMenu::Closed;
    }

    /// Close the menu, returning what was open (used when running an action)
    pub fn take(&mut self) -> ContextMenu {
        std::mem::take(self)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ContextMenu::Closed)
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            ContextMenu::Closed => None,
            ContextMenu::Folder { x, y, .. } | ContextMenu::Note { x, y, .. } => Some((x, y)),
        }
    }

    /// Primary pointer-down at (x, y). Closes unless it lands inside the
    /// rendered menu.
    pub fn pointer_down(&mut self, x: f64, y: f64, bounds: Option<MenuRect>) {
        if !self.is_open() {
            return;
        }
        let inside = bounds.map(|rect| rect.contains(x, y)).unwrap_or(false);
        if !inside {
            self.close();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderMenuAction {
    NewNote,
    NewFolder,
    Rename,
    Delete,
}

impl FolderMenuAction {
    pub const ALL: [FolderMenuAction; 4] = [
        FolderMenuAction::NewNote,
        FolderMenuAction::NewFolder,
        FolderMenuAction::Rename,
        FolderMenuAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FolderMenuAction::NewNote => "➕ New note",
            FolderMenuAction::NewFolder => "➕ New folder",
            FolderMenuAction::Rename => "✏️ Rename",
            FolderMenuAction::Delete => "🗑️ Delete folder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteMenuAction {
    Rename,
    Delete,
}

impl NoteMenuAction {
    pub const ALL: [NoteMenuAction; 2] = [NoteMenuAction::Rename, NoteMenuAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            NoteMenuAction::Rename => "✏️ Rename",
            NoteMenuAction::Delete => "🗑️ Delete note",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_at(x: i32, y: i32) -> MenuRect {
        MenuRect {
            left: x as f64,
            top: y as f64,
            width: 160.0,
            height: 120.0,
        }
    }

    #[test]
    fn test_note_menu_replaces_open_folder_menu() {
        let mut menu = ContextMenu::default();
        menu.open_folder(3, 10, 20);
        assert_eq!(menu, ContextMenu::Folder { folder_id: 3, x: 10, y: 20 });

        menu.open_note(7, Some(3), 40, 90);
        assert_eq!(
            menu,
            ContextMenu::Note { note_id: 7, folder_id: Some(3), x: 40, y: 90 }
        );
        assert_eq!(menu.position(), Some((40, 90)));

        // Clicking elsewhere closes it
        menu.pointer_down(500.0, 500.0, Some(rect_at(40, 90)));
        assert_eq!(menu, ContextMenu::Closed);
    }

    #[test]
    fn test_click_inside_menu_keeps_it_open() {
        let mut menu = ContextMenu::default();
        menu.open_folder(1, 100, 100);
        menu.pointer_down(150.0, 130.0, Some(rect_at(100, 100)));
        assert!(menu.is_open());
    }

    #[test]
    fn test_click_without_rendered_menu_closes() {
        let mut menu = ContextMenu::default();
        menu.open_note(2, None, 0, 0);
        menu.pointer_down(0.0, 0.0, None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_take_returns_target_and_closes() {
        let mut menu = ContextMenu::default();
        menu.open_folder(9, 1, 2);
        assert_eq!(menu.take(), ContextMenu::Folder { folder_id: 9, x: 1, y: 2 });
        assert_eq!(menu, ContextMenu::Closed);
        assert_eq!(menu.take(), ContextMenu::Closed);
    }

    #[test]
    fn test_pointer_down_while_closed_is_noop() {
        let mut menu = ContextMenu::Closed;
        menu.pointer_down(1.0, 1.0, None);
        assert_eq!(menu, ContextMenu::Closed);
        assert_eq!(menu.position(), None);
    }
}
