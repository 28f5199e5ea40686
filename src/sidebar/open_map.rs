//! Open/closed state of folder nodes, keyed by folder id

use std::collections::HashMap;

use crate::models::{Folder, FolderId};

/// Folders start closed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenMap(HashMap<FolderId, bool>);

impl OpenMap {
    pub fn is_open(&self, id: FolderId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: FolderId) {
        let open = self.0.entry(id).or_insert(false);
        *open = !*open;
    }

    /// Forget folders that no longer exist
    pub fn retain_existing(&mut self, folders: &[Folder]) {
        self.0.retain(|id, _| folders.iter().any(|f| f.id == *id));
    }
}
