//! Tree Utilities
//!
//! Builds the folder forest rendered by the sidebar and guards folder moves
//! against cycles.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::models::{Folder, FolderId, Note};

/// Notes grouped by folder; `None` is the root
pub type FolderNoteMap = HashMap<Option<FolderId>, Vec<Note>>;

/// Folder with its subfolders and notes attached, rebuilt on every change
#[derive(Debug, Clone, PartialEq)]
pub struct FolderNode {
    pub id: FolderId,
    pub name: String,
    pub parent_id: Option<FolderId>,
    pub user_id: Option<i64>,
    pub children: Vec<FolderNode>,
    pub notes: Vec<Note>,
}

impl FolderNode {
    fn from_folder(folder: &Folder, note_map: &FolderNoteMap) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            user_id: folder.user_id,
            children: Vec::new(),
            notes: note_map.get(&Some(folder.id)).cloned().unwrap_or_default(),
        }
    }
}

/// Group notes by `folder_id`, keeping server order inside each folder
pub fn group_notes_by_folder(notes: &[Note]) -> FolderNoteMap {
    let mut map: FolderNoteMap = HashMap::new();
    for note in notes {
        map.entry(note.folder_id).or_default().push(note.clone());
    }
    map
}

/// Build the folder forest from a flat list.
///
/// Roots are folders without a parent; children keep input order. Folders
/// whose parent is missing (orphans) are dropped together with their
/// subtrees, and a repeated id only counts once.
pub fn build_folder_tree(folders: &[Folder], note_map: &FolderNoteMap) -> Vec<FolderNode> {
    let mut seen = HashSet::new();
    let unique: Vec<&Folder> = folders.iter().filter(|f| seen.insert(f.id)).collect();

    // Build parent -> children map
    let mut children_map: HashMap<Option<FolderId>, Vec<&Folder>> = HashMap::new();
    for &folder in &unique {
        children_map.entry(folder.parent_id).or_default().push(folder);
    }

    // Every id has a single parent, so nothing reachable from a root can loop
    fn assemble(
        folder: &Folder,
        children_map: &HashMap<Option<FolderId>, Vec<&Folder>>,
        note_map: &FolderNoteMap,
    ) -> FolderNode {
        let mut node = FolderNode::from_folder(folder, note_map);
        if let Some(children) = children_map.get(&Some(folder.id)) {
            node.children = children
                .iter()
                .map(|child| assemble(child, children_map, note_map))
                .collect();
        }
        node
    }

    children_map
        .get(&None)
        .map(|roots| {
            roots
                .iter()
                .map(|root| assemble(root, &children_map, note_map))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether `target` lies strictly below `dragged`.
///
/// Breadth-first over child edges starting at `dragged`; the start node is
/// only reported if a malformed list leads back to it.
pub fn is_descendant(folders: &[Folder], dragged: FolderId, target: FolderId) -> bool {
    let mut children: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
    for folder in folders {
        if let Some(parent) = folder.parent_id {
            children.entry(parent).or_default().push(folder.id);
        }
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([dragged]);
    while let Some(current) = queue.pop_front() {
        for &child in children.get(&current).map(Vec::as_slice).unwrap_or_default() {
            if child == target {
                return true;
            }
            if visited.insert(child) {
                queue.push_back(child);
            }
        }
    }
    false
}

/// Whether `dragged` may become a child of `target` (None = root)
pub fn can_move_folder(folders: &[Folder], dragged: FolderId, target: Option<FolderId>) -> bool {
    match target {
        None => true,
        Some(target) if target == dragged => false,
        Some(target) => !is_descendant(folders, dragged, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count_nodes(forest: &[FolderNode]) -> usize {
        forest.iter().map(|node| 1 + count_nodes(&node.children)).sum()
    }

    fn make_folder(id: FolderId, parent_id: Option<FolderId>) -> Folder {
        Folder {
            id,
            name: format!("Folder {}", id),
            parent_id,
            user_id: Some(1),
        }
    }

    fn make_note(id: i64, folder_id: Option<FolderId>) -> Note {
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

    fn chain() -> Vec<Folder> {
        vec![make_folder(1, None), make_folder(2, Some(1)), make_folder(3, Some(2))]
    }

    #[test]
    fn test_build_folder_tree() {
        let folders = vec![
            make_folder(4, Some(1)), // listed before its parent
            make_folder(1, None),
            make_folder(2, None),
            make_folder(3, Some(1)),
            make_folder(5, Some(3)),
        ];
        let notes = vec![make_note(10, Some(3)), make_note(11, None), make_note(12, Some(3))];

        let tree = build_folder_tree(&folders, &group_notes_by_folder(&notes));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, 1);
        assert_eq!(tree[1].id, 2);
        let child_ids: Vec<FolderId> = tree[0].children.iter().map(|c| c.id).collect();
        assert_eq!(child_ids, vec![4, 3]);
        let three = &tree[0].children[1];
        assert_eq!(three.notes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![10, 12]);
        assert_eq!(three.children[0].id, 5);
        assert!(tree[1].notes.is_empty());
    }

    #[test]
    fn test_orphans_are_dropped_with_their_subtree() {
        let folders = vec![make_folder(1, None), make_folder(2, Some(99)), make_folder(3, Some(2))];
        let tree = build_folder_tree(&folders, &FolderNoteMap::new());
        assert_eq!(count_nodes(&tree), 1);
        assert_eq!(tree[0].id, 1);
    }

    #[test]
    fn test_duplicate_ids_appear_once() {
        let folders = vec![make_folder(1, None), make_folder(2, Some(1)), make_folder(2, None)];
        let tree = build_folder_tree(&folders, &FolderNoteMap::new());
        assert_eq!(count_nodes(&tree), 2);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_malformed_cycle_is_unreachable() {
        let folders = vec![make_folder(1, Some(2)), make_folder(2, Some(1)), make_folder(3, None)];
        let tree = build_folder_tree(&folders, &FolderNoteMap::new());
        assert_eq!(count_nodes(&tree), 1);
        assert!(!is_descendant(&folders, 3, 1));
        assert!(is_descendant(&folders, 1, 2));
    }

    #[test]
    fn test_root_notes_stay_under_root_key() {
        let map = group_notes_by_folder(&[make_note(1, None), make_note(2, Some(4)), make_note(3, None)]);
        assert_eq!(map[&None].iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(map[&Some(4)].len(), 1);
    }

    #[test]
    fn test_move_ancestor_under_descendant_is_rejected() {
        let folders = chain();
        assert!(is_descendant(&folders, 1, 3));
        assert!(!can_move_folder(&folders, 1, Some(3)));
    }

    #[test]
    fn test_move_under_current_ancestor_is_allowed() {
        let folders = chain();
        assert!(!is_descendant(&folders, 3, 1));
        assert!(can_move_folder(&folders, 3, Some(1)));
    }

    #[test]
    fn test_move_onto_itself_is_rejected() {
        let folders = chain();
        assert!(!is_descendant(&folders, 2, 2));
        assert!(!can_move_folder(&folders, 2, Some(2)));
    }

    #[test]
    fn test_move_to_root_is_always_allowed() {
        assert!(can_move_folder(&chain(), 3, None));
    }

    /// Acyclic flat lists in shuffled order: folder `i` may only hang below an
    /// earlier id, then the list order is permuted.
    fn acyclic_folders() -> impl Strategy<Value = Vec<Folder>> {
        (1usize..24)
            .prop_flat_map(|n| {
                let parents: Vec<BoxedStrategy<Option<FolderId>>> = (0..n)
                    .map(|i| {
                        if i == 0 {
                            Just(None).boxed()
                        } else {
                            prop::option::of(1..=(i as FolderId)).boxed()
                        }
                    })
                    .collect();
                parents
            })
            .prop_map(|parents| {
                parents
                    .into_iter()
                    .enumerate()
                    .map(|(i, parent)| make_folder(i as FolderId + 1, parent))
                    .collect::<Vec<_>>()
            })
            .prop_shuffle()
    }

    fn ancestors(folders: &[Folder], id: FolderId) -> Vec<FolderId> {
        let parent_of: HashMap<FolderId, Option<FolderId>> = folders.iter().map(|f| (f.id, f.parent_id)).collect();
        let mut out = Vec::new();
        let mut current = parent_of.get(&id).copied().flatten();
        while let Some(parent) = current {
            out.push(parent);
            current = parent_of.get(&parent).copied().flatten();
        }
        out
    }

    fn collect_nodes<'a>(forest: &'a [FolderNode], out: &mut Vec<&'a FolderNode>) {
        for node in forest {
            out.push(node);
            collect_nodes(&node.children, out);
        }
    }

    proptest! {
        #[test]
        fn prop_tree_contains_every_folder_once(folders in acyclic_folders()) {
            let tree = build_folder_tree(&folders, &FolderNoteMap::new());
            prop_assert_eq!(count_nodes(&tree), folders.len());

            let mut nodes = Vec::new();
            collect_nodes(&tree, &mut nodes);
            for node in nodes {
                let expected: Vec<FolderId> = folders
                    .iter()
                    .filter(|f| f.parent_id == Some(node.id))
                    .map(|f| f.id)
                    .collect();
                let actual: Vec<FolderId> = node.children.iter().map(|c| c.id).collect();
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn prop_rebuild_is_idempotent(folders in acyclic_folders(), note_folders in prop::collection::vec(prop::option::of(1i64..30), 0..20)) {
            let notes: Vec<Note> = note_folders
                .into_iter()
                .enumerate()
                .map(|(i, folder_id)| make_note(i as i64, folder_id))
                .collect();
            let map = group_notes_by_folder(&notes);
            prop_assert_eq!(build_folder_tree(&folders, &map), build_folder_tree(&folders, &map));
        }

        #[test]
        fn prop_cycle_guard_matches_ancestry(folders in acyclic_folders()) {
            for dragged in folders.iter().map(|f| f.id) {
                for target in folders.iter().map(|f| f.id) {
                    let below = ancestors(&folders, target).contains(&dragged);
                    prop_assert_eq!(is_descendant(&folders, dragged, target), below);
                    prop_assert_eq!(can_move_folder(&folders, dragged, Some(target)), target != dragged && !below);
                }
            }
        }
    }
}
