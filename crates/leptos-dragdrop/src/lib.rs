//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for the folder tree. Drag sources write a kind marker
//! and an id into the `DataTransfer`; drop targets decode them back into a
//! tagged payload. Files dropped from outside the page carry no marker.

use leptos::prelude::*;

/// DataTransfer format holding the payload kind marker
pub const KIND_FORMAT: &str = "text/x-noteflow-kind";
/// DataTransfer format holding the dragged entity id
pub const ID_FORMAT: &str = "text/x-noteflow-id";

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// The root zone (no parent folder)
    Root,
    /// A folder label
    Folder(i64),
}

impl DropTarget {
    /// Target for something shown under `parent` (None = root)
    pub fn from_parent(parent: Option<i64>) -> Self {
        match parent {
            None => DropTarget::Root,
            Some(id) => DropTarget::Folder(id),
        }
    }

    /// Folder id to store as the new parent (None = root)
    pub fn folder_id(self) -> Option<i64> {
        match self {
            DropTarget::Root => None,
            DropTarget::Folder(id) => Some(id),
        }
    }
}

/// Entity dragged out of the tree or note list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Note(i64),
    Folder(i64),
}

impl DragSource {
    pub fn kind(&self) -> &'static str {
        match self {
            DragSource::Note(_) => "note",
            DragSource::Folder(_) => "folder",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            DragSource::Note(id) | DragSource::Folder(id) => *id,
        }
    }
}

/// Decoded drop payload. Generic over the file handle so the decoding rules
/// do not depend on the browser.
#[derive(Clone, Debug, PartialEq)]
pub enum DropPayload<F> {
    Files(Vec<F>),
    Note(i64),
    Folder(i64),
}

impl<F> DropPayload<F> {
    /// Decode from the kind marker, id and dropped files.
    ///
    /// A marker always wins over files; without a marker only a non-empty
    /// file list is a valid payload.
    pub fn decode(kind: &str, id: &str, files: Vec<F>) -> Option<Self> {
        match kind.trim() {
            "note" => id.trim().parse().ok().map(DropPayload::Note),
            "folder" => id.trim().parse().ok().map(DropPayload::Folder),
            "" if !files.is_empty() => Some(DropPayload::Files(files)),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DropPayload::Files(_) => "files",
            DropPayload::Note(_) => "note",
            DropPayload::Folder(_) => "folder",
        }
    }
}

/// Write the drag source into the event's DataTransfer
pub fn start_drag(ev: &web_sys::DragEvent, source: DragSource) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(KIND_FORMAT, source.kind());
        let _ = dt.set_data(ID_FORMAT, &source.id().to_string());
        dt.set_effect_allowed("move");
    }
}

/// Read the payload of a drop event
pub fn read_drop(ev: &web_sys::DragEvent) -> Option<DropPayload<web_sys::File>> {
    let dt = ev.data_transfer()?;
    let kind = dt.get_data(KIND_FORMAT).unwrap_or_default();
    let id = dt.get_data(ID_FORMAT).unwrap_or_default();

    let mut files = Vec::new();
    if let Some(list) = dt.files() {
        for i in 0..list.length() {
            if let Some(file) = list.get(i) {
                files.push(file);
            }
        }
    }
    DropPayload::decode(&kind, &id, files)
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
}

/// Whether `target` is the highlighted drop target (tracked)
pub fn is_drop_target(dnd: &DndSignals, target: DropTarget) -> bool {
    dnd.drop_target_read.get() == Some(target)
}

/// Create dragstart handler for a draggable note or folder
pub fn make_on_dragstart(dnd: DndSignals, source: DragSource) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.stop_propagation();
        start_drag(&ev, source);
        dnd.dragging_write.set(Some(source));
    }
}

/// Create dragend handler (fires on the source whether or not it was dropped)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// Create dragover handler; accepting the drop requires preventing the default
pub fn make_on_dragover(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if dnd.drop_target_read.get_untracked() != Some(target) {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if dnd.drop_target_read.get_untracked() == Some(target) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create drop handler; `on_drop` only runs for decodable payloads
pub fn make_on_drop<F>(dnd: DndSignals, target: DropTarget, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(DropTarget, DropPayload<web_sys::File>) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        end_drag(&dnd);
        if let Some(payload) = read_drop(&ev) {
            on_drop(target, payload);
        }
    }
}
