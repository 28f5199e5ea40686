//! Folder Node Component
//!
//! One folder of the sidebar tree with its subfolders and notes.

use leptos::prelude::*;
use leptos_dragdrop::{
    is_drop_target, make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop, DragSource,
    DropTarget,
};

use super::dropped::dispatch_drop;
use crate::context::use_app_context;
use crate::models::{FolderId, Note};
use crate::store::{store_open_note, store_select_folder, AppStateStoreFields};
use crate::tree::FolderNode;

const INDENT_PX: usize = 14;

/// Recursive, so the view is erased to `AnyView`
#[component]
pub fn FolderNodeView(node: FolderNode, depth: usize) -> AnyView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let id = node.id;
    let target = DropTarget::Folder(id);

    let is_open = move || ctx.open_map.with(|map| map.is_open(id));
    let is_selected = move || ctx.store.selected_folder().get() == Some(id);
    let row_class = move || {
        let mut class = String::from("folder-row");
        if is_selected() {
            class.push_str(" selected");
        }
        if is_drop_target(&dnd, target) {
            class.push_str(" drop-target");
        }
        class
    };

    let on_click = move |_| {
        ctx.open_map.update(|map| map.toggle(id));
        store_select_folder(&ctx.store, id);
    };
    let on_contextmenu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.menu.update(|menu| menu.open_folder(id, ev.client_x(), ev.client_y()));
    };

    let children = node.children;
    let notes = node.notes;

    // The whole node (row, subfolders, notes) is the target; nested nodes
    // stop propagation so the innermost folder wins
    view! {
        <li
            class="folder-node"
            on:dragover=make_on_dragover(dnd, target)
            on:dragleave=make_on_dragleave(dnd, target)
            on:drop=make_on_drop(dnd, target, move |target, payload| dispatch_drop(ctx, target, payload))
        >
            <div
                class=row_class
                style=format!("padding-left: {}px;", depth * INDENT_PX)
                draggable="true"
                on:click=on_click
                on:contextmenu=on_contextmenu
                on:dragstart=make_on_dragstart(dnd, DragSource::Folder(id))
                on:dragend=make_on_dragend(dnd)
            >
                <span class="folder-toggle">{move || if is_open() { "▼" } else { "▶" }}</span>
                <span class="folder-icon">"📁"</span>
                <span class="folder-name">{node.name}</span>
            </div>
            <Show when=is_open>
                <ul class="folder-children">
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| view! { <FolderNodeView node=child depth={depth + 1} /> })
                        .collect_view()}
                    {notes
                        .clone()
                        .into_iter()
                        .map(|note| view! { <NoteRow note=note folder_id=Some(id) depth={depth + 1} /> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
    .into_any()
}

/// Draggable note entry in the sidebar tree; drops on it go to its folder
#[component]
pub fn NoteRow(note: Note, folder_id: Option<FolderId>, depth: usize) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let id = note.id;
    let target = DropTarget::from_parent(folder_id);
    let is_selected = move || ctx.store.selected_note().get() == Some(id);

    view! {
        <li
            class=move || if is_selected() { "note-row selected" } else { "note-row" }
            style=format!("padding-left: {}px;", depth * INDENT_PX)
            draggable="true"
            on:click=move |_| store_open_note(&ctx.store, id)
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                ctx.menu.update(|menu| menu.open_note(id, folder_id, ev.client_x(), ev.client_y()));
            }
            on:dragstart=make_on_dragstart(dnd, DragSource::Note(id))
            on:dragend=make_on_dragend(dnd)
            on:dragover=make_on_dragover(dnd, target)
            on:dragleave=make_on_dragleave(dnd, target)
            on:drop=make_on_drop(dnd, target, move |target, payload| dispatch_drop(ctx, target, payload))
        >
            <span class="note-icon">{if note.is_favorite { "★" } else { "📝" }}</span>
            <span class="note-title">{note.title}</span>
        </li>
    }
}
