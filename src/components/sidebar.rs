//! Sidebar Component
//!
//! View selector, the folder tree with root-level notes, and the root drop
//! strip below it. Owns the document listener that dismisses the context menu.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{is_drop_target, make_on_dragleave, make_on_dragover, make_on_drop, DropTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::context_menu::ContextMenuView;
use super::dropped::dispatch_drop;
use super::folder_node::{FolderNodeView, NoteRow};
use crate::context::use_app_context;
use crate::models::{Note, NoteFilter};
use crate::sidebar::{create_folder, ContextMenu, MenuRect};
use crate::store::{store_select_filter, AppStateStoreFields};
use crate::tree::{build_folder_tree, group_notes_by_folder};

/// Close the context menu on any primary mousedown outside of it
fn bind_menu_dismiss(menu: RwSignal<ContextMenu>, menu_ref: NodeRef<Div>) {
    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let current = menu.get_untracked();
        if !current.is_open() {
            return;
        }
        let bounds = menu_ref.get_untracked().map(|el| {
            let rect = el.get_bounding_client_rect();
            MenuRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            }
        });
        let mut next = current;
        next.pointer_down(ev.client_x() as f64, ev.client_y() as f64, bounds);
        if next != current {
            menu.set(next);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
        }
    }
    on_mousedown.forget();
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let dnd = ctx.dnd;
    let menu_ref = NodeRef::<Div>::new();

    bind_menu_dismiss(ctx.menu, menu_ref);

    // Rebuilt whenever either list is replaced
    let tree = Memo::new(move |_| {
        let folders = store.folders().get();
        let notes = store.notes().get();
        build_folder_tree(&folders, &group_notes_by_folder(&notes))
    });
    let root_notes = Memo::new(move |_| {
        store
            .notes()
            .with(|notes| notes.iter().filter(|n| n.folder_id.is_none()).cloned().collect::<Vec<Note>>())
    });

    let root = DropTarget::Root;
    let root_class = move || {
        if is_drop_target(&dnd, root) {
            "root-drop-zone drop-target"
        } else {
            "root-drop-zone"
        }
    };

    let new_root_folder = move |_| {
        spawn_local(async move {
            create_folder(&ctx.api(), &ctx.host(), None).await;
        });
    };

    view! {
        <aside class="sidebar">
            <nav class="note-filters">
                {NoteFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let active = move || store.filter().get() == filter && store.selected_folder().get().is_none();
                        view! {
                            <button
                                class=move || if active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| store_select_filter(&store, filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-header">
                <h3>"Folders"</h3>
                <button class="add-folder-btn" title="New folder" on:click=new_root_folder>"+"</button>
            </div>

            <ul class="folder-list">
                {move || {
                    tree.get()
                        .into_iter()
                        .map(|node| view! { <FolderNodeView node=node depth=0 /> })
                        .collect_view()
                }}
                <For
                    each=move || root_notes.get()
                    key=|note| (note.id, note.title.clone(), note.is_favorite)
                    children=move |note| view! { <NoteRow note=note folder_id=None depth=0 /> }
                />
            </ul>

            // Root target; drops inside the tree stop at folder nodes and note rows
            <div
                class=root_class
                on:dragover=make_on_dragover(dnd, root)
                on:dragleave=make_on_dragleave(dnd, root)
                on:drop=make_on_drop(dnd, root, move |target, payload| dispatch_drop(ctx, target, payload))
            >
                "Drop here to move to the top level"
            </div>

            <ContextMenuView menu_ref=menu_ref />
        </aside>
    }
}
