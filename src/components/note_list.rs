//! Note List Component
//!
//! Main pane listing the notes of the selected folder or view.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DragSource};

use crate::context::use_app_context;
use crate::notes::filter_notes;
use crate::store::{store_open_note, AppStateStoreFields};

#[component]
pub fn NoteList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let dnd = ctx.dnd;

    let visible = Memo::new(move |_| {
        let notes = store.notes().get();
        filter_notes(&notes, store.filter().get(), store.selected_folder().get())
    });

    let heading = move || match store.selected_folder().get() {
        Some(folder_id) => store.folders().with(|folders| {
            folders
                .iter()
                .find(|f| f.id == folder_id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| "Folder".to_string())
        }),
        None => store.filter().get().label().to_string(),
    };

    view! {
        <section class="note-list">
            <h2>{heading}</h2>
            <Show when=move || visible.with(|notes| notes.is_empty())>
                <p class="note-list-empty">"No notes here yet"</p>
            </Show>
            <ul>
                <For
                    each=move || visible.get()
                    key=|note| (note.id, note.title.clone(), note.is_favorite)
                    children=move |note| {
                        let id = note.id;
                        let is_selected = move || store.selected_note().get() == Some(id);
                        let touched = note
                            .last_touched()
                            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default();
                        view! {
                            <li
                                class=move || if is_selected() { "note-card selected" } else { "note-card" }
                                draggable="true"
                                on:click=move |_| store_open_note(&store, id)
                                on:dragstart=make_on_dragstart(dnd, DragSource::Note(id))
                                on:dragend=make_on_dragend(dnd)
                            >
                                <span class="note-card-title">
                                    {if note.is_favorite { "★ " } else { "" }}
                                    {note.title}
                                </span>
                                <span class="note-card-date">{touched}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
