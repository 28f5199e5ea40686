//! Note Detail Component
//!
//! Shows the opened note with its favorite toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::sidebar::toggle_favorite;
use crate::store::store_selected_note;

#[component]
pub fn NoteDetail() -> impl IntoView {
    let ctx = use_app_context();

    move || match store_selected_note(&ctx.store) {
        None => view! {
            <section class="note-detail empty">
                <p>"Select a note"</p>
            </section>
        }
        .into_any(),
        Some(note) => {
            let is_favorite = note.is_favorite;
            let title = note.title.clone();
            let content = note.content.clone();
            let on_toggle = move |_| {
                let note = note.clone();
                spawn_local(async move {
                    toggle_favorite(&ctx.api(), &ctx.host(), &note).await;
                });
            };
            view! {
                <section class="note-detail">
                    <header class="note-detail-header">
                        <h2>{title}</h2>
                        <button
                            class={if is_favorite { "favorite-btn active" } else { "favorite-btn" }}
                            title="Toggle favorite"
                            on:click=on_toggle
                        >
                            {if is_favorite { "★" } else { "☆" }}
                        </button>
                    </header>
                    <pre class="note-content">{content}</pre>
                </section>
            }
            .into_any()
        }
    }
}
