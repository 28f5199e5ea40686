//! Toast Component
//!
//! Success notices, dismissed after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sidebar::NoticeLevel;
use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

const TOAST_MS: u32 = 3_000;

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();
    // Only the newest toast's timer may dismiss it
    let generation = StoredValue::new(0u32);

    Effect::new(move |_| {
        if store.toast().get().is_none() {
            return;
        }
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if generation.get_value() == current {
                store_dismiss_toast(&store);
            }
        });
    });

    move || {
        store.toast().get().map(|notice| {
            let class = match notice.level {
                NoticeLevel::Success => "toast toast-success",
                NoticeLevel::Error => "toast toast-error",
            };
            view! {
                <div class=class on:click=move |_| store_dismiss_toast(&store)>
                    {notice.message}
                </div>
            }
        })
    }
}
