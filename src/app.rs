//! NoteFlow Frontend App
//!
//! Sidebar on the left, note list and detail pane on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{LogPanel, NoteDetail, NoteList, Sidebar, Toast};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let api = HttpApi::from_config(&config);
    let api_root = api.api_root().to_string();
    let ctx = AppContext::new(api, store);
    provide_context(ctx);

    // Initial load; later loads are driven by mutations
    Effect::new(move |_| {
        log::info!("[APP] Loading folders and notes from {}", api_root);
        ctx.reload();
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                <NoteList />
                <NoteDetail />
                <LogPanel />
            </main>
            <Toast />
        </div>
    }
}
