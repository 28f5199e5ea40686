//! NoteFlow Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod host;
mod models;
mod notes;
mod session;
mod sidebar;
mod store;
mod tree;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = rolling_logger::init_logger("NoteFlow", config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger already set: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
