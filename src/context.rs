//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::api::HttpApi;
use crate::host::BrowserHost;
use crate::sidebar::{ContextMenu, OpenMap, SidebarHost};
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpApi, LocalStorage>,
    pub store: AppStore,
    /// The single open context menu
    pub menu: RwSignal<ContextMenu>,
    /// Folder open/closed flags, independent of component lifetimes
    pub open_map: RwSignal<OpenMap>,
    pub dnd: DndSignals,
}

impl AppContext {
    pub fn new(api: HttpApi, store: AppStore) -> Self {
        Self {
            api: StoredValue::new_local(api),
            store,
            menu: RwSignal::new(ContextMenu::Closed),
            open_map: RwSignal::new(OpenMap::default()),
            dnd: create_dnd_signals(),
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn host(&self) -> BrowserHost {
        BrowserHost::new(*self)
    }

    /// Reload folders and notes from the server
    pub fn reload(&self) {
        let host = self.host();
        spawn_local(async move {
            host.reload_folders().await;
            host.reload_notes().await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
