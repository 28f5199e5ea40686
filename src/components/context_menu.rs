//! Context Menu Component

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::sidebar::{run_folder_action, run_note_action, ContextMenu, FolderMenuAction, NoteMenuAction};

fn run_action(ctx: AppContext, action: MenuAction) {
    // Close first so the menu is gone before any dialog opens
    let open = ctx.menu.try_update(|menu| menu.take()).unwrap_or_default();
    spawn_local(async move {
        let api = ctx.api();
        let host = ctx.host();
        match (open, action) {
            (ContextMenu::Folder { folder_id, .. }, MenuAction::Folder(action)) => {
                run_folder_action(&api, &host, folder_id, action).await
            }
            (ContextMenu::Note { note_id, folder_id, .. }, MenuAction::Note(action)) => {
                run_note_action(&api, &host, note_id, folder_id, action).await
            }
            _ => {}
        }
    });
}

#[derive(Clone, Copy)]
enum MenuAction {
    Folder(FolderMenuAction),
    Note(NoteMenuAction),
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::Folder(action) => action.label(),
            MenuAction::Note(action) => action.label(),
        }
    }
}

/// Floating menu for the folder or note that was right-clicked
#[component]
pub fn ContextMenuView(menu_ref: NodeRef<Div>) -> impl IntoView {
    let ctx = use_app_context();

    move || {
        let menu = ctx.menu.get();
        let Some((x, y)) = menu.position() else {
            return ().into_any();
        };
        let actions: Vec<MenuAction> = match menu {
            ContextMenu::Folder { .. } => FolderMenuAction::ALL.into_iter().map(MenuAction::Folder).collect(),
            ContextMenu::Note { .. } => NoteMenuAction::ALL.into_iter().map(MenuAction::Note).collect(),
            ContextMenu::Closed => Vec::new(),
        };
        view! {
            <div
                class="context-menu"
                node_ref=menu_ref
                style=format!("left: {}px; top: {}px;", x, y)
                on:contextmenu=|ev: web_sys::MouseEvent| ev.prevent_default()
            >
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button class="context-menu-item" on:click=move |_| run_action(ctx, action)>
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}
