//! UI Components
//!
//! Leptos components for the sidebar and the note panes.

mod context_menu;
mod dropped;
mod folder_node;
mod log_panel;
mod note_detail;
mod note_list;
mod sidebar;
mod toast;

pub use log_panel::LogPanel;
pub use note_detail::NoteDetail;
pub use note_list::NoteList;
pub use sidebar::Sidebar;
pub use toast::Toast;
