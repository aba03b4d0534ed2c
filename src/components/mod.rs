//! UI Components
//!
//! Reusable Leptos components.

mod action_menu;
mod edit_panel;
mod editor_target;
mod list;
mod list_row;

pub use edit_panel::EditPanel;
pub use editor_target::EditTarget;
pub use list::List;
