//! UI Components
//!
//! Reusable Leptos components.

mod todo_list;
mod todo_row;
mod todo_modal;
mod context_menu;

pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use todo_modal::TodoModal;
pub use context_menu::ItemContextMenu;
