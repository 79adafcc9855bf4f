//! UI Components
//!
//! Leptos components for the todo list.

mod item_editor;
mod todo_list;

pub use item_editor::ItemEditor;
pub use todo_list::TodoList;
