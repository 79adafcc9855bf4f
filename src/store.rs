//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list lives
//! here; item rows only ever see a read signal and a replace callback.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// State owned by the list
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in display order
    pub todos: Vec<Item>,
}

impl TodoState {
    pub fn new(todos: Vec<Item>) -> Self {
        Self { todos }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Read-only view of the list for item rows
pub fn todos_signal(store: TodoStore) -> Signal<Vec<Item>> {
    Signal::derive(move || store.todos().get())
}

/// Swap in a whole new list
pub fn store_replace_todos(store: &TodoStore, todos: Vec<Item>) {
    *store.todos().write() = todos;
}
