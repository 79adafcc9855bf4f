//! Todo List Component
//!
//! Renders one `ItemEditor` per item in the store.

use leptos::prelude::*;

use crate::components::ItemEditor;
use crate::models::Item;
use crate::store::{store_replace_todos, todos_signal, use_todo_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let collection = todos_signal(store);
    let replace_collection = Callback::new(move |todos: Vec<Item>| {
        store_replace_todos(&store, todos);
    });

    view! {
        <ul class="todo-list" data-cy="todoList">
            <For
                each=move || collection.get()
                // Key on every field so a changed item gets fresh props
                key=|item| (item.id, item.title.clone(), item.completed)
                children=move |item| {
                    view! {
                        <ItemEditor
                            item=item
                            collection=collection
                            replace_collection=replace_collection
                        />
                    }
                }
            />
        </ul>
    }
}
