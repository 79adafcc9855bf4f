//! Todo App
//!
//! Root component. Owns the list and hands it down through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::models::Item;
use crate::store::{todos_signal, TodoState};
use crate::todos;

#[component]
pub fn App(items: Vec<Item>) -> impl IntoView {
    let store = Store::new(TodoState::new(items));
    provide_context(store);

    let collection = todos_signal(store);

    Effect::new(move |_| {
        log::debug!("[App] list now has {} items", collection.with(Vec::len));
    });

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>"todos"</h1>
            </header>

            <section class="main">
                <TodoList />
            </section>

            <footer class="footer">
                <span class="todo-count" data-cy="todosCounter">
                    {move || format!("{} items left", todos::active_count(&collection.get()))}
                </span>
            </footer>
        </section>
    }
}
