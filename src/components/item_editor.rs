//! Item Editor Component
//!
//! One row of the todo list: checkbox, label and delete button while
//! viewing; an inline text field while editing the title.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::edit_state::{EditAction, EditKey, EditState};
use crate::models::Item;
use crate::todos;

/// CSS classes for the row `<li>`
pub fn item_class(editing: bool, completed: bool) -> String {
    let mut classes = Vec::new();
    if editing {
        classes.push("editing");
    }
    if completed {
        classes.push("completed");
    }
    classes.join(" ")
}

/// Focus the edit field on the next tick, after `<Show>` has mounted it.
fn focus_when_mounted(edit_ref: NodeRef<html::Input>) {
    Timeout::new(0, move || {
        if let Some(input) = edit_ref.get_untracked() {
            let _ = input.focus();
        }
    })
    .forget();
}

/// A single todo row
///
/// # Arguments
/// * `item` - The item this row shows
/// * `collection` - The whole list the item belongs to (read only)
/// * `replace_collection` - Replaces the owner's list with a new one
#[component]
pub fn ItemEditor(
    item: Item,
    #[prop(into)] collection: Signal<Vec<Item>>,
    #[prop(into)] replace_collection: Callback<Vec<Item>>,
) -> impl IntoView {
    let Item { id, title, completed } = item;
    let title = StoredValue::new(title);
    let state = RwSignal::new(EditState::Viewing);
    let edit_ref = NodeRef::<html::Input>::new();

    let dispatch = move |action: EditAction| {
        // A blur can still arrive after the row was dropped from the list.
        let Some(mut next) = state.try_get_untracked() else {
            return;
        };
        let transition = title.with_value(|title| next.apply(title, action));
        // Set local state first: replacing the list may dispose this row.
        state.set(next);

        if transition.focus_edit_field {
            focus_when_mounted(edit_ref);
        }
        if let Some(updated) = transition.change.apply(&collection.get_untracked(), id) {
            log::debug!("[ItemEditor] {:?} item {}", transition.change, id);
            replace_collection.run(updated);
        }
    };

    let toggle = move |_: web_sys::Event| {
        log::debug!("[ItemEditor] toggle item {}", id);
        replace_collection.run(todos::toggle_completed(&collection.get_untracked(), id));
    };

    let remove = move |_: web_sys::MouseEvent| {
        log::debug!("[ItemEditor] delete item {}", id);
        replace_collection.run(todos::remove_item(&collection.get_untracked(), id));
    };

    let is_editing = move || state.with(EditState::is_editing);

    view! {
        <li class=move || item_class(is_editing(), completed)>
            <div class="view">
                <input
                    type="checkbox"
                    class="toggle"
                    prop:checked=completed
                    on:change=toggle
                />
                <label on:dblclick=move |_| dispatch(EditAction::Begin)>
                    {title.get_value()}
                </label>
                <button
                    type="button"
                    aria-label="delete-button"
                    class="destroy"
                    data-cy="deleteTodo"
                    on:click=remove
                ></button>
            </div>

            <Show when=is_editing>
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    dispatch(EditAction::Commit);
                }>
                    <input
                        type="text"
                        class="edit"
                        node_ref=edit_ref
                        prop:value=move || state.with(|s| s.draft().unwrap_or_default().to_string())
                        on:input=move |ev| dispatch(EditAction::Draft(event_target_value(&ev)))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            let key = EditKey::from(ev.key().as_str());
                            if key == EditKey::Enter {
                                // Keep the form from submitting a second commit.
                                ev.prevent_default();
                            }
                            dispatch(EditAction::Key(key));
                        }
                        on:blur=move |_| dispatch(EditAction::Commit)
                    />
                </form>
            </Show>
        </li>
    }
}
