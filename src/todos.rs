//! Collection Operations
//!
//! Every function here reads a borrowed collection and returns a brand new
//! one. The shared list is never edited in place; callers hand the result
//! to whoever owns the list.

use crate::models::Item;

/// Flip `completed` on the item with `id`
pub fn toggle_completed(items: &[Item], id: u32) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item {
                    completed: !item.completed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop the item with `id`
pub fn remove_item(items: &[Item], id: u32) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Replace the title of the item with `id`
pub fn rename_item(items: &[Item], id: u32, title: &str) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item {
                    title: title.to_string(),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Number of items not yet completed
pub fn active_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}
