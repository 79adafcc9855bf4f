//! Frontend Models
//!
//! Data structures shared by the list and the item editor.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
