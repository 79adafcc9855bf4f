//! Startup Configuration
//!
//! The host page can embed a JSON block to seed the list and pick a log level:
//!
//! ```html
//! <script id="todo-config" type="application/json">
//!   { "logLevel": "debug", "todos": [{ "id": 1, "title": "Buy milk" }] }
//! </script>
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Item;

/// DOM id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
    #[error("duplicate item id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    pub todos: Vec<Item>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            todos: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    log_level: Option<String>,
    #[serde(default)]
    todos: Vec<Item>,
}

pub fn parse_config(json: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = serde_json::from_str(json)?;

    let log_level = match raw.log_level {
        Some(level) => {
            LevelFilter::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?
        }
        None => LevelFilter::Info,
    };

    let mut seen = HashSet::new();
    if let Some(dup) = raw.todos.iter().find(|item| !seen.insert(item.id)) {
        return Err(ConfigError::DuplicateId(dup.id));
    }

    Ok(AppConfig {
        log_level,
        todos: raw.todos,
    })
}

/// Read the config block from the current document.
/// A page without one gets the defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => parse_config(&json),
        _ => Ok(AppConfig::default()),
    }
}
