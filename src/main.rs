//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod edit_state;
mod logging;
mod models;
mod store;
mod todos;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = logging::init(config.log_level) {
        web_sys::console::error_1(&format!("[Main] logger init failed: {err}").into());
    }
    if let Some(err) = config_error {
        log::error!("[Main] ignoring page config: {err}");
    }
    log::info!("[Main] starting with {} items", config.todos.len());

    let todos = config.todos;
    mount_to_body(move || view! { <App items=todos /> });
}
