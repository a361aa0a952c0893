//! Recipe Box Frontend Entry Point

mod app;
mod collapsible;
mod commands;
mod config;
mod error;
mod favorites;
mod models;
mod register;

use any_spawner::Executor;
use leptos::prelude::document;
use web_sys::console;

use config::PageConfig;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = Executor::init_wasm_bindgen() {
        console::error_1(&format!("[App] Executor init failed: {:?}", e).into());
        return;
    }

    let document = document();
    let page = document.clone();
    if let Err(e) = dom_bind::on_ready(&document, move || app::init(&page, PageConfig::default())) {
        console::error_1(&format!("[App] {}", dom_bind::describe_js_error(&e)).into());
    }
}
