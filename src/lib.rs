use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;

/// Initialize the application and mount the UI
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Wire the domain logging abstractions to the browser implementations
    let console_logger = if cfg!(debug_assertions) {
        Box::new(infrastructure::services::ConsoleLogger::new_development())
    } else {
        Box::new(infrastructure::services::ConsoleLogger::new_production())
    };
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    crate::log_info!(LogComponent::Presentation("Initialize"), "🚀 Stock sentiment viewer starting");

    leptos::mount_to_body(|| leptos::view! { <app::App /> });
}
