// =============================================================================
// Cloudora Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod sections;
pub mod services;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Ignore if a logger is already installed
    let _ = console_log::init_with_level(SiteConfig::from_env().environment.log_level());
}

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    init_logging();
    log::info!("Mounting Cloudora Web app...");
    leptos::mount::mount_to_body(app::App);
}
