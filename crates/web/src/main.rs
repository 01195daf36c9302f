// =============================================================================
// Cloudora Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use cloudora_web::{init_logging, App};

fn main() {
    init_logging();

    log::info!("Starting Cloudora Web...");

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}
