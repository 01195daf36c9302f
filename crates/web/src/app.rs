// =============================================================================
// Cloudora Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::ToastViewport;
use crate::pages::{HomePage, NotFoundPage, WaitlistPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide global app state
    let app_state = AppState::default();
    if app_state.config.endpoint.is_none() {
        log::warn!("WAITLIST_ENDPOINT is not set; waitlist submissions will fail");
    }
    provide_context(app_state);

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Title text="Cloudora" />
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/waitlist") view=WaitlistPage />
            </Routes>
        </Router>
        <ToastViewport />
    }
}
