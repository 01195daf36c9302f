// =============================================================================
// Cloudora Web - Hero Section
// =============================================================================

use leptos::prelude::*;

/// Logo and headline at the top of the main view.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero-main">
            <div class="hero-logo">
                <img src="/assets/cloudora-logo.png" alt="Cloudora Logo" class="hero-logo-img" />
            </div>
            <h1 class="hero-headline">
                "Simplifying Work,"
                <span class="headline-accent">" Amplifying Impact"</span>
            </h1>
            <p class="hero-description">"Is Here!"</p>
        </div>
    }
}
