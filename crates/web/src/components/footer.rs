// =============================================================================
// Cloudora Web - Footer Component
// =============================================================================
// Footer shown under both home page views, hidden while a view switch loads
// =============================================================================

use leptos::prelude::*;

/// Tagline printed in the footer.
pub const FOOTER_TAGLINE: &str = "© Cloudora — Simplifying Work, Amplifying Impact.";

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-bottom-bar">
                <p class="footer-copyright">{FOOTER_TAGLINE}</p>
            </div>
        </footer>
    }
}
