// =============================================================================
// Cloudora Web - Home Page
// =============================================================================
// Renders either the marketing sections or the waitlist form, with a loading
// placeholder in between while a view switch is pending.
// =============================================================================

use leptos::prelude::*;

use crate::components::{Footer, LoadingView, Navigation};
use crate::pages::waitlist::WaitlistSignup;
use crate::sections::{Advantages, Contacts, Hero, Products, Vision, SECTION_IDS};
use crate::state::{AppState, ViewMode};

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let view = app_state.view;

    let is_loading = move || view.with(|v| v.is_loading());
    let not_loading = move || !is_loading();

    let back_to_main = {
        let app_state = app_state.clone();
        Callback::new(move |_: ()| app_state.switch_mode(ViewMode::MainView))
    };

    let content = move || {
        if is_loading() {
            return view! { <LoadingView /> }.into_any();
        }

        match view.with(|v| v.mode()) {
            ViewMode::MainView => view! { <MainSections /> }.into_any(),
            ViewMode::FormView => view! {
                <section class="form-view">
                    <WaitlistSignup on_submitted=back_to_main on_cancel=back_to_main />
                </section>
            }
            .into_any(),
        }
    };

    view! {
        <div class="page page-home">
            <Show when=not_loading>
                <Navigation />
            </Show>

            {content}

            <Show when=not_loading>
                <Footer />
            </Show>
        </div>
    }
}

/// The five marketing sections, each anchored by its id.
#[component]
fn MainSections() -> impl IntoView {
    let [hero, vision, products, advantages, contacts] = SECTION_IDS;

    view! {
        // ═══════════════════════════════════════════════════════════════
        // HERO
        // ═══════════════════════════════════════════════════════════════
        <section id=hero class="landing-section">
            <Hero />
        </section>

        // ═══════════════════════════════════════════════════════════════
        // VISION & MISSION
        // ═══════════════════════════════════════════════════════════════
        <section id=vision class="landing-section">
            <Vision />
        </section>

        // ═══════════════════════════════════════════════════════════════
        // PRODUCTS
        // ═══════════════════════════════════════════════════════════════
        <section id=products class="landing-section">
            <Products />
        </section>

        // ═══════════════════════════════════════════════════════════════
        // ADVANTAGES
        // ═══════════════════════════════════════════════════════════════
        <section id=advantages class="landing-section">
            <Advantages />
        </section>

        // ═══════════════════════════════════════════════════════════════
        // CONTACTS
        // ═══════════════════════════════════════════════════════════════
        <section id=contacts class="landing-section">
            <Contacts />
        </section>
    }
}
