// =============================================================================
// Cloudora Web - Navigation Bar
// =============================================================================
// Fixed top bar for the home page.
// Section links only appear on the main view; the brand always leads back to it.
// Mobile-responsive with hamburger menu and slide-out drawer
// =============================================================================

use leptos::prelude::*;

use crate::state::{AppState, ViewMode};
use crate::utils::scroll_to_section;

/// Section anchors reachable from the navigation bar, as `(id, label)`.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("vision", "Vision"),
    ("products", "Products"),
    ("advantages", "Advantages"),
    ("contacts", "Contact"),
];

/// Home page navigation bar.
#[component]
pub fn Navigation() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let view = app_state.view;

    // Mobile menu state
    let menu_open = RwSignal::new(false);

    let on_main_view = move || view.with(|v| v.mode() == ViewMode::MainView);

    let go_home = {
        let app_state = app_state.clone();
        Callback::new(move |_: ()| {
            menu_open.set(false);
            app_state.switch_mode(ViewMode::MainView);
        })
    };

    let get_started = Callback::new(move |_: ()| {
        menu_open.set(false);
        app_state.switch_mode(ViewMode::FormView);
    });

    let section_links = move |link_class: &'static str| {
        NAV_SECTIONS
            .iter()
            .map(|&(id, label)| {
                view! {
                    <button
                        type="button"
                        class=link_class
                        on:click=move |_| {
                            menu_open.set(false);
                            scroll_to_section(id);
                        }
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="central-nav">
            // Brand (always visible)
            <button type="button" class="nav-logo" on:click=move |_| go_home.run(())>
                <span class="nav-brand">"Cloudora"</span>
            </button>

            <Show when=on_main_view>
                // Desktop nav links (hidden on mobile)
                <div class="nav-links desktop-only">
                    {section_links("central-nav-link")}
                    <button type="button" class="btn btn-pill" on:click=move |_| get_started.run(())>
                        "Get Started"
                    </button>
                </div>

                // Hamburger (mobile only)
                <button
                    type="button"
                    class="hamburger-btn mobile-only"
                    class:open=move || menu_open.get()
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>
            </Show>

            // Mobile drawer
            <div
                class="mobile-drawer-overlay"
                class:open=move || menu_open.get()
                on:click=move |_| menu_open.set(false)
            ></div>
            <div class="mobile-drawer" class:open=move || menu_open.get()>
                <nav class="drawer-nav">
                    {section_links("mobile-nav-link")}
                </nav>
                <div class="drawer-divider"></div>
                <div class="drawer-footer">
                    <button type="button" class="drawer-btn primary" on:click=move |_| get_started.run(())>
                        "Get Started"
                    </button>
                </div>
            </div>
        </nav>
    }
}
