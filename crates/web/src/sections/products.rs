// =============================================================================
// Cloudora Web - Products Section
// =============================================================================

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, IconCard};
use crate::state::{AppState, ViewMode};

/// Product line-up shown on the main view.
const PRODUCTS: &[(&str, &str, &str)] = &[
    (
        "📅",
        "Appointment booking system",
        "Smart scheduling with automated WhatsApp reminders to reduce no-shows and manage \
         staff schedules.",
    ),
    (
        "🔳",
        "MPESA QR Code Generator",
        "Generate custom QR codes for seamless mobile payments and faster transactions.",
    ),
    (
        "📖",
        "Learning Management System",
        "Upload courses, manage assignments, and track student progress with easy analytics.",
    ),
    (
        "🏠",
        "Rent Tracking System",
        "Automate rent collection and reminders via WhatsApp, simplifying property management.",
    ),
    (
        "📦",
        "Inventory Management System",
        "Real-time inventory tracking and management to optimize stock levels and reduce waste.",
    ),
];

/// Product cards and the consultation call to action.
#[component]
pub fn Products() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let book_consultation = Callback::new(move |_: ()| app_state.switch_mode(ViewMode::FormView));

    view! {
        <div class="section-inner">
            <div class="section-header">
                <h2 class="section-title">"Cloudora Products"</h2>
                <p class="section-desc">"Powerful tools designed to transform your business operations"</p>
            </div>

            <div class="card-grid three-col">
                {PRODUCTS
                    .iter()
                    .map(|&(icon, title, body)| view! { <IconCard icon=icon title=title body=body /> })
                    .collect_view()}
            </div>

            <div class="section-cta">
                <Button label="Book Consultation" variant=ButtonVariant::Pill on_click=book_consultation />
            </div>
        </div>
    }
}
