// =============================================================================
// Cloudora Web - Advantages Section
// =============================================================================

use leptos::prelude::*;

use crate::components::IconCard;

const ADVANTAGES: &[(&str, &str, &str)] = &[
    (
        "🧱",
        "All-in-One Ecosystem",
        "Multiple business tools integrated seamlessly in one platform.",
    ),
    (
        "📍",
        "Local Relevance",
        "Built specifically for African businesses with WhatsApp and MPESA integration.",
    ),
    (
        "💲",
        "Affordability",
        "Accessible pricing designed for small and medium-sized businesses.",
    ),
    (
        "📈",
        "Scalability",
        "Grow your business without worrying about outgrowing your tools.",
    ),
];

/// Why businesses choose Cloudora.
#[component]
pub fn Advantages() -> impl IntoView {
    view! {
        <div class="section-inner">
            <div class="section-header">
                <h2 class="section-title">"The Cloudora Advantage"</h2>
                <p class="section-desc">"Why businesses choose Cloudora"</p>
            </div>

            <div class="card-grid two-col">
                {ADVANTAGES
                    .iter()
                    .map(|&(icon, title, body)| view! { <IconCard icon=icon title=title body=body /> })
                    .collect_view()}
            </div>
        </div>
    }
}
