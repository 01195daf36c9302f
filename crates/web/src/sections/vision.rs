// =============================================================================
// Cloudora Web - Vision Section
// =============================================================================

use leptos::prelude::*;

use crate::components::{Card, IconCard};

/// `(icon, title, body)` for the vision and mission cards.
const STATEMENTS: &[(&str, &str, &str)] = &[
    (
        "🎯",
        "Vision",
        "To become Africa's leading provider of smart, accessible, and scalable SaaS \
         solutions that transform how businesses operate and grow.",
    ),
    (
        "🧭",
        "Mission",
        "To simplify business processes through automation, real-time analytics, and \
         practical integrations that make everyday work faster, easier, and more impactful.",
    ),
];

const BACKGROUND: &str = "Cloudora was born from the vision to simplify business processes \
    for African entrepreneurs and organizations. We understand the unique challenges faced \
    by businesses in our markets, from payment processing to communication barriers. That's \
    why we've created a suite of smart SaaS tools that integrate seamlessly with WhatsApp and \
    MPESA, the platforms you already use and trust. Our goal is to make powerful business \
    automation accessible, affordable, and easy to use for every business, regardless of size.";

/// Vision and mission cards followed by the background story.
#[component]
pub fn Vision() -> impl IntoView {
    view! {
        <div class="section-inner">
            <div class="card-grid two-col">
                {STATEMENTS
                    .iter()
                    .map(|&(icon, title, body)| view! { <IconCard icon=icon title=title body=body /> })
                    .collect_view()}
            </div>

            <div class="background-card">
                <Card>
                    <h2 class="section-title">"Background & Rationale"</h2>
                    <p class="section-desc">{BACKGROUND}</p>
                </Card>
            </div>
        </div>
    }
}
