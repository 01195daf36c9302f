// =============================================================================
// Cloudora Web - Contacts Section
// =============================================================================

use leptos::prelude::*;

use crate::components::Card;

/// One way to reach the team.
struct ContactLink {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACTS: &[ContactLink] = &[
    ContactLink {
        icon: "✉",
        label: "Email",
        value: "contact@cloudora.live",
        href: "mailto:contact@cloudora.live",
    },
    ContactLink {
        icon: "☎",
        label: "Phone",
        value: "+254 759 585 197",
        href: "tel:+254759585197",
    },
    ContactLink {
        icon: "📷",
        label: "Instagram",
        value: "cloudora.solutions",
        href: "https://instagram.com/cloudora.solutions",
    },
    ContactLink {
        icon: "in",
        label: "LinkedIn",
        value: "Cloudora Solutions",
        href: "https://linkedin.com/company/cloudora-solutions",
    },
];

/// Contact cards, each opening its link in a new tab.
#[component]
pub fn Contacts() -> impl IntoView {
    view! {
        <div class="section-inner">
            <div class="section-header">
                <h2 class="section-title">"Contact Us"</h2>
                <p class="section-desc">"Get in touch with our team"</p>
            </div>

            <div class="card-grid two-col">
                {CONTACTS
                    .iter()
                    .map(|contact| {
                        view! {
                            <a href=contact.href target="_blank" rel="noopener noreferrer" class="contact-link">
                                <Card class="contact-card">
                                    <div class="contact-icon">{contact.icon}</div>
                                    <div>
                                        <p class="contact-label">{contact.label}</p>
                                        <p class="contact-value">{contact.value}</p>
                                    </div>
                                </Card>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
