// =============================================================================
// Cloudora Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Button
// 2. Card
// 3. Loading View
// 4. Toast Viewport
// =============================================================================

use leptos::prelude::*;

use crate::services::notifications::{Toast, ToastKind};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Pill,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Pill => "btn btn-pill",
        }
    }
}

/// Reusable click button. Form submit buttons are written inline.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let handle_click = move |_| {
        if let Some(callback) = &on_click {
            callback.run(());
        }
    };

    view! {
        <button
            type="button"
            class=variant.class()
            disabled=move || disabled.is_some_and(|d| d.get())
            on:click=handle_click
        >
            {label}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            {children()}
        </div>
    }
}

/// Card with a round icon badge, a heading and a paragraph.
#[component]
pub fn IconCard(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <Card class="icon-card">
            <div class="icon-badge">{icon}</div>
            <h3 class="card-title">{title}</h3>
            <p class="card-body">{body}</p>
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 3. Loading View
// -----------------------------------------------------------------------------

/// Placeholder shown while the home page switches views.
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-container">
            <span class="loading-cloud" aria-label="Loading">"☁"</span>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Toast Viewport
// -----------------------------------------------------------------------------

/// Stack of active toasts, bottom-right.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = expect_context::<AppState>().toaster;

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notice.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class>
                            <div class="toast-text">
                                <p class="toast-title">{toast.notice.title}</p>
                                <p class="toast-description">{toast.notice.description}</p>
                            </div>
                            <button
                                type="button"
                                class="toast-dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
