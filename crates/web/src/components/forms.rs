// =============================================================================
// Cloudora Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. ChoiceCard
// 3. CheckboxCard
// 4. FormSection
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Text input field with label and error state.
///
/// The value lives in the caller's state; edits are reported through
/// `on_input` rather than written to a signal directly.
#[component]
pub fn TextInput(
    id: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional)] min_length: Option<usize>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let current_error = move || error.and_then(|e| e.get());

    view! {
        <div class="form-field" class:has-error=move || current_error().is_some()>
            <label class="form-label" for=id>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=required
                minlength=min_length
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
            {move || current_error().map(|e| view! { <span class="form-error">{e}</span> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. ChoiceCard
// -----------------------------------------------------------------------------

/// Radio option rendered as a bordered card.
#[component]
pub fn ChoiceCard(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="choice-card" class:selected=move || checked.get() for=id>
            <input
                type="radio"
                id=id
                name=name
                value=id
                prop:checked=move || checked.get()
                on:change=move |_| on_select.run(())
            />
            <span class="choice-label">{label}</span>
        </label>
    }
}

// -----------------------------------------------------------------------------
// 3. CheckboxCard
// -----------------------------------------------------------------------------

/// Checkbox option rendered as a bordered card.
#[component]
pub fn CheckboxCard(
    id: &'static str,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let is_disabled = move || disabled.is_some_and(|d| d.get());

    view! {
        <label
            class="choice-card"
            class:selected=move || checked.get()
            class:disabled=is_disabled
            for=id
        >
            <input
                type="checkbox"
                id=id
                disabled=is_disabled
                prop:checked=move || checked.get()
                on:change=move |e| on_toggle.run(event_target_checked(&e))
            />
            <span class="choice-label">{label}</span>
        </label>
    }
}

// -----------------------------------------------------------------------------
// 4. FormSection
// -----------------------------------------------------------------------------

/// Titled group of related fields.
#[component]
pub fn FormSection(
    #[prop(into)] title: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <fieldset class="form-section">
            <legend class="form-section-title">
                {title}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </legend>
            {hint.map(|h| view! { <p class="form-hint">{h}</p> })}
            {children()}
        </fieldset>
    }
}
