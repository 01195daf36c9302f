// =============================================================================
// Cloudora Web - Waitlist Form
// =============================================================================
// Table of Contents:
// 1. Signup Form
// 2. Form Sections
// 3. Standalone Page
// =============================================================================

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::Dispatch;
use crate::components::{Button, ButtonVariant, CheckboxCard, ChoiceCard, FormSection, TextInput};
use crate::form::{
    BetaUpdates, Channel, DeliveryWindow, OptionSet, Product, Role, SubmitOutcome, TextField,
    WaitlistForm, CLEAR_CONFIRMATION, OTHER_LABEL,
};
use crate::state::AppState;
use crate::utils::confirm;

// -----------------------------------------------------------------------------
// 1. Signup Form
// -----------------------------------------------------------------------------

/// The waitlist form card.
///
/// `on_submitted` runs after a successful dispatch; `on_cancel` adds a
/// Cancel button when present.
#[component]
pub fn WaitlistSignup(
    #[prop(optional, into)] on_submitted: Option<Callback<()>>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let toaster = app_state.toaster;
    let client = app_state.waitlist_client();

    let form = RwSignal::new(WaitlistForm::new());

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let submit_blocked = move || !form.with(|f| f.can_submit());
    let website_url = text_value(form, TextField::WebsiteUrl);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        form.update(|f| started = Some(f.begin_submit()));
        let record = match started {
            Some(Ok(record)) => record,
            Some(Err(outcome)) => {
                if let Some(notice) = outcome.notice() {
                    toaster.show(notice);
                }
                return;
            }
            None => return,
        };

        let client = client.clone();
        spawn_local(async move {
            let result = client.dispatch(&record).await;

            // The form may have been unmounted while the request was out.
            let outcome = SubmitOutcome::from_dispatch(&result);
            let _ = form.try_update(|f| f.finish_submit(result));

            if let Some(notice) = outcome.notice() {
                toaster.show(notice);
            }
            if outcome.is_submitted() {
                if let Some(callback) = on_submitted {
                    callback.run(());
                }
            }
        });
    };

    let clear_form = Callback::new(move |_: ()| {
        form.update(|f| {
            f.clear(|| confirm(CLEAR_CONFIRMATION));
        });
    });

    view! {
        <div class="card waitlist-card">
            <div class="card-header">
                <h2 class="card-title">"Cloudora Waitlist Form"</h2>
                <p class="card-description">
                    "Sign up to use our effective, solution-oriented software that will "
                    "simplify work and amplify your impact"
                </p>
            </div>

            <form class="waitlist-form" on:submit=on_submit novalidate=true>
                // Honeypot: hidden from people, filled by bots
                <div class="honeypot" style="position: absolute; left: -9999px;" aria-hidden="true">
                    <input
                        type="text"
                        name="website_url"
                        tabindex="-1"
                        autocomplete="off"
                        prop:value=move || website_url.get()
                        on:input=move |e| {
                            form.update(|f| f.update_field(TextField::WebsiteUrl, event_target_value(&e)))
                        }
                    />
                </div>

                <PersonalDetails form=form />
                <RoleChoice form=form />
                <ProductChoice form=form />
                <DeliveryChoice form=form />
                <BetaChoice form=form />
                <ChannelChoice form=form />

                <div class="form-actions">
                    <Button label="Clear Form" variant=ButtonVariant::Outline on_click=clear_form />
                    {on_cancel.map(|cancel| view! {
                        <Button
                            label="Cancel"
                            variant=ButtonVariant::Outline
                            disabled=submitting
                            on_click=cancel
                        />
                    })}
                    <button type="submit" class="btn btn-primary" disabled=submit_blocked>
                        {move || if submitting.get() { "Submitting..." } else { "Join Waitlist" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Form Sections
// -----------------------------------------------------------------------------

/// Text field bound to one slot of the record.
fn text_value(form: RwSignal<WaitlistForm>, field: TextField) -> Signal<String> {
    Signal::derive(move || form.with(|f| field.value(f.record()).to_string()))
}

fn text_edit(form: RwSignal<WaitlistForm>, field: TextField) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| f.update_field(field, value)))
}

#[component]
fn PersonalDetails(form: RwSignal<WaitlistForm>) -> impl IntoView {
    let email = Signal::derive(move || form.with(|f| f.record().email.clone()));
    let email_error = Signal::derive(move || form.with(|f| f.email_error().map(str::to_string)));

    view! {
        <FormSection title="Personal Details">
            <TextInput
                id="name"
                label="Name"
                placeholder="e.g., John Doe"
                value=text_value(form, TextField::Name)
                on_input=text_edit(form, TextField::Name)
                min_length=2
                required=true
            />
            <TextInput
                id="email"
                label="Email"
                input_type="email"
                placeholder="john.doe@gmail.com"
                value=email
                on_input=Callback::new(move |value: String| form.update(|f| f.update_email(value)))
                error=email_error
                required=true
            />
            <TextInput
                id="phone"
                label="Phone"
                input_type="tel"
                placeholder="+254 712345678"
                value=text_value(form, TextField::Phone)
                on_input=text_edit(form, TextField::Phone)
                min_length=10
                required=true
            />
            <TextInput
                id="company_name"
                label="Company name"
                placeholder="e.g., Acme Corporation"
                value=text_value(form, TextField::CompanyName)
                on_input=text_edit(form, TextField::CompanyName)
                required=true
            />
        </FormSection>
    }
}

#[component]
fn RoleChoice(form: RwSignal<WaitlistForm>) -> impl IntoView {
    let other_selected = move || form.with(|f| f.is_other_role_selected());

    view! {
        <FormSection title="Your Role" required=true>
            <div class="choice-grid">
                {Role::ALL
                    .iter()
                    .map(|&role| view! {
                        <ChoiceCard
                            id=role.id()
                            name="role"
                            label=role.label()
                            checked=Signal::derive(move || form.with(|f| f.is_role_selected(role)))
                            on_select=Callback::new(move |_: ()| form.update(|f| f.select_role(role)))
                        />
                    })
                    .collect_view()}
                <ChoiceCard
                    id="other"
                    name="role"
                    label=OTHER_LABEL
                    checked=Signal::derive(other_selected)
                    on_select=Callback::new(move |_: ()| form.update(|f| f.select_other_role()))
                />
            </div>
            <Show when=other_selected>
                <TextInput
                    id="role_other"
                    label="Role"
                    placeholder="Please specify your role..."
                    value=Signal::derive(move || form.with(|f| f.custom_role().to_string()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.set_custom_role(value)))
                    required=true
                />
            </Show>
        </FormSection>
    }
}

#[component]
fn ProductChoice(form: RwSignal<WaitlistForm>) -> impl IntoView {
    view! {
        <FormSection title="Product Details" hint="Select at least one product" required=true>
            <div class="choice-grid">
                {Product::ALL
                    .iter()
                    .map(|&product| view! {
                        <CheckboxCard
                            id=product.label()
                            label=product.label()
                            checked=Signal::derive(move || form.with(|f| f.is_product_selected(product)))
                            on_toggle=Callback::new(move |included: bool| {
                                form.update(|f| f.toggle_product(product, included))
                            })
                        />
                    })
                    .collect_view()}
            </div>
        </FormSection>
    }
}

#[component]
fn DeliveryChoice(form: RwSignal<WaitlistForm>) -> impl IntoView {
    view! {
        <FormSection title="How soon would you like to start using these products?" required=true>
            <div class="choice-grid">
                {DeliveryWindow::ALL
                    .iter()
                    .map(|&window| view! {
                        <ChoiceCard
                            id=window.id()
                            name="delivery_date"
                            label=window.label()
                            checked=Signal::derive(move || {
                                form.with(|f| f.record().delivery_date == Some(window))
                            })
                            on_select=Callback::new(move |_: ()| form.update(|f| f.set_delivery_date(window)))
                        />
                    })
                    .collect_view()}
            </div>
        </FormSection>
    }
}

#[component]
fn BetaChoice(form: RwSignal<WaitlistForm>) -> impl IntoView {
    view! {
        <FormSection title="Would you like to receive beta updates and early access?" required=true>
            <div class="choice-grid">
                {BetaUpdates::ALL
                    .iter()
                    .map(|&answer| view! {
                        <ChoiceCard
                            id=answer.id()
                            name="beta_updates"
                            label=answer.label()
                            checked=Signal::derive(move || {
                                form.with(|f| f.record().beta_updates == Some(answer))
                            })
                            on_select=Callback::new(move |_: ()| form.update(|f| f.set_beta_updates(answer)))
                        />
                    })
                    .collect_view()}
            </div>
        </FormSection>
    }
}

#[component]
fn ChannelChoice(form: RwSignal<WaitlistForm>) -> impl IntoView {
    let other_selected = move || form.with(|f| f.is_other_channel_selected());

    view! {
        <FormSection title="What is your preferred communication method?" required=true>
            <div class="choice-grid">
                {Channel::ALL
                    .iter()
                    .map(|&channel| view! {
                        <CheckboxCard
                            id=channel.id()
                            label=channel.label()
                            checked=Signal::derive(move || form.with(|f| f.is_channel_selected(channel)))
                            disabled=Signal::derive(move || form.with(|f| f.is_channel_disabled(channel)))
                            on_toggle=Callback::new(move |included: bool| {
                                form.update(|f| f.toggle_channel(channel, included))
                            })
                        />
                    })
                    .collect_view()}
                <CheckboxCard
                    id="comm-other"
                    label=OTHER_LABEL
                    checked=Signal::derive(other_selected)
                    on_toggle=Callback::new(move |included: bool| {
                        form.update(|f| f.toggle_other_channel(included))
                    })
                />
            </div>
            <Show when=other_selected>
                <TextInput
                    id="comm_other_details"
                    label="Please Specify"
                    placeholder="Please Specify (e.g., Slack, Telegram...)"
                    value=Signal::derive(move || form.with(|f| f.other_channel_details().to_string()))
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.set_other_channel_details(value))
                    })
                    required=true
                />
            </Show>
        </FormSection>
    }
}

// -----------------------------------------------------------------------------
// 3. Standalone Page
// -----------------------------------------------------------------------------

/// `/waitlist`: the form on its own, returning home once submitted.
#[component]
pub fn WaitlistPage() -> impl IntoView {
    // In-app navigation; the toast stack must outlive the route change
    let navigate = StoredValue::new_local(use_navigate());
    let go_home = Callback::new(move |_: ()| {
        navigate.with_value(|navigate| navigate("/", Default::default()));
    });

    view! {
        <div class="page page-waitlist">
            <section class="form-section-wrapper">
                <WaitlistSignup on_submitted=go_home on_cancel=go_home />
            </section>
        </div>
    }
}
