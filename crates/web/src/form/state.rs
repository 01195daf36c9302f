// =============================================================================
// Cloudora Web - Waitlist Form State
// =============================================================================
// Table of Contents:
// 1. Form State
// 2. Text Fields
// 3. Single Choices
// 4. Multi-Value Fields
// 5. Validation & Reset
// 6. Tests
// =============================================================================

use super::record::{
    BetaUpdates, Channel, Choice, DeliveryWindow, FieldError, MultiValueField, OptionSet, Product,
    Role, TextField, WaitlistRecord, OTHER_LABEL,
};
use super::validation::{self, is_valid_email, ValidationError};

/// Message shown under the email input while the address looks wrong.
pub const EMAIL_FIELD_ERROR: &str = "Please enter a valid email address";

/// Prompt shown before wiping a partly filled form.
pub const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all fields?";

// -----------------------------------------------------------------------------
// 1. Form State
// -----------------------------------------------------------------------------

/// The waitlist record plus the transient bits of UI state around it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistForm {
    pub(super) record: WaitlistRecord,
    pub(super) email_error: Option<String>,
    pub(super) submitting: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &WaitlistRecord {
        &self.record
    }

    /// Field-level error currently shown under the email input.
    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.email_error.is_none()
    }
}

// -----------------------------------------------------------------------------
// 2. Text Fields
// -----------------------------------------------------------------------------

impl WaitlistForm {
    /// Overwrite a free-text field.
    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        *field.slot(&mut self.record) = value.into();
    }

    /// Overwrite the email and refresh its inline error.
    ///
    /// Only addresses that already contain both `@` and `.` are checked, so a
    /// half-typed address does not flash an error.
    pub fn update_email(&mut self, value: impl Into<String>) {
        let email = value.into();
        self.email_error = None;

        if email.contains('@') && email.contains('.') && !is_valid_email(&email) {
            self.email_error = Some(EMAIL_FIELD_ERROR.to_string());
        }

        self.record.email = email;
    }
}

// -----------------------------------------------------------------------------
// 3. Single Choices
// -----------------------------------------------------------------------------

impl WaitlistForm {
    pub fn select_role(&mut self, role: Role) {
        self.record.role = Some(Choice::predefined(role));
    }

    /// Pick "Other" for the role, keeping any text already typed for it.
    pub fn select_other_role(&mut self) {
        if !self.is_other_role_selected() {
            self.record.role = Some(Choice::custom(""));
        }
    }

    pub fn set_custom_role(&mut self, text: impl Into<String>) {
        self.record.role = Some(Choice::custom(text));
    }

    pub fn is_role_selected(&self, role: Role) -> bool {
        self.record.role == Some(Choice::predefined(role))
    }

    pub fn is_other_role_selected(&self) -> bool {
        self.record.role.as_ref().is_some_and(Choice::is_custom)
    }

    /// Text typed for a custom role, empty when none.
    pub fn custom_role(&self) -> &str {
        self.record
            .role
            .as_ref()
            .and_then(Choice::custom_text)
            .unwrap_or_default()
    }

    pub fn set_delivery_date(&mut self, window: DeliveryWindow) {
        self.record.delivery_date = Some(window);
    }

    pub fn set_beta_updates(&mut self, answer: BetaUpdates) {
        self.record.beta_updates = Some(answer);
    }
}

// -----------------------------------------------------------------------------
// 4. Multi-Value Fields
// -----------------------------------------------------------------------------

impl WaitlistForm {
    /// Add or remove an item of a multi-value field by its display label.
    ///
    /// Adding an item already present, or removing one that is absent, is a
    /// no-op. For communication, `"Other"` toggles the custom channel.
    pub fn toggle_multi_value(
        &mut self,
        field: MultiValueField,
        item: &str,
        included: bool,
    ) -> Result<(), FieldError> {
        let unknown = || FieldError::UnknownOption {
            field: field.name(),
            item: item.to_string(),
        };

        match field {
            MultiValueField::Products => {
                let product = Product::from_label(item).ok_or_else(unknown)?;
                self.toggle_product(product, included);
            }
            MultiValueField::Communication if item == OTHER_LABEL => {
                self.toggle_other_channel(included);
            }
            MultiValueField::Communication => {
                let channel = Channel::from_label(item).ok_or_else(unknown)?;
                self.toggle_channel(channel, included);
            }
        }

        Ok(())
    }

    pub fn toggle_product(&mut self, product: Product, included: bool) {
        let products = &mut self.record.products;
        if included {
            if !products.contains(&product) {
                products.push(product);
            }
        } else {
            products.retain(|p| *p != product);
        }
    }

    pub fn is_product_selected(&self, product: Product) -> bool {
        self.record.products.contains(&product)
    }

    /// Add or remove a predefined channel. Ignored while "Other" is selected.
    pub fn toggle_channel(&mut self, channel: Channel, included: bool) {
        if self.is_channel_disabled(channel) {
            return;
        }

        let choice = Choice::predefined(channel);
        let communication = &mut self.record.communication;
        if included {
            if !communication.contains(&choice) {
                communication.push(choice);
            }
        } else {
            communication.retain(|c| *c != choice);
        }
    }

    /// Select or drop the custom "Other" channel. Selecting it discards any
    /// predefined channels already checked rather than keeping them checked
    /// and disabled, so the record never mixes "Other" with named channels.
    pub fn toggle_other_channel(&mut self, included: bool) {
        if included {
            if !self.is_other_channel_selected() {
                self.record.communication = vec![Choice::custom("")];
            }
        } else {
            self.record.communication.retain(|c| !c.is_custom());
        }
    }

    /// Set the free text of the "Other" channel. Ignored unless it is selected.
    pub fn set_other_channel_details(&mut self, details: impl Into<String>) {
        let custom = self.record.communication.iter_mut().find(|c| c.is_custom());
        if let Some(Choice::Custom { text }) = custom {
            *text = details.into();
        }
    }

    pub fn is_channel_selected(&self, channel: Channel) -> bool {
        self.record.communication.contains(&Choice::predefined(channel))
    }

    pub fn is_other_channel_selected(&self) -> bool {
        self.record.communication.iter().any(Choice::is_custom)
    }

    /// Predefined channels are locked while "Other" is selected.
    pub fn is_channel_disabled(&self, _channel: Channel) -> bool {
        self.is_other_channel_selected()
    }

    /// Text typed for the "Other" channel, empty when none.
    pub fn other_channel_details(&self) -> &str {
        self.record
            .communication
            .iter()
            .find_map(Choice::custom_text)
            .unwrap_or_default()
    }
}

// -----------------------------------------------------------------------------
// 5. Validation & Reset
// -----------------------------------------------------------------------------

impl WaitlistForm {
    /// Every rule the current record breaks, in form order.
    pub fn validate(&self) -> Vec<ValidationError> {
        validation::validate(&self.record)
    }

    /// Wipe the record after `confirm` agrees. An empty form is left alone
    /// without asking. Returns whether anything was cleared.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.record.is_empty() || !confirm() {
            return false;
        }

        self.reset();
        true
    }

    /// Return the record and inline errors to their initial state.
    pub(super) fn reset(&mut self) {
        self.record = WaitlistRecord::default();
        self.email_error = None;
    }
}

// -----------------------------------------------------------------------------
// 6. Tests
// -----------------------------------------------------------------------------
