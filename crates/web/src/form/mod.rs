// =============================================================================
// Cloudora Web - Waitlist Form Logic
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Test Fixtures
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Submodules
// -----------------------------------------------------------------------------

pub mod record;
pub mod state;
pub mod submit;
pub mod validation;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use record::{
    BetaUpdates, Channel, Choice, DeliveryWindow, FieldError, MultiValueField, OptionSet, Product,
    Role, TextField, WaitlistRecord, OTHER_LABEL,
};
pub use state::{WaitlistForm, CLEAR_CONFIRMATION, EMAIL_FIELD_ERROR};
pub use submit::{SubmitError, SubmitOutcome};
pub use validation::{is_valid_email, validate, ValidationError};

// -----------------------------------------------------------------------------
// 3. Test Fixtures
// -----------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod fixtures {
    use std::cell::RefCell;

    use super::*;
    use crate::api::{Dispatch, DispatchError};

    /// A record that passes every rule.
    pub fn valid_record() -> WaitlistRecord {
        WaitlistRecord {
            name: "Amina Otieno".into(),
            email: "amina@example.co.ke".into(),
            phone: "+254712345678".into(),
            company_name: "Otieno Traders".into(),
            role: Some(Choice::predefined(Role::Manager)),
            products: vec![Product::BookingSystem],
            delivery_date: Some(DeliveryWindow::Immediately),
            beta_updates: Some(BetaUpdates::No),
            communication: vec![Choice::predefined(Channel::Whatsapp)],
            website_url: String::new(),
        }
    }

    /// A form filled in through its public operations.
    pub fn valid_form() -> WaitlistForm {
        let mut form = WaitlistForm::new();
        form.update_field(TextField::Name, "Amina Otieno");
        form.update_email("amina@example.co.ke");
        form.update_field(TextField::Phone, "+254712345678");
        form.update_field(TextField::CompanyName, "Otieno Traders");
        form.select_role(Role::Manager);
        form.toggle_product(Product::BookingSystem, true);
        form.set_delivery_date(DeliveryWindow::Immediately);
        form.set_beta_updates(BetaUpdates::No);
        form.toggle_channel(Channel::Whatsapp, true);
        assert_eq!(form.record(), &valid_record());
        form
    }

    /// In-memory dispatcher that records what it was asked to send.
    pub struct RecordingDispatcher {
        sent: RefCell<Vec<WaitlistRecord>>,
        failure: Option<String>,
    }

    impl RecordingDispatcher {
        pub fn succeeding() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                failure: None,
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                failure: Some(message.to_string()),
            }
        }

        pub fn sent(&self) -> Vec<WaitlistRecord> {
            self.sent.borrow().clone()
        }
    }

    impl Dispatch for RecordingDispatcher {
        async fn dispatch(&self, record: &WaitlistRecord) -> Result<(), DispatchError> {
            self.sent.borrow_mut().push(record.clone());
            match &self.failure {
                Some(message) => Err(DispatchError::Network(message.clone())),
                None => Ok(()),
            }
        }
    }
}
