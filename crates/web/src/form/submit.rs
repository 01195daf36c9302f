// =============================================================================
// Cloudora Web - Waitlist Submission Flow
// =============================================================================
// Table of Contents:
// 1. Outcomes
// 2. Submission Phases
// 3. Tests
// =============================================================================

use thiserror::Error;

use super::record::WaitlistRecord;
use super::state::WaitlistForm;
use super::validation::{is_valid_email, ValidationError};
use crate::api::{Dispatch, DispatchError};
use crate::services::notifications::Notice;

// -----------------------------------------------------------------------------
// 1. Outcomes
// -----------------------------------------------------------------------------

/// Reasons a submission attempt was reported back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please complete all required fields: {0}")]
    Validation(ValidationError),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Submission failed: {0}")]
    Dispatch(#[from] DispatchError),
}

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dispatched without a transport error; the form has been reset.
    Submitted,
    /// Honeypot was filled. Nothing is sent and nothing is shown.
    Dropped,
    /// Another attempt is still in flight.
    InFlight,
    /// Stopped before or during dispatch; the record is untouched.
    Rejected(SubmitError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }

    /// Outcome of a finished dispatch, independent of any form state.
    pub fn from_dispatch(result: &Result<(), DispatchError>) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(error) => SubmitOutcome::Rejected(SubmitError::Dispatch(error.clone())),
        }
    }

    /// Toast to show for this outcome, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Submitted => Some(Notice::success(
                "Waitlist joined successfully",
                "We'll be in touch soon!",
            )),
            SubmitOutcome::Dropped | SubmitOutcome::InFlight => None,
            SubmitOutcome::Rejected(SubmitError::Validation(error)) => Some(Notice::error(
                "Please complete all required fields",
                error.to_string(),
            )),
            SubmitOutcome::Rejected(SubmitError::InvalidEmail) => Some(Notice::error(
                "Invalid email address",
                ValidationError::EmailInvalid.to_string(),
            )),
            SubmitOutcome::Rejected(SubmitError::Dispatch(_)) => Some(Notice::error(
                "Something went wrong",
                "Please try again later",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Submission Phases
// -----------------------------------------------------------------------------

impl WaitlistForm {
    /// Run the pre-flight checks and mark the form as submitting.
    ///
    /// Returns the record to send, or the outcome that ends the attempt here.
    pub fn begin_submit(&mut self) -> Result<WaitlistRecord, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::InFlight);
        }

        if self.record.is_honeypot_filled() {
            log::warn!("Honeypot field filled, dropping waitlist submission");
            return Err(SubmitOutcome::Dropped);
        }

        if let Some(error) = self.validate().into_iter().next() {
            return Err(SubmitOutcome::Rejected(SubmitError::Validation(error)));
        }

        if !is_valid_email(&self.record.email) {
            return Err(SubmitOutcome::Rejected(SubmitError::InvalidEmail));
        }

        self.submitting = true;
        Ok(self.record.clone())
    }

    /// Apply the dispatch result: reset on success, keep the record on
    /// failure, and always leave the submitting state.
    pub fn finish_submit(&mut self, result: Result<(), DispatchError>) -> SubmitOutcome {
        self.submitting = false;

        match &result {
            Ok(()) => self.reset(),
            Err(error) => log::error!("Waitlist submission failed: {}", error),
        }

        SubmitOutcome::from_dispatch(&result)
    }

    /// Validate, dispatch once, and settle the form.
    pub async fn submit<D: Dispatch>(&mut self, dispatcher: &D) -> SubmitOutcome {
        let record = match self.begin_submit() {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };

        let result = dispatcher.dispatch(&record).await;
        self.finish_submit(result)
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fixtures::{valid_form, RecordingDispatcher};
    use crate::form::record::{Channel, Product, TextField};
    use futures::executor::block_on;

    #[test]
    fn test_successful_submit_resets() {
        let mut form = valid_form();
        let expected = form.record().clone();
        let dispatcher = RecordingDispatcher::succeeding();

        let outcome = block_on(form.submit(&dispatcher));

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(dispatcher.sent(), vec![expected]);
        assert_eq!(form, WaitlistForm::new());
        assert!(!form.is_submitting());
        assert_eq!(
            outcome.notice().map(|n| n.title),
            Some("Waitlist joined successfully".to_string())
        );
    }

    #[test]
    fn test_transport_error_keeps_record() {
        let mut form = valid_form();
        let before = form.record().clone();
        let dispatcher = RecordingDispatcher::failing("connection refused");

        let outcome = block_on(form.submit(&dispatcher));

        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(SubmitError::Dispatch(DispatchError::Network(_)))
        ));
        assert_eq!(form.record(), &before);
        assert!(!form.is_submitting());
        assert_eq!(dispatcher.sent().len(), 1);

        let notice = outcome.notice().unwrap();
        assert_eq!(notice.title, "Something went wrong");
        assert_eq!(notice.description, "Please try again later");
    }

    #[test]
    fn test_honeypot_is_silent() {
        let mut form = valid_form();
        form.update_field(TextField::WebsiteUrl, "http://spam.example");
        let dispatcher = RecordingDispatcher::succeeding();

        let outcome = block_on(form.submit(&dispatcher));

        assert_eq!(outcome, SubmitOutcome::Dropped);
        assert_eq!(outcome.notice(), None);
        assert!(dispatcher.sent().is_empty());
        assert!(!form.is_submitting());
        assert!(!form.record().is_empty());
    }

    #[test]
    fn test_missing_field_blocks_dispatch() {
        let mut form = valid_form();
        form.update_field(TextField::Phone, "");
        let dispatcher = RecordingDispatcher::succeeding();

        let outcome = block_on(form.submit(&dispatcher));

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(SubmitError::Validation(ValidationError::PhoneRequired))
        );
        assert!(dispatcher.sent().is_empty());

        let notice = outcome.notice().unwrap();
        assert_eq!(notice.title, "Please complete all required fields");
        assert_eq!(notice.description, "Phone number is required");
    }

    #[test]
    fn test_first_violation_is_reported() {
        let mut form = WaitlistForm::new();
        let dispatcher = RecordingDispatcher::succeeding();

        let outcome = block_on(form.submit(&dispatcher));

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(SubmitError::Validation(ValidationError::NameRequired))
        );
        assert!(dispatcher.sent().is_empty());
    }

    #[test]
    fn test_in_flight_guard() {
        let mut form = valid_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        assert_eq!(form.begin_submit(), Err(SubmitOutcome::InFlight));
        assert_eq!(SubmitOutcome::InFlight.notice(), None);

        assert_eq!(form.finish_submit(Ok(())), SubmitOutcome::Submitted);
        assert!(form.can_submit());
    }

    #[test]
    fn test_outcome_is_known_without_the_form() {
        let mut form = valid_form();
        form.begin_submit().unwrap();
        assert_eq!(
            form.finish_submit(Ok(())),
            SubmitOutcome::from_dispatch(&Ok(()))
        );

        let failure = Err(DispatchError::Network("offline".into()));
        let mut form = valid_form();
        form.begin_submit().unwrap();
        assert_eq!(form.finish_submit(failure.clone()), SubmitOutcome::from_dispatch(&failure));

        let notice = SubmitOutcome::from_dispatch(&Ok(())).notice().unwrap();
        assert_eq!(notice.title, "Waitlist joined successfully");
        assert!(SubmitOutcome::from_dispatch(&Ok(())).is_submitted());
        assert!(!SubmitOutcome::from_dispatch(&failure).is_submitted());
    }

    #[test]
    fn test_no_dispatch_for_any_blank_required_field() {
        let cases: [fn(&mut WaitlistForm); 9] = [
            |f: &mut WaitlistForm| f.update_field(TextField::Name, ""),
            |f: &mut WaitlistForm| f.update_email(""),
            |f: &mut WaitlistForm| f.update_field(TextField::Phone, ""),
            |f: &mut WaitlistForm| f.update_field(TextField::CompanyName, ""),
            |f: &mut WaitlistForm| f.record.role = None,
            |f: &mut WaitlistForm| f.toggle_product(Product::BookingSystem, false),
            |f: &mut WaitlistForm| f.record.delivery_date = None,
            |f: &mut WaitlistForm| f.record.beta_updates = None,
            |f: &mut WaitlistForm| f.toggle_channel(Channel::Whatsapp, false),
        ];

        for blank in cases {
            let mut form = valid_form();
            blank(&mut form);
            let dispatcher = RecordingDispatcher::succeeding();

            let outcome = block_on(form.submit(&dispatcher));

            assert!(matches!(
                outcome,
                SubmitOutcome::Rejected(SubmitError::Validation(_))
            ));
            assert!(dispatcher.sent().is_empty());
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_invalid_email_notice() {
        let notice = SubmitOutcome::Rejected(SubmitError::InvalidEmail).notice().unwrap();
        assert_eq!(notice.title, "Invalid email address");
        assert_eq!(notice.description, "Please enter a valid email address");
    }
}
