// =============================================================================
// Cloudora Web - Waitlist Validation
// =============================================================================
// Table of Contents:
// 1. Email Check
// 2. Validation Errors
// 3. Record Validation
// 4. Tests
// =============================================================================

use thiserror::Error;

use super::record::{Choice, WaitlistRecord};

/// Minimum trimmed name length.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed phone length.
pub const MIN_PHONE_LEN: usize = 10;

// -----------------------------------------------------------------------------
// 1. Email Check
// -----------------------------------------------------------------------------

/// Whitespace as browsers define it for form input: Unicode `White_Space`
/// without U+0085, plus the byte order mark U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strip form whitespace from both ends.
fn trimmed(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Basic `local@domain.tld` shape check.
///
/// Accepts exactly one `@`, no whitespace anywhere, a non-empty local part, and
/// a domain holding a `.` with at least one character on each side of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// -----------------------------------------------------------------------------
// 2. Validation Errors
// -----------------------------------------------------------------------------

/// A single violated rule, worded for the person filling the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Phone number is required")]
    PhoneRequired,

    #[error("Please enter a valid phone number")]
    PhoneTooShort,

    #[error("Company name is required")]
    CompanyNameRequired,

    #[error("Please select your role")]
    RoleRequired,

    #[error("Please specify your role")]
    RoleUnspecified,

    #[error("Please select at least one product")]
    ProductsRequired,

    #[error("Please select when you'd like to start using the products")]
    DeliveryDateRequired,

    #[error("Please specify if you'd like to receive beta updates")]
    BetaUpdatesRequired,

    #[error("Please select a preferred communication method")]
    CommunicationRequired,

    #[error("Please specify your preferred communication method")]
    CommunicationUnspecified,
}

// -----------------------------------------------------------------------------
// 3. Record Validation
// -----------------------------------------------------------------------------

/// Check every required field in form order and collect all violations.
pub fn validate(record: &WaitlistRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name = trimmed(&record.name);
    if name.is_empty() {
        errors.push(ValidationError::NameRequired);
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push(ValidationError::NameTooShort);
    }

    if trimmed(&record.email).is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !is_valid_email(&record.email) {
        errors.push(ValidationError::EmailInvalid);
    }

    let phone = trimmed(&record.phone);
    if phone.is_empty() {
        errors.push(ValidationError::PhoneRequired);
    } else if phone.chars().count() < MIN_PHONE_LEN {
        errors.push(ValidationError::PhoneTooShort);
    }

    if trimmed(&record.company_name).is_empty() {
        errors.push(ValidationError::CompanyNameRequired);
    }

    match &record.role {
        None => errors.push(ValidationError::RoleRequired),
        Some(Choice::Custom { text }) if trimmed(text).is_empty() => {
            errors.push(ValidationError::RoleUnspecified)
        }
        Some(_) => {}
    }

    if record.products.is_empty() {
        errors.push(ValidationError::ProductsRequired);
    }

    if record.delivery_date.is_none() {
        errors.push(ValidationError::DeliveryDateRequired);
    }

    if record.beta_updates.is_none() {
        errors.push(ValidationError::BetaUpdatesRequired);
    }

    if record.communication.is_empty() {
        errors.push(ValidationError::CommunicationRequired);
    } else if record
        .communication
        .iter()
        .any(|choice| choice.custom_text().is_some_and(|text| trimmed(text).is_empty()))
    {
        errors.push(ValidationError::CommunicationUnspecified);
    }

    errors
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fixtures::valid_record;

    #[test]
    fn test_email_examples() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
    }

    #[test]
    fn test_email_edge_cases() {
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b.c\tom"));
    }

    #[test]
    fn test_email_whitespace_follows_browser_rules() {
        assert!(!is_valid_email("a\u{FEFF}@b.com"));
        assert!(!is_valid_email("a@b.com\u{A0}"));
        assert!(!is_valid_email("a@b\u{2028}.com"));
        assert!(is_valid_email("a\u{85}@b.com"));
        assert!(is_form_whitespace('\u{FEFF}'));
        assert!(!is_form_whitespace('\u{85}'));
    }

    #[test]
    fn test_bom_only_name_counts_as_empty() {
        let mut record = valid_record();
        record.name = "\u{FEFF}".into();
        assert_eq!(validate(&record), vec![ValidationError::NameRequired]);
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate(&valid_record()).is_empty());
    }

    #[test]
    fn test_each_required_field() {
        let cases: [(fn(&mut WaitlistRecord), ValidationError); 9] = [
            (|r: &mut WaitlistRecord| r.name.clear(), ValidationError::NameRequired),
            (|r: &mut WaitlistRecord| r.email.clear(), ValidationError::EmailRequired),
            (|r: &mut WaitlistRecord| r.phone.clear(), ValidationError::PhoneRequired),
            (|r: &mut WaitlistRecord| r.company_name.clear(), ValidationError::CompanyNameRequired),
            (|r: &mut WaitlistRecord| r.role = None, ValidationError::RoleRequired),
            (|r: &mut WaitlistRecord| r.products.clear(), ValidationError::ProductsRequired),
            (|r: &mut WaitlistRecord| r.delivery_date = None, ValidationError::DeliveryDateRequired),
            (|r: &mut WaitlistRecord| r.beta_updates = None, ValidationError::BetaUpdatesRequired),
            (|r: &mut WaitlistRecord| r.communication.clear(), ValidationError::CommunicationRequired),
        ];

        for (blank, expected) in cases {
            let mut record = valid_record();
            blank(&mut record);
            assert_eq!(validate(&record), vec![expected]);
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut record = valid_record();
        record.name = "   ".into();
        record.company_name = "\t".into();
        assert_eq!(
            validate(&record),
            vec![ValidationError::NameRequired, ValidationError::CompanyNameRequired]
        );
    }

    #[test]
    fn test_length_rules() {
        let mut record = valid_record();
        record.name = " J ".into();
        record.phone = "071234567".into();
        assert_eq!(
            validate(&record),
            vec![ValidationError::NameTooShort, ValidationError::PhoneTooShort]
        );
    }

    #[test]
    fn test_bad_email_shape() {
        let mut record = valid_record();
        record.email = "amina@example".into();
        assert_eq!(validate(&record), vec![ValidationError::EmailInvalid]);
    }

    #[test]
    fn test_blank_custom_choices() {
        let mut record = valid_record();
        record.role = Some(Choice::custom("  "));
        record.communication = vec![Choice::custom("")];
        assert_eq!(
            validate(&record),
            vec![ValidationError::RoleUnspecified, ValidationError::CommunicationUnspecified]
        );

        record.role = Some(Choice::custom("Consultant"));
        record.communication = vec![Choice::custom("Telegram")];
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_errors_are_in_form_order() {
        let errors = validate(&WaitlistRecord::default());
        assert_eq!(errors.first(), Some(&ValidationError::NameRequired));
        assert_eq!(errors.last(), Some(&ValidationError::CommunicationRequired));
        assert_eq!(errors.len(), 9);
        assert_eq!(errors[0].to_string(), "Name is required");
    }
}
