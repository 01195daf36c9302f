// =============================================================================
// Cloudora Web - Waitlist Record
// =============================================================================
// Table of Contents:
// 1. Option Sets
// 2. Tagged Choices
// 3. Record
// 4. Field Selectors
// 5. Tests
// =============================================================================

use serde::Serialize;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Option Sets
// -----------------------------------------------------------------------------

/// A fixed, enumerable list of answers offered by the form.
pub trait OptionSet: Copy + PartialEq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Text shown next to the control.
    fn label(&self) -> &'static str;

    /// Look an option up by its display label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == label)
    }
}

/// Role of the person signing up. "Other" is a [`Choice::Custom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Manager,
    Employee,
    Student,
}

impl Role {
    /// Stable id, also used as the DOM id of the radio.
    pub fn id(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Student => "student",
        }
    }
}

impl OptionSet for Role {
    const ALL: &'static [Self] = &[Role::Owner, Role::Manager, Role::Employee, Role::Student];

    fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner/Founder",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
            Role::Student => "Student",
        }
    }
}

/// Products a lead can express interest in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Product {
    #[serde(rename = "Booking System")]
    BookingSystem,
    #[serde(rename = "MPESA QR")]
    MpesaQr,
    #[serde(rename = "LMS")]
    Lms,
    #[serde(rename = "Inventory")]
    Inventory,
    #[serde(rename = "Rent Tracking")]
    RentTracking,
}

impl OptionSet for Product {
    const ALL: &'static [Self] = &[
        Product::BookingSystem,
        Product::MpesaQr,
        Product::Lms,
        Product::Inventory,
        Product::RentTracking,
    ];

    fn label(&self) -> &'static str {
        match self {
            Product::BookingSystem => "Booking System",
            Product::MpesaQr => "MPESA QR",
            Product::Lms => "LMS",
            Product::Inventory => "Inventory",
            Product::RentTracking => "Rent Tracking",
        }
    }
}

/// How soon the lead wants to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeliveryWindow {
    #[serde(rename = "immediately")]
    Immediately,
    #[serde(rename = "within-1-3-months")]
    WithinOneToThreeMonths,
    #[serde(rename = "just-exploring")]
    JustExploring,
}

impl DeliveryWindow {
    pub fn id(&self) -> &'static str {
        match self {
            DeliveryWindow::Immediately => "immediately",
            DeliveryWindow::WithinOneToThreeMonths => "within-1-3-months",
            DeliveryWindow::JustExploring => "just-exploring",
        }
    }
}

impl OptionSet for DeliveryWindow {
    const ALL: &'static [Self] = &[
        DeliveryWindow::Immediately,
        DeliveryWindow::WithinOneToThreeMonths,
        DeliveryWindow::JustExploring,
    ];

    fn label(&self) -> &'static str {
        match self {
            DeliveryWindow::Immediately => "Immediately",
            DeliveryWindow::WithinOneToThreeMonths => "Within 1-3 months",
            DeliveryWindow::JustExploring => "Just Exploring",
        }
    }
}

/// Opt-in for beta updates and early access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BetaUpdates {
    Yes,
    No,
}

impl BetaUpdates {
    pub fn id(&self) -> &'static str {
        match self {
            BetaUpdates::Yes => "beta-yes",
            BetaUpdates::No => "beta-no",
        }
    }
}

impl OptionSet for BetaUpdates {
    const ALL: &'static [Self] = &[BetaUpdates::Yes, BetaUpdates::No];

    fn label(&self) -> &'static str {
        match self {
            BetaUpdates::Yes => "Yes",
            BetaUpdates::No => "No",
        }
    }
}

/// Predefined communication channels. "Other" is a [`Choice::Custom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Channel {
    Email,
    Whatsapp,
    Phone,
    #[serde(rename = "SMS")]
    Sms,
}

impl Channel {
    pub fn id(&self) -> &'static str {
        match self {
            Channel::Email => "comm-email",
            Channel::Whatsapp => "comm-whatsapp",
            Channel::Phone => "comm-phone",
            Channel::Sms => "comm-sms",
        }
    }
}

impl OptionSet for Channel {
    const ALL: &'static [Self] = &[Channel::Email, Channel::Whatsapp, Channel::Phone, Channel::Sms];

    fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Whatsapp => "Whatsapp",
            Channel::Phone => "Phone",
            Channel::Sms => "SMS",
        }
    }
}

/// Label of the free-text escape hatch on role and communication.
pub const OTHER_LABEL: &str = "Other";

// -----------------------------------------------------------------------------
// 2. Tagged Choices
// -----------------------------------------------------------------------------

/// Either one of the listed options or the user's own wording.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Choice<T> {
    Predefined { value: T },
    Custom { text: String },
}

impl<T> Choice<T> {
    pub fn predefined(value: T) -> Self {
        Choice::Predefined { value }
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Choice::Custom { text: text.into() }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Choice::Custom { .. })
    }

    /// Custom text, if this is a custom choice.
    pub fn custom_text(&self) -> Option<&str> {
        match self {
            Choice::Custom { text } => Some(text),
            Choice::Predefined { .. } => None,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Record
// -----------------------------------------------------------------------------

/// Everything the waitlist form collects, serialized verbatim as the POST body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WaitlistRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub role: Option<Choice<Role>>,
    pub products: Vec<Product>,
    pub delivery_date: Option<DeliveryWindow>,
    pub beta_updates: Option<BetaUpdates>,
    pub communication: Vec<Choice<Channel>>,
    /// Honeypot. Hidden from people, filled in by bots.
    pub website_url: String,
}

impl WaitlistRecord {
    /// True when nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when the hidden honeypot field carries a value.
    pub fn is_honeypot_filled(&self) -> bool {
        !self.website_url.is_empty()
    }
}

// -----------------------------------------------------------------------------
// 4. Field Selectors
// -----------------------------------------------------------------------------

/// Free-text fields that are overwritten as the user types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Phone,
    CompanyName,
    WebsiteUrl,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Phone => "phone",
            TextField::CompanyName => "company_name",
            TextField::WebsiteUrl => "website_url",
        }
    }

    /// Current contents of this field.
    pub fn value<'a>(&self, record: &'a WaitlistRecord) -> &'a str {
        match self {
            TextField::Name => &record.name,
            TextField::Phone => &record.phone,
            TextField::CompanyName => &record.company_name,
            TextField::WebsiteUrl => &record.website_url,
        }
    }

    pub(crate) fn slot<'a>(&self, record: &'a mut WaitlistRecord) -> &'a mut String {
        match self {
            TextField::Name => &mut record.name,
            TextField::Phone => &mut record.phone,
            TextField::CompanyName => &mut record.company_name,
            TextField::WebsiteUrl => &mut record.website_url,
        }
    }
}

/// Fields holding several selected items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiValueField {
    Products,
    Communication,
}

impl MultiValueField {
    pub fn name(&self) -> &'static str {
        match self {
            MultiValueField::Products => "products",
            MultiValueField::Communication => "communication",
        }
    }
}

/// Rejected field edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown option {item:?} for field {field}")]
    UnknownOption { field: &'static str, item: String },
}

// -----------------------------------------------------------------------------
// 5. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_label() {
        assert_eq!(Product::from_label("LMS"), Some(Product::Lms));
        assert_eq!(Product::from_label("MPESA QR"), Some(Product::MpesaQr));
        assert_eq!(Product::from_label("lms"), None);
        assert_eq!(Channel::from_label("SMS"), Some(Channel::Sms));
        assert_eq!(Channel::from_label(OTHER_LABEL), None);
    }

    #[test]
    fn test_default_record_is_empty() {
        let mut record = WaitlistRecord::default();
        assert!(record.is_empty());
        assert!(!record.is_honeypot_filled());

        record.role = Some(Choice::custom(""));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_text_field_value_matches_slot() {
        let mut record = WaitlistRecord::default();
        *TextField::CompanyName.slot(&mut record) = "Acme".into();
        assert_eq!(TextField::CompanyName.value(&record), "Acme");
        assert_eq!(record.company_name, "Acme");
        assert_eq!(TextField::Name.value(&record), "");
    }

    #[test]
    fn test_wire_format() {
        let record = WaitlistRecord {
            name: "Jane Doe".into(),
            email: "jane@acme.co".into(),
            phone: "+254712345678".into(),
            company_name: "Acme".into(),
            role: Some(Choice::predefined(Role::Owner)),
            products: vec![Product::Lms, Product::RentTracking],
            delivery_date: Some(DeliveryWindow::WithinOneToThreeMonths),
            beta_updates: Some(BetaUpdates::Yes),
            communication: vec![Choice::custom("Telegram")],
            website_url: String::new(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "email": "jane@acme.co",
                "phone": "+254712345678",
                "company_name": "Acme",
                "role": { "kind": "predefined", "value": "owner" },
                "products": ["LMS", "Rent Tracking"],
                "delivery_date": "within-1-3-months",
                "beta_updates": "yes",
                "communication": [{ "kind": "custom", "text": "Telegram" }],
                "website_url": ""
            })
        );
    }

    #[test]
    fn test_empty_record_serializes_nulls() {
        let value = serde_json::to_value(WaitlistRecord::default()).unwrap();
        assert_eq!(value["role"], serde_json::Value::Null);
        assert_eq!(value["delivery_date"], serde_json::Value::Null);
        assert_eq!(value["products"], json!([]));
    }
}
