// =============================================================================
// Cloudora Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Common Components
// 2. Form Components
// 3. Page Chrome
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod nav;

pub use common::{Button, ButtonVariant, Card, IconCard, LoadingView, ToastViewport};
pub use footer::Footer;
pub use forms::{CheckboxCard, ChoiceCard, FormSection, TextInput};
pub use nav::Navigation;
