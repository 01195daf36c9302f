// =============================================================================
// Cloudora Web - Browser Services
// =============================================================================

pub mod notifications;

pub use notifications::{Notice, Toast, ToastKind, ToastStack, Toaster};
