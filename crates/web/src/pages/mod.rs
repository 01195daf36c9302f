// =============================================================================
// Cloudora Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Landing
// 2. Waitlist
// 3. Fallback
// =============================================================================

pub mod home;
pub mod not_found;
pub mod waitlist;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use waitlist::{WaitlistPage, WaitlistSignup};
