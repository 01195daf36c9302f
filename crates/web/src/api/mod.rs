// =============================================================================
// Cloudora Web - Outbound API Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Error Types
// 4. Dispatch Seam
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Submodules
// -----------------------------------------------------------------------------

pub mod waitlist;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use waitlist::WaitlistClient;

use thiserror::Error;

use crate::form::WaitlistRecord;

// -----------------------------------------------------------------------------
// 3. Error Types
// -----------------------------------------------------------------------------

/// Failures that stop a record from leaving the browser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("No waitlist endpoint configured")]
    MissingEndpoint,
}

// -----------------------------------------------------------------------------
// 4. Dispatch Seam
// -----------------------------------------------------------------------------

/// Sends a finished record somewhere.
///
/// `Ok(())` only means the request left without a transport error. The
/// remote status is never visible to the caller.
#[allow(async_fn_in_trait)]
pub trait Dispatch {
    async fn dispatch(&self, record: &WaitlistRecord) -> Result<(), DispatchError>;
}
