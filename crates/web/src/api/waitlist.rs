// =============================================================================
// Cloudora Web - Waitlist Submission Client
// =============================================================================

use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestMode;

use super::{Dispatch, DispatchError};
use crate::config::SiteConfig;
use crate::form::WaitlistRecord;

/// Posts waitlist records to the configured endpoint, fire-and-forget.
#[derive(Clone, Debug)]
pub struct WaitlistClient {
    endpoint: Option<String>,
}

impl WaitlistClient {
    /// Create a client for an explicit endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
        }
    }

    /// Create a client from the build-time configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }

    /// Get the endpoint, if one was configured.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Build the opaque POST. `no-cors` keeps the response out of reach, so
    /// only transport failures can be observed.
    fn build_request(&self) -> Result<RequestBuilder, DispatchError> {
        let url = self.endpoint.as_deref().ok_or(DispatchError::MissingEndpoint)?;

        Ok(Request::post(url)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/json"))
    }
}

impl Dispatch for WaitlistClient {
    async fn dispatch(&self, record: &WaitlistRecord) -> Result<(), DispatchError> {
        let body =
            serde_json::to_string(record).map_err(|e| DispatchError::Serialize(e.to_string()))?;

        let request = self
            .build_request()?
            .body(body)
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        log::info!("Submitting waitlist record ({} products)", record.products.len());

        // The opaque response carries no usable status.
        let _response = request
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_missing_endpoint_fails_before_sending() {
        let client = WaitlistClient::from_config(&SiteConfig::default());
        assert_eq!(client.endpoint(), None);

        let result = block_on(client.dispatch(&WaitlistRecord::default()));
        assert_eq!(result, Err(DispatchError::MissingEndpoint));
    }

    #[test]
    fn test_endpoint_from_config() {
        let config = SiteConfig::from_values(Some("https://script.example.com/exec"), None, None);
        let client = WaitlistClient::from_config(&config);
        assert_eq!(client.endpoint(), Some("https://script.example.com/exec"));

        let explicit = WaitlistClient::new("https://script.example.com/exec");
        assert_eq!(explicit.endpoint(), client.endpoint());
    }
}
