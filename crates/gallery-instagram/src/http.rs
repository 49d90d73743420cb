// Rust guideline compliant 2026-10-14

//! Blocking HTTP transport backed by reqwest.

use crate::{PublishError, Transport};
use reqwest::blocking::Client;
use std::time::Duration;

/// Network transport for Graph API calls.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Transport` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PublishError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<serde_json::Value, PublishError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .map_err(|e| PublishError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PublishError::Transport(format!("Failed to read response: {}", e)))?;

        tracing::debug!(%status, "Graph API responded");

        serde_json::from_str(&body)
            .map_err(|_| PublishError::InvalidResponse(format!("{} returned {}: {}", url, status, body)))
    }
}
