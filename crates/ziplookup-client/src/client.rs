//! HTTP client for the ZIP-code Lookup Service.
//!
//! Wraps `reqwest` with the service's wire contract: a JSON `POST` carrying the
//! raw address under the legacy `zip_code` field, a search-engine style hit
//! envelope on success, and an optional `{"error": "..."}` body on failure.

use std::time::Duration;

use reqwest::{Client, Url};
use ziplookup_core::ResultSet;

use crate::error::LookupError;
use crate::types::{ErrorBody, LookupRequest};

/// Client for the Lookup Service endpoint.
///
/// There is no retry: one call to [`LookupClient::lookup`] is one `POST`.
pub struct LookupClient {
    client: Client,
    endpoint: Url,
}

impl LookupClient {
    /// Creates a client for `endpoint`.
    ///
    /// `timeout_secs` bounds each request end to end; `0` disables the
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidUrl`] if `endpoint`
    /// is not an absolute http(s) URL.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, LookupError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;

        let endpoint = Self::parse_endpoint(endpoint)?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits `raw_address` to the service and returns the hit envelope.
    ///
    /// The address is sent exactly as given; parsing and validation happen
    /// before the caller gets here.
    ///
    /// # Errors
    ///
    /// - [`LookupError::RequestFailed`] on a non-2xx status, with the body's
    ///   `error` string when present.
    /// - [`LookupError::Http`] on network failure or timeout.
    /// - [`LookupError::Deserialize`] if a 2xx body is not valid JSON.
    pub async fn lookup(&self, raw_address: &str) -> Result<ResultSet, LookupError> {
        let request = LookupRequest {
            zip_code: raw_address,
        };
        tracing::debug!(endpoint = %self.endpoint, "posting lookup request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = ErrorBody::message_from(&body);
            tracing::warn!(
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "lookup service returned an error status"
            );
            return Err(LookupError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                context: format!("lookup response from {}", self.endpoint),
                source: e,
            })?;
        Ok(ResultSet::from_value(value))
    }

    fn parse_endpoint(endpoint: &str) -> Result<Url, LookupError> {
        let invalid = |reason: String| LookupError::InvalidUrl {
            url: endpoint.to_owned(),
            reason,
        };
        let url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
