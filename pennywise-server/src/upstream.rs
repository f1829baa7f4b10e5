//! Nessie banking sandbox client
//!
//! Forwards the `NESSIE` API key as a `key` query parameter and passes the
//! upstream JSON body through untouched.

use pennywise_core::Settings;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors from the upstream proxy path
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("NESSIE API Key not found in environment")]
    MissingApiKey,

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("upstream returned an invalid body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

impl UpstreamError {
    // reqwest errors carry the request URL, which includes the API key.
    fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e.without_url())
        }
    }
}

/// HTTP client for the Nessie API
#[derive(Clone)]
pub struct NessieClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NessieClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.nessie_base_url.clone(), settings.nessie_key.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// GET /customers
    pub async fn customers(&self) -> Result<Value, UpstreamError> {
        self.get_json("customers").await
    }

    async fn get_json(&self, path: &str) -> Result<Value, UpstreamError> {
        let key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        tracing::debug!(url = %url, "Calling Nessie API");
        let response = self
            .http
            .get(&url)
            .query(&[("key", key)])
            .send()
            .await
            .map_err(UpstreamError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "Nessie API returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::InvalidBody(e.without_url()))
    }
}

impl std::fmt::Debug for NessieClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NessieClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable base URL: the call must not get that far
        let client = NessieClient::new("http://127.0.0.1:9", None);
        let err = client.customers().await.unwrap_err();
        assert!(matches!(err, UpstreamError::MissingApiKey));
        assert!(err.to_string().contains("NESSIE"));
    }

    #[test]
    fn key_presence_follows_settings() {
        let mut settings = Settings::default();
        assert!(!NessieClient::from_settings(&settings).has_api_key());

        settings.nessie_key = Some("abc123".into());
        assert!(NessieClient::from_settings(&settings).has_api_key());
    }

    #[test]
    fn debug_hides_key() {
        let client = NessieClient::new("http://api.nessieisreal.com", Some("s3cret".into()));
        assert!(!format!("{client:?}").contains("s3cret"));
    }
}
