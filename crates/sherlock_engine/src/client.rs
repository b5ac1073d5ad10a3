use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use sherlock_core::{FoundSite, SearchRequest};
use sherlock_logging::{sherlock_debug, sherlock_info};
use url::Url;

use crate::body::{map_reqwest_error, read_limited};
use crate::{FailureKind, LookupError};

/// Relay route the browser-side client posts to.
pub const SUBMIT_PATH: &str = "/api/submit";

/// Settings for the browser-side lookup client.
///
/// No request timeout is applied: a lookup runs until the relay answers
/// or the connection fails. `connect_timeout` only bounds establishing the TCP link.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub relay_url: String,
    pub connect_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            relay_url: "http://127.0.0.1:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait LookupClient: Send + Sync {
    /// Posts the request to the relay and returns the raw JSON body.
    async fn submit(&self, request: &SearchRequest) -> Result<Value, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLookupClient {
    settings: LookupSettings,
}

impl ReqwestLookupClient {
    pub fn new(settings: LookupSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(map_reqwest_error)
    }

    fn endpoint(&self) -> Result<Url, LookupError> {
        Url::parse(&self.settings.relay_url)
            .and_then(|base| base.join(SUBMIT_PATH))
            .map_err(|err| LookupError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl LookupClient for ReqwestLookupClient {
    async fn submit(&self, request: &SearchRequest) -> Result<Value, LookupError> {
        let endpoint = self.endpoint()?;
        let body = serde_json::to_vec(request)
            .map_err(|err| LookupError::new(FailureKind::Decode, err.to_string()))?;
        let client = self.build_client()?;

        sherlock_info!(
            "Submitting lookup user={} sites={} nsfw={} to {}",
            request.username,
            request.sites.len(),
            request.with_nsfw,
            endpoint
        );

        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = read_limited(response, self.settings.max_response_bytes).await?;
        sherlock_debug!("Lookup response {} bytes", bytes.len());
        serde_json::from_slice(&bytes)
            .map_err(|err| LookupError::new(FailureKind::Decode, err.to_string()))
    }
}

/// Interprets the raw relay response as a list of found-site records.
pub fn decode_found_sites(raw: Value) -> Result<Vec<FoundSite>, LookupError> {
    serde_json::from_value(raw)
        .map_err(|err| LookupError::new(FailureKind::Decode, err.to_string()))
}
