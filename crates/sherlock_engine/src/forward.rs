use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use sherlock_core::RelayPayload;
use sherlock_logging::sherlock_info;

use crate::body::{map_reqwest_error, read_limited};
use crate::{FailureKind, LookupError};

#[derive(Debug, Clone)]
pub struct ForwardSettings {
    pub upstream_url: String,
    pub connect_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ForwardSettings {
    fn default() -> Self {
        Self {
            upstream_url: "http://api:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Upstream response, untouched, for the relay to pass back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[async_trait::async_trait]
pub trait Upstream: Send + Sync {
    async fn forward(&self, payload: &RelayPayload) -> Result<UpstreamReply, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUpstream {
    settings: ForwardSettings,
}

impl ReqwestUpstream {
    pub fn new(settings: ForwardSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Upstream for ReqwestUpstream {
    async fn forward(&self, payload: &RelayPayload) -> Result<UpstreamReply, LookupError> {
        let target = reqwest::Url::parse(&self.settings.upstream_url)
            .map_err(|err| LookupError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let body = serde_json::to_vec(payload)
            .map_err(|err| LookupError::new(FailureKind::Decode, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(map_reqwest_error)?;

        let response = client
            .post(target)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = read_limited(response, self.settings.max_response_bytes).await?;

        sherlock_info!(
            "Upstream answered status={} bytes={} sites={}",
            status,
            body.len(),
            payload.sites.len()
        );

        Ok(UpstreamReply {
            status,
            content_type,
            body: Bytes::from(body),
        })
    }
}
