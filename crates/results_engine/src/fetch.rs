use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, USER_AGENT};
use results_core::SearchResponse;
use results_logging::{results_debug, results_info};

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    /// Whole-request limit. `None` leaves it to the network stack.
    pub request_timeout: Option<Duration>,
    /// Body size cap. `None` accepts any size.
    pub max_bytes: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: None,
            user_agent: format!("results_view/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    /// GETs a fully built search URL and decodes the response body.
    async fn search(&self, url: &str) -> Result<SearchResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchApi {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl ReqwestSearchApi {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestSearchApi {
    async fn search(&self, url: &str) -> Result<SearchResponse, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        results_info!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let (Some(max_bytes), Some(content_len)) = (max_bytes, response.content_length()) {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if let Some(max_bytes) = max_bytes.filter(|max| next_len > *max) {
                return Err(too_large(max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let decoded: SearchResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        results_debug!(
            "Decoded {} results ({} bytes)",
            decoded.all_results.len(),
            body.len()
        );
        Ok(decoded)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
