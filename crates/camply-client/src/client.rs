//! Reqwest-backed client for the catalogue API.
//!
//! The client owns transport concerns only: URL construction, timeouts,
//! retries and mapping HTTP failures onto [`ClientError`]. Payloads are the
//! plain records in [`crate::dto`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::dto::{ApiErrorBody, Campground, HealthStatus, Provider, RecreationArea, SearchResult};
use crate::search::SearchSource;

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Extra attempts made after a retryable failure.
pub const DEFAULT_MAX_RETRIES: u32 = 1;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Failures surfaced by [`CamplyClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The API answered 404.
    #[error("not found: {path}")]
    NotFound {
        /// Request path that was not found.
        path: String,
    },
    /// The API answered with another non-success status.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Machine-readable code from the error payload, when present.
        code: Option<String>,
        /// Error message or a preview of the response body.
        message: String,
        /// Correlation id echoed by the API.
        trace_id: Option<String>,
    },
    /// The request did not complete within the configured timeout.
    #[error("request timed out: {message}")]
    Timeout {
        /// Transport message.
        message: String,
    },
    /// The connection failed before a response arrived.
    #[error("transport error: {message}")]
    Transport {
        /// Transport message.
        message: String,
    },
    /// The response body did not match the expected payload.
    #[error("invalid response payload: {message}")]
    Decode {
        /// Parser message.
        message: String,
    },
    /// The base URL cannot address API endpoints.
    #[error("invalid base url: {message}")]
    InvalidUrl {
        /// Parser message.
        message: String,
    },
}

impl ClientError {
    /// Transport failures and server errors are worth another attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            Self::NotFound { .. } | Self::Decode { .. } | Self::InvalidUrl { .. } => false,
        }
    }
}

/// Connection settings for [`CamplyClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    max_retries: u32,
    user_agent: String,
}

impl ClientConfig {
    /// Parse the API root, for example `http://localhost:8000/api`.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] when `base_url` is not an absolute
    /// URL with a path.
    ///
    /// # Examples
    /// ```
    /// use camply_client::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://localhost:8000/api/").expect("valid url");
    /// assert_eq!(config.base_url().as_str(), "http://localhost:8000/api");
    /// assert!(ClientConfig::new("not a url").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url.trim()).map_err(|err| ClientError::InvalidUrl {
            message: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                message: format!("{base_url} cannot be a base"),
            });
        }
        let trimmed = base_url.path().trim_end_matches('/').to_owned();
        base_url.set_path(&trimmed);
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: format!("camply-client/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Per-attempt timeout, covering connect and body read.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extra attempts after a retryable failure; `0` disables retries.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-attempt timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Retry budget per request.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_str()
    }
}

/// Typed access to the catalogue API.
#[derive(Debug, Clone)]
pub struct CamplyClient {
    client: Client,
    config: ClientConfig,
}

impl CamplyClient {
    /// Build a client with the configured timeout and user agent.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|err| ClientError::Transport {
                message: err.to_string(),
            })?;
        Ok(Self { client, config })
    }

    /// Settings the client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Type-ahead search. Blank queries return no rows without a request.
    ///
    /// # Errors
    /// Any [`ClientError`] raised by the request.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<SearchResult>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let mut params = vec![("query", query.to_owned())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get_json(&["search"], &params).await
    }

    /// All providers, including disabled ones.
    ///
    /// # Errors
    /// Any [`ClientError`] raised by the request.
    pub async fn providers(&self) -> Result<Vec<Provider>, ClientError> {
        self.get_json(&["provider"], &[]).await
    }

    /// One provider.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] for unknown ids, otherwise any request error.
    pub async fn provider(&self, provider_id: i32) -> Result<Provider, ClientError> {
        let id = provider_id.to_string();
        self.get_json(&["provider", &id], &[]).await
    }

    /// One recreation area.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] for unknown ids, otherwise any request error.
    pub async fn recreation_area(
        &self,
        provider_id: i32,
        id: &str,
    ) -> Result<RecreationArea, ClientError> {
        let provider = provider_id.to_string();
        self.get_json(&["rec-area", &provider, id], &[]).await
    }

    /// Campgrounds filed under a recreation area, ordered by name. Unknown
    /// areas yield an empty list.
    ///
    /// # Errors
    /// Any request error.
    pub async fn recreation_area_campgrounds(
        &self,
        provider_id: i32,
        id: &str,
    ) -> Result<Vec<Campground>, ClientError> {
        let provider = provider_id.to_string();
        self.get_json(&["rec-area", &provider, id, "campgrounds"], &[]).await
    }

    /// One campground.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] for unknown ids, otherwise any request error.
    pub async fn campground(&self, provider_id: i32, id: &str) -> Result<Campground, ClientError> {
        let provider = provider_id.to_string();
        self.get_json(&["campground", &provider, id], &[]).await
    }

    /// Backend status report.
    ///
    /// # Errors
    /// Any [`ClientError`] raised by the request.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json(&["health"], &[]).await
    }

    fn endpoint(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                message: format!("{} cannot be a base", self.config.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(segments, params)?;
        let mut attempt = 0;
        loop {
            match self.fetch(&url).await {
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(url = %url, attempt, error = %err, "retrying catalogue request");
                }
                result => return result,
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ClientError> {
        debug!(url = %url, "catalogue request");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, url.path(), body.as_ref()));
        }
        serde_json::from_slice(body.as_ref()).map_err(|err| ClientError::Decode {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl SearchSource for CamplyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        Self::search(self, query, None).await
    }
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout {
            message: error.to_string(),
        }
    } else {
        ClientError::Transport {
            message: error.to_string(),
        }
    }
}

fn map_status_error(status: StatusCode, path: &str, body: &[u8]) -> ClientError {
    if status == StatusCode::NOT_FOUND {
        return ClientError::NotFound {
            path: path.to_owned(),
        };
    }
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(payload) => ClientError::Status {
            status: status.as_u16(),
            code: Some(payload.code),
            message: payload.message,
            trace_id: payload.trace_id,
        },
        Err(_) => ClientError::Status {
            status: status.as_u16(),
            code: None,
            message: body_preview(body, status),
            trace_id: None,
        },
    }
}

fn body_preview(body: &[u8], status: StatusCode) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.is_empty() {
        return status
            .canonical_reason()
            .map_or_else(|| format!("status {}", status.as_u16()), str::to_owned);
    }
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
