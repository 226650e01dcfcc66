//! HTTP client for the Fingrid Open Data API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use verkko_types::{Result, TimeWindow, VerkkoError};

use crate::RateLimiter;
use crate::url::{DEFAULT_BASE_URL, events_url, latest_url};

/// Default call quota: 10 000 calls per rolling 24 hours, per the
/// platform's API restrictions.
pub const DEFAULT_MAX_CALLS: usize = 10_000;

/// Default quota window.
pub const DEFAULT_QUOTA_WINDOW: Duration = Duration::from_secs(60 * 60 * 24);

/// Where the api key is carried on each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyPlacement {
    /// Sent as a request header with the given name.
    Header(String),
    /// Appended as a query parameter with the given name.
    QueryParam(String),
}

impl Default for ApiKeyPlacement {
    fn default() -> Self {
        Self::Header("x-api-key".to_string())
    }
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub base_url: String,
    /// Caller's api key.
    pub api_key: String,
    /// How the api key is attached to requests.
    pub api_key_placement: ApiKeyPlacement,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Maximum calls per quota window.
    pub max_calls: usize,
    /// Rolling quota window duration.
    pub quota_window: Duration,
}

impl ClientConfig {
    /// Creates a configuration with platform defaults and the given api key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            api_key_placement: ApiKeyPlacement::default(),
            timeout: Duration::from_secs(60),
            user_agent: format!("verkko/{}", env!("CARGO_PKG_VERSION")),
            max_calls: DEFAULT_MAX_CALLS,
            quota_window: DEFAULT_QUOTA_WINDOW,
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides how the api key is attached to requests.
    #[must_use]
    pub fn with_api_key_placement(mut self, placement: ApiKeyPlacement) -> Self {
        self.api_key_placement = placement;
        self
    }

    /// Overrides the call quota policy.
    #[must_use]
    pub const fn with_quota(mut self, max_calls: usize, window: Duration) -> Self {
        self.max_calls = max_calls;
        self.quota_window = window;
        self
    }
}

/// A raw API response: status and body, unparsed.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Seam between retrieval logic and the network.
///
/// [`ApiClient`] is the production implementation; tests substitute scripted
/// fetchers to exercise splitting and orchestration without a network.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches one dataset's events over a time window.
    async fn events(&self, variable_id: u32, window: TimeWindow) -> Result<RawResponse>;

    /// Fetches the latest event of each listed dataset in one batched call.
    async fn latest(&self, variable_ids: &[u32]) -> Result<RawResponse>;
}

/// HTTP client enforcing the platform's rolling call quota.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    limiter: RateLimiter,
}

impl ApiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| VerkkoError::Http(e.to_string()))?;
        let limiter = RateLimiter::new(config.max_calls, config.quota_window);
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    /// Creates a client with platform defaults and the given api key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a rate-limited GET against the given URL.
    ///
    /// Waits for a quota slot before sending; the request is never dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails. Non-success statuses are
    /// returned in the [`RawResponse`], not as errors.
    pub async fn fetch(&self, url: &str) -> Result<RawResponse> {
        self.limiter.acquire().await;
        debug!(url, "GET");

        let mut request = self.http.get(url);
        match &self.config.api_key_placement {
            ApiKeyPlacement::Header(name) => {
                request = request.header(name, &self.config.api_key);
            }
            ApiKeyPlacement::QueryParam(name) => {
                request = request.query(&[(name.as_str(), self.config.api_key.as_str())]);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| VerkkoError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| VerkkoError::Http(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Fetch for ApiClient {
    async fn events(&self, variable_id: u32, window: TimeWindow) -> Result<RawResponse> {
        let url = events_url(&self.config.base_url, variable_id, window);
        self.fetch(&url).await
    }

    async fn latest(&self, variable_ids: &[u32]) -> Result<RawResponse> {
        let url = latest_url(&self.config.base_url, variable_ids);
        self.fetch(&url).await
    }
}
