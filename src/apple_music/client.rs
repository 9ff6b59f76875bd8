use std::time::Duration;

use reqwest::blocking;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use crate::apple_music::types::{AppleMusicError, ResourceKind};

/// Production Apple Music API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.music.apple.com/v1";

/// Default storefront region code
pub const DEFAULT_STOREFRONT: &str = "us";

/// Default timeout applied to the full request/response cycle
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default resource types requested by catalog search
pub const DEFAULT_SEARCH_TYPES: &str = "songs,albums,artists,playlists";

/// Default maximum number of search results per type
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Catalog client configuration
///
/// One configuration is scoped to one storefront and one developer token.
/// Setters follow the builder pattern; anything not set keeps its default.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Developer token presented as the Bearer credential
    pub developer_token: String,
    /// Storefront region code (e.g. "us", "gb", "jp")
    pub storefront: String,
    /// API base URL
    pub base_url: String,
    /// Timeout for each request/response exchange
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the production endpoint with the default
    /// storefront and timeout
    pub fn new(developer_token: impl Into<String>) -> Self {
        Self {
            developer_token: developer_token.into(),
            storefront: DEFAULT_STOREFRONT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the storefront region code (builder pattern)
    pub fn with_storefront(mut self, storefront: impl Into<String>) -> Self {
        self.storefront = storefront.into();
        self
    }

    /// Set the API base URL (builder pattern)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the Apple Music catalog API
///
/// Issues storefront-scoped GET requests authenticated with a developer
/// token. The token is attached as a default `Authorization: Bearer` header
/// at construction and reused across calls; the underlying connection pool
/// is likewise created once and shared. All methods take `&self` and hold
/// no per-call state, so one instance can be shared across threads.
///
/// # Example
///
/// ```no_run
/// use applemusic_sdk::{AppleMusicClient, ClientConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AppleMusicClient::new(ClientConfig::new("eyJhbGci..."))?;
/// let results = client.search_catalog("Thriller", "albums", 1, 0)?;
/// println!("{}", results);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AppleMusicClient {
    /// Base URL with any trailing slash removed
    base_url: String,
    /// Storefront region code
    storefront: String,
    /// HTTP client carrying the Authorization header and timeout
    client: blocking::Client,
}

impl AppleMusicClient {
    /// Create a new catalog client
    ///
    /// Fails with an invalid-argument error when the developer token is
    /// empty. No network I/O happens here and the token is not validated
    /// locally; an expired or garbage token only surfaces as an HTTP 401
    /// on the first request.
    pub fn new(config: ClientConfig) -> Result<Self, AppleMusicError> {
        if config.developer_token.is_empty() {
            return Err(AppleMusicError::InvalidArgument(
                "developer token must not be empty".to_string(),
            ));
        }

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", config.developer_token))
            .map_err(|e| {
                AppleMusicError::InvalidArgument(format!("developer token is not a valid header value: {}", e))
            })?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = blocking::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppleMusicError::Transport(format!("failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!(
            "Creating AppleMusicClient: base_url={}, storefront={}",
            base_url,
            config.storefront
        );

        Ok(Self {
            base_url,
            storefront: config.storefront,
            client,
        })
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the storefront code for this client
    pub fn storefront(&self) -> &str {
        &self.storefront
    }

    /// Search the catalog by term
    ///
    /// Issues `GET {base}/catalog/{storefront}/search` with `term`,
    /// `types`, `limit` and `offset` query parameters. `limit` and
    /// `offset` are passed through verbatim; out-of-range values are
    /// rejected by the service, not clamped here.
    ///
    /// # Arguments
    ///
    /// * `term` - Search keywords, must be non-empty
    /// * `types` - Comma-separated resource types to include
    /// * `limit` - Maximum number of results per type
    /// * `offset` - Pagination offset
    ///
    /// # Returns
    ///
    /// The decoded JSON response body, unmodified.
    pub fn search_catalog(
        &self,
        term: &str,
        types: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Value, AppleMusicError> {
        if term.is_empty() {
            return Err(AppleMusicError::InvalidArgument(
                "search term must not be empty".to_string(),
            ));
        }

        let url = format!("{}/catalog/{}/search", self.base_url, self.storefront);
        tracing::debug!("Searching catalog: url={}, term={}", url, term);

        let limit = limit.to_string();
        let offset = offset.to_string();
        let request = self.client.get(&url).query(&[
            ("term", term),
            ("types", types),
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
        ]);

        self.execute(request)
    }

    /// Get a catalog song by id
    pub fn get_song(&self, id: &str) -> Result<Value, AppleMusicError> {
        self.get_resource(ResourceKind::Songs, id)
    }

    /// Get a catalog album by id
    pub fn get_album(&self, id: &str) -> Result<Value, AppleMusicError> {
        self.get_resource(ResourceKind::Albums, id)
    }

    /// Get a catalog artist by id
    pub fn get_artist(&self, id: &str) -> Result<Value, AppleMusicError> {
        self.get_resource(ResourceKind::Artists, id)
    }

    /// Get a catalog playlist by id
    pub fn get_playlist(&self, id: &str) -> Result<Value, AppleMusicError> {
        self.get_resource(ResourceKind::Playlists, id)
    }

    /// Fetch a single catalog resource by kind and id
    fn get_resource(&self, kind: ResourceKind, id: &str) -> Result<Value, AppleMusicError> {
        if id.is_empty() {
            return Err(AppleMusicError::InvalidArgument(format!(
                "{} id must not be empty",
                kind
            )));
        }

        let url = format!(
            "{}/catalog/{}/{}/{}",
            self.base_url,
            self.storefront,
            kind.path_segment(),
            id
        );
        tracing::debug!("Fetching catalog resource: {}", url);

        self.execute(self.client.get(&url))
    }

    /// Send a request and normalize the outcome
    ///
    /// Exactly one request goes out per call. A non-2xx status becomes an
    /// upstream error carrying the original status and body; the body is
    /// captured as text so a non-JSON error page never turns into a decode
    /// error.
    fn execute(&self, request: blocking::RequestBuilder) -> Result<Value, AppleMusicError> {
        let response = request.send().map_err(|e| {
            tracing::error!("Request failed: {}", e);
            AppleMusicError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!(
                "Apple Music API returned HTTP {}: {}",
                status.as_u16(),
                body
            );
            return Err(AppleMusicError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(AppleMusicError::from)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse catalog response: {}", e);
            AppleMusicError::Decode(format!("invalid JSON in response body: {}", e))
        })
    }
}
