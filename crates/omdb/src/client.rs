use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reelbase_core::metadata::{MetadataProvider, MovieMetadata, ProviderError};

use crate::error::OmdbError;
use crate::models::{SearchResponse, TitleResponse};

/// Public OMDb endpoint. Both lookups are query strings on the root path.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Per-call timeout applied to every OMDb request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search results are restricted to feature films.
const SEARCH_TYPE: &str = "movie";

/// Connection settings for [`OmdbClient`].
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// API key. `None` disables the client: every call returns an empty
    /// result without touching the network.
    pub api_key: Option<String>,
    /// Base URL, e.g. `http://www.omdbapi.com/`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl OmdbConfig {
    /// Settings for the public endpoint with the default timeout.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the OMDb API.
pub struct OmdbClient {
    client: Client,
    config: OmdbConfig,
}

impl OmdbClient {
    /// Build a client with the configured timeout.
    pub fn new(config: OmdbConfig) -> Result<Self, OmdbError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// The caller is responsible for the client's timeout.
    pub fn with_client(client: Client, config: OmdbConfig) -> Self {
        Self { client, config }
    }

    /// Whether an API key is set.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Look up a single movie by exact title (`?t=`).
    ///
    /// `Ok(None)` when unconfigured or when OMDb reports the title unknown.
    pub async fn lookup_by_title(&self, title: &str) -> Result<Option<MovieMetadata>, OmdbError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Ok(None);
        };

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("t", title), ("apikey", api_key)])
            .send()
            .await?;

        let body: TitleResponse = Self::parse_response(response).await?;
        if let Some(error) = body.error.as_deref() {
            tracing::debug!(title, error, "OMDb lookup returned no match");
        }
        Ok(body.into_metadata())
    }

    /// Search movies by keyword (`?s=&type=movie`) and return up to `limit`
    /// titles.
    ///
    /// Empty when unconfigured or when OMDb reports no results.
    pub async fn search_titles(&self, keyword: &str, limit: usize) -> Result<Vec<String>, OmdbError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Ok(Vec::new());
        };

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("s", keyword), ("type", SEARCH_TYPE), ("apikey", api_key)])
            .send()
            .await?;

        let body: SearchResponse = Self::parse_response(response).await?;
        if let Some(error) = body.error.as_deref() {
            tracing::debug!(keyword, error, "OMDb search returned no results");
        }
        Ok(body.into_titles(limit))
    }

    // ---- private helpers ----

    /// Parse a JSON response body.
    ///
    /// OMDb answers an invalid key or an exhausted quota with a non-2xx
    /// status and a regular `"Response": "False"` body, which is returned
    /// as-is. Non-2xx replies whose body is not an OMDb payload fail with
    /// the status and body text.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OmdbError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await?;
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => {
                tracing::warn!(status = status.as_u16(), body = %body, "OMDb rejected request");
                Ok(parsed)
            }
            Err(_) => Err(OmdbError::Api {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    async fn lookup_by_title(&self, title: &str) -> Result<Option<MovieMetadata>, ProviderError> {
        Ok(OmdbClient::lookup_by_title(self, title).await?)
    }

    async fn search_titles(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        Ok(OmdbClient::search_titles(self, keyword, limit).await?)
    }
}
