//! HTTP client for the markets listing.

use cripto_types::{CriptoError, RawRecord};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::url::{BASE_URL, MarketsQuery, markets_url};

/// Configuration for the market data client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (without the `/coins/markets` path).
    pub base_url: String,
    /// Query parameters sent with the request.
    pub query: MarketsQuery,
    /// Request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
    /// Whether to honor proxy settings from the environment.
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            query: MarketsQuery::default(),
            timeout: None,
            user_agent: format!("cripto-etl/{}", env!("CARGO_PKG_VERSION")),
            system_proxy: true,
        }
    }
}

/// Errors that can occur while fetching market data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Response body is not a JSON array of objects.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for CriptoError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// HTTP client issuing the markets listing request.
#[derive(Debug, Clone)]
pub struct MarketClient {
    client: Client,
    config: ClientConfig,
}

impl MarketClient {
    /// Creates a new market client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Fetches the first page of assets ranked by market capitalization.
    ///
    /// Makes exactly one request. The returned objects are not validated.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on a non-2xx status, or when
    /// the body is not a JSON array of objects.
    pub async fn fetch_assets(&self) -> Result<Vec<RawRecord>, FetchError> {
        let url = markets_url(&self.config.base_url);
        debug!(%url, query = ?self.config.query, "Requesting markets listing");

        let response = self
            .client
            .get(&url)
            .query(&self.config.query.pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<RawRecord> = serde_json::from_slice(&body)?;
        debug!(count = records.len(), "Markets listing decoded");
        Ok(records)
    }
}
