//! Markets endpoint URL and query construction.

/// Base URL of the CoinGecko public API.
pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Builds the markets listing URL for an API base.
///
/// A trailing slash on the base is ignored.
///
/// # Example
///
/// ```
/// use cripto_fetch::url::{BASE_URL, markets_url};
///
/// assert_eq!(markets_url(BASE_URL), "https://api.coingecko.com/api/v3/coins/markets");
/// ```
#[must_use]
pub fn markets_url(base_url: &str) -> String {
    format!("{}/coins/markets", base_url.trim_end_matches('/'))
}

/// Query parameters of the markets request.
///
/// Serializes to `vs_currency=brl&order=market_cap_desc&per_page=100&page=1&sparkline=false`
/// with the default values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketsQuery {
    /// Quote currency for prices, capitalization and volume.
    pub vs_currency: String,
    /// Ranking order.
    pub order: String,
    /// Number of assets per page.
    pub per_page: u32,
    /// Page number, starting at 1.
    pub page: u32,
    /// Whether to include 7-day sparkline data.
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            vs_currency: "brl".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            sparkline: false,
        }
    }
}

impl MarketsQuery {
    /// Returns the parameters as ordered key/value pairs.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("vs_currency", self.vs_currency.clone()),
            ("order", self.order.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", self.sparkline.to_string()),
        ]
    }
}
