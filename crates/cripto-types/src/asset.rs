//! Asset data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An asset object exactly as returned by the markets endpoint.
///
/// No schema is enforced at this stage; the transformer decides which keys
/// are required.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Zero value written into null text cells.
const TEXT_ZERO: &str = "0";

/// The ten allow-listed fields of a raw record.
///
/// Every cell is optional because the API reports unknown values as `null`.
/// A missing key is not representable here: projection rejects it before
/// a record is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetRecord {
    /// API identifier (e.g., "bitcoin").
    pub id: Option<String>,
    /// Ticker symbol (e.g., "btc").
    pub symbol: Option<String>,
    /// Display name (e.g., "Bitcoin").
    pub name: Option<String>,
    /// Current price in the quote currency.
    pub current_price: Option<f64>,
    /// Market capitalization in the quote currency.
    pub market_cap: Option<f64>,
    /// Trading volume over the last 24 hours.
    pub total_volume: Option<f64>,
    /// Highest price over the last 24 hours.
    pub high_24h: Option<f64>,
    /// Lowest price over the last 24 hours.
    pub low_24h: Option<f64>,
    /// Price change over the last 24 hours, in percent.
    pub price_change_percentage_24h: Option<f64>,
    /// Last update timestamp as sent by the API.
    pub last_updated: Option<String>,
}

impl AssetRecord {
    /// Returns the names of the columns holding a null cell.
    #[must_use]
    pub fn null_columns(&self) -> Vec<&'static str> {
        let cells = [
            ("id", self.id.is_none()),
            ("symbol", self.symbol.is_none()),
            ("name", self.name.is_none()),
            ("current_price", self.current_price.is_none()),
            ("market_cap", self.market_cap.is_none()),
            ("total_volume", self.total_volume.is_none()),
            ("high_24h", self.high_24h.is_none()),
            ("low_24h", self.low_24h.is_none()),
            (
                "price_change_percentage_24h",
                self.price_change_percentage_24h.is_none(),
            ),
            ("last_updated", self.last_updated.is_none()),
        ];
        cells
            .into_iter()
            .filter_map(|(column, is_null)| is_null.then_some(column))
            .collect()
    }

    /// Returns the number of null cells in this record.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.null_columns().len()
    }

    /// Converts the record into an output row.
    ///
    /// Null text cells become `"0"` and null numeric cells become `0.0`.
    /// The timestamp is supplied already parsed since its null policy
    /// belongs to the caller.
    #[must_use]
    pub fn into_row(self, last_updated: DateTime<Utc>) -> AssetRow {
        let text = |cell: Option<String>| cell.unwrap_or_else(|| TEXT_ZERO.to_string());
        let high_24h = self.high_24h.unwrap_or(0.0);
        let low_24h = self.low_24h.unwrap_or(0.0);

        AssetRow {
            id: text(self.id),
            symbol: text(self.symbol),
            name: text(self.name),
            current_price: self.current_price.unwrap_or(0.0),
            market_cap: self.market_cap.unwrap_or(0.0),
            total_volume: self.total_volume.unwrap_or(0.0),
            high_24h,
            low_24h,
            price_change_percentage_24h: self.price_change_percentage_24h.unwrap_or(0.0),
            last_updated,
            faixa_preco_24h: AssetRow::price_range(high_24h, low_24h),
        }
    }
}

/// A cleaned asset row, one per fetched asset.
///
/// Field order matches the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRow {
    /// API identifier.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Current price in the quote currency.
    pub current_price: f64,
    /// Market capitalization in the quote currency.
    pub market_cap: f64,
    /// Trading volume over the last 24 hours.
    pub total_volume: f64,
    /// Highest price over the last 24 hours.
    pub high_24h: f64,
    /// Lowest price over the last 24 hours.
    pub low_24h: f64,
    /// Price change over the last 24 hours, in percent.
    pub price_change_percentage_24h: f64,
    /// Last update time (UTC).
    pub last_updated: DateTime<Utc>,
    /// Absolute 24-hour price range, `|high_24h - low_24h|`.
    pub faixa_preco_24h: f64,
}

impl AssetRow {
    /// Returns the absolute difference between a high and a low price.
    #[must_use]
    pub fn price_range(high: f64, low: f64) -> f64 {
        (high - low).abs()
    }
}
