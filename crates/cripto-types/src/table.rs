//! The output table and its column schema.

use serde::{Deserialize, Serialize};

use crate::AssetRow;

/// Columns projected from each raw record, in output order.
pub const SOURCE_COLUMNS: [&str; 10] = [
    "id",
    "symbol",
    "name",
    "current_price",
    "market_cap",
    "total_volume",
    "high_24h",
    "low_24h",
    "price_change_percentage_24h",
    "last_updated",
];

/// Name of the computed 24-hour price range column.
pub const DERIVED_COLUMN: &str = "faixa_preco_24h";

/// Number of columns in a transformed table.
pub const COLUMN_COUNT: usize = SOURCE_COLUMNS.len() + 1;

/// Value kind stored in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// UTF-8 text.
    Text,
    /// 64-bit floating point number.
    Float,
    /// UTC date-time.
    Timestamp,
}

impl ColumnKind {
    /// Returns the kind of a known column, or `None` for unknown names.
    ///
    /// Lookup is case-insensitive.
    #[must_use]
    pub fn of(column: &str) -> Option<Self> {
        match column.to_lowercase().as_str() {
            "id" | "symbol" | "name" => Some(Self::Text),
            "current_price"
            | "market_cap"
            | "total_volume"
            | "high_24h"
            | "low_24h"
            | "price_change_percentage_24h"
            | DERIVED_COLUMN => Some(Self::Float),
            "last_updated" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Float => "float64",
            Self::Timestamp => "datetime[utc]",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cleaned asset rows with their column header.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetTable {
    columns: Vec<String>,
    rows: Vec<AssetRow>,
}

impl AssetTable {
    /// Creates a table with the standard eleven-column header.
    #[must_use]
    pub fn new(rows: Vec<AssetRow>) -> Self {
        let columns = SOURCE_COLUMNS
            .iter()
            .chain(std::iter::once(&DERIVED_COLUMN))
            .map(|c| (*c).to_string())
            .collect();
        Self { columns, rows }
    }

    /// Lower-cases every column name in place.
    pub fn lowercase_columns(&mut self) {
        for column in &mut self.columns {
            *column = column.to_lowercase();
        }
    }

    /// Returns the column names in output order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns all rows.
    #[must_use]
    pub fn rows(&self) -> &[AssetRow] {
        &self.rows
    }

    /// Returns the first `n` rows (or fewer if the table is shorter).
    #[must_use]
    pub fn head(&self, n: usize) -> &[AssetRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns each column name paired with its value kind.
    ///
    /// Columns with an unrecognized name are reported as text.
    #[must_use]
    pub fn schema(&self) -> Vec<(&str, ColumnKind)> {
        self.columns
            .iter()
            .map(|c| (c.as_str(), ColumnKind::of(c).unwrap_or(ColumnKind::Text)))
            .collect()
    }
}
