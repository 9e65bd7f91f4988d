//! Projection of raw records onto the allow-listed columns.

use cripto_types::{AssetRecord, ColumnKind, RawRecord};
use serde_json::Value;

use crate::TransformError;

/// Projects a raw record onto the ten allow-listed columns.
///
/// Keys are matched case-insensitively, with an exact match taking
/// precedence. Every key outside the allow-list is dropped. `null` cells are
/// kept as `None`; numbers and booleans in text columns are rendered as text.
///
/// # Errors
///
/// Returns [`TransformError::MissingField`] if an allow-listed key is absent
/// and [`TransformError::InvalidField`] if a cell has the wrong JSON type.
pub fn project(index: usize, raw: &RawRecord) -> Result<AssetRecord, TransformError> {
    let cell = Cell { index, raw };

    Ok(AssetRecord {
        id: cell.text("id")?,
        symbol: cell.text("symbol")?,
        name: cell.text("name")?,
        current_price: cell.float("current_price")?,
        market_cap: cell.float("market_cap")?,
        total_volume: cell.float("total_volume")?,
        high_24h: cell.float("high_24h")?,
        low_24h: cell.float("low_24h")?,
        price_change_percentage_24h: cell.float("price_change_percentage_24h")?,
        last_updated: cell.timestamp("last_updated")?,
    })
}

/// Typed access to the cells of one raw record.
struct Cell<'a> {
    index: usize,
    raw: &'a RawRecord,
}

impl Cell<'_> {
    fn get(&self, field: &'static str) -> Result<&Value, TransformError> {
        self.raw
            .get(field)
            .or_else(|| {
                self.raw
                    .iter()
                    .find(|(key, _)| key.to_lowercase() == field)
                    .map(|(_, value)| value)
            })
            .ok_or(TransformError::MissingField {
                index: self.index,
                field,
            })
    }

    fn invalid(&self, field: &'static str, expected: ColumnKind, found: &Value) -> TransformError {
        TransformError::InvalidField {
            index: self.index,
            field,
            expected,
            found: found.to_string(),
        }
    }

    fn text(&self, field: &'static str) -> Result<Option<String>, TransformError> {
        match self.get(field)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            v @ (Value::Number(_) | Value::Bool(_)) => Ok(Some(v.to_string())),
            v => Err(self.invalid(field, ColumnKind::Text, v)),
        }
    }

    fn float(&self, field: &'static str) -> Result<Option<f64>, TransformError> {
        match self.get(field)? {
            Value::Null => Ok(None),
            v @ Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.invalid(field, ColumnKind::Float, v)),
            v => Err(self.invalid(field, ColumnKind::Float, v)),
        }
    }

    fn timestamp(&self, field: &'static str) -> Result<Option<String>, TransformError> {
        match self.get(field)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            v => Err(self.invalid(field, ColumnKind::Timestamp, v)),
        }
    }
}
