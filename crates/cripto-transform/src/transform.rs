//! The cleaning pass from raw records to the asset table.

use chrono::{DateTime, Utc};
use cripto_types::{AssetRecord, AssetTable, DERIVED_COLUMN, RawRecord};
use tracing::{info, warn};

use crate::{TransformError, parse_timestamp, project};

/// Cleans raw market records into the eleven-column asset table.
///
/// Steps, in order: projection onto the allow-listed columns, blanket
/// zero-fill of null cells, `last_updated` parsing, header lower-casing and
/// computation of `faixa_preco_24h`. A null `last_updated` is filled with the
/// Unix epoch. The output keeps the input order and row count.
///
/// # Errors
///
/// Returns an error if any record misses an allow-listed key, holds a cell
/// of the wrong type, or carries an unparsable `last_updated`. No partial
/// table is produced.
pub fn transform(records: &[RawRecord]) -> Result<AssetTable, TransformError> {
    info!(records = records.len(), "Starting transformation");

    let projected = records
        .iter()
        .enumerate()
        .map(|(index, raw)| project(index, raw))
        .collect::<Result<Vec<_>, _>>()?;
    info!("Columns selected");

    let nulls: usize = projected.iter().map(AssetRecord::null_count).sum();
    if nulls > 0 {
        info!(nulls, "Filling null values with zero");
    } else {
        info!("No null values found");
    }

    let mut rows = Vec::with_capacity(projected.len());
    for (index, record) in projected.into_iter().enumerate() {
        let last_updated = match record.last_updated.as_deref() {
            Some(value) => {
                parse_timestamp(value).ok_or_else(|| TransformError::InvalidTimestamp {
                    index,
                    value: value.to_string(),
                })?
            }
            None => {
                warn!(index, "Null last_updated replaced with the Unix epoch");
                DateTime::<Utc>::UNIX_EPOCH
            }
        };
        rows.push(record.into_row(last_updated));
    }
    info!("Column last_updated converted to datetime");

    let mut table = AssetTable::new(rows);
    table.lowercase_columns();
    info!(column = DERIVED_COLUMN, "Derived column computed");

    info!(
        rows = table.len(),
        columns = table.column_count(),
        "Transformation complete"
    );
    Ok(table)
}

/// Cleans records when an upstream stage produced them.
///
/// `None` passes straight through without logging.
///
/// # Errors
///
/// Returns the same errors as [`transform`].
pub fn transform_opt(records: Option<&[RawRecord]>) -> Result<Option<AssetTable>, TransformError> {
    records.map(transform).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;
    use cripto_types::COLUMN_COUNT;
    use serde_json::{Value, json};
    use std::io;
    use std::sync::{Arc, Mutex};

    fn raw(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    fn asset(id: &str, high: f64, low: f64) -> RawRecord {
        raw(json!({
            "id": id,
            "symbol": id.chars().take(3).collect::<String>(),
            "name": id.to_uppercase(),
            "image": "https://example.invalid/logo.png",
            "current_price": (high + low) / 2.0,
            "market_cap": 1_000_000,
            "total_volume": 50_000.5,
            "high_24h": high,
            "low_24h": low,
            "price_change_percentage_24h": -2.5,
            "ath": 99.0,
            "last_updated": "2024-06-30T12:34:56.789Z"
        }))
    }

    fn listing(n: usize) -> Vec<RawRecord> {
        (0..n)
            .map(|i| asset(&format!("coin{i}"), 100.0 + i as f64, 90.0 - i as f64 * 0.5))
            .collect()
    }

    fn bitcoin() -> RawRecord {
        raw(json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 350000.0,
            "market_cap": 6.9e12,
            "total_volume": 1.2e11,
            "high_24h": 352000.0,
            "low_24h": 347000.0,
            "price_change_percentage_24h": 1.2,
            "last_updated": "2024-01-01T00:00:00.000Z"
        }))
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_at_info(records: &[RawRecord]) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || transform(records).unwrap());
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_stage_messages_visible_at_info() {
        let output = logged_at_info(&[bitcoin()]);
        for message in [
            "Starting transformation",
            "Columns selected",
            "No null values found",
            "Column last_updated converted to datetime",
            "Derived column computed",
            "Transformation complete",
        ] {
            assert!(output.contains(message), "missing {message:?} in {output}");
        }
    }

    #[test]
    fn test_null_fill_message_visible_at_info() {
        let mut record = bitcoin();
        record.insert("total_volume".to_string(), Value::Null);

        let output = logged_at_info(&[record]);
        assert!(output.contains("Filling null values with zero"));
        assert!(!output.contains("No null values found"));
    }

    #[test]
    fn test_shape_preserved() {
        for n in [0, 1, 37, 100] {
            let table = transform(&listing(n)).unwrap();
            assert_eq!(table.len(), n);
            assert_eq!(table.column_count(), COLUMN_COUNT);
            assert_eq!(table.column_count(), 11);
        }
    }

    #[test]
    fn test_order_preserved() {
        let table = transform(&listing(5)).unwrap();
        let ids: Vec<_> = table.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["coin0", "coin1", "coin2", "coin3", "coin4"]);
    }

    #[test]
    fn test_idempotent() {
        let records = listing(20);
        assert_eq!(transform(&records).unwrap(), transform(&records).unwrap());
    }

    #[test]
    fn test_price_range_is_absolute_difference() {
        let mut records = listing(10);
        // Inverted high/low still yields a non-negative range.
        records.push(asset("inverted", 10.0, 12.5));

        let table = transform(&records).unwrap();
        for row in table.rows() {
            assert!(row.faixa_preco_24h >= 0.0);
            assert_eq!(row.faixa_preco_24h, (row.high_24h - row.low_24h).abs());
        }
        assert_relative_eq!(table.rows()[10].faixa_preco_24h, 2.5);
    }

    #[test]
    fn test_bitcoin_example() {
        let table = transform(&[bitcoin()]).unwrap();
        assert_eq!(table.len(), 1);

        let row = &table.rows()[0];
        assert_eq!(row.id, "bitcoin");
        assert_eq!(row.symbol, "btc");
        assert_eq!(row.name, "Bitcoin");
        assert_relative_eq!(row.current_price, 350_000.0);
        assert_relative_eq!(row.market_cap, 6.9e12);
        assert_relative_eq!(row.faixa_preco_24h, 5000.0);
        assert_eq!(
            row.last_updated,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_null_volume_filled_with_zero() {
        let mut record = bitcoin();
        record.insert("total_volume".to_string(), Value::Null);

        let table = transform(&[record]).unwrap();
        assert_eq!(table.rows()[0].total_volume, 0.0);
    }

    #[test]
    fn test_null_text_filled_with_zero() {
        let mut record = bitcoin();
        record.insert("name".to_string(), Value::Null);

        let table = transform(&[record]).unwrap();
        assert_eq!(table.rows()[0].name, "0");
    }

    #[test]
    fn test_null_high_counts_as_zero_in_range() {
        let mut record = bitcoin();
        record.insert("high_24h".to_string(), Value::Null);

        let table = transform(&[record]).unwrap();
        assert_relative_eq!(table.rows()[0].faixa_preco_24h, 347_000.0);
    }

    #[test]
    fn test_null_last_updated_is_epoch() {
        let mut record = bitcoin();
        record.insert("last_updated".to_string(), Value::Null);

        let table = transform(&[record]).unwrap();
        assert_eq!(table.rows()[0].last_updated, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_missing_field_fails_whole_run() {
        let mut records = listing(3);
        records[2].remove("high_24h");

        let err = transform(&records).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingField {
                index: 2,
                field: "high_24h"
            }
        );
    }

    #[test]
    fn test_malformed_timestamp_fails() {
        let mut records = listing(2);
        records[1].insert("last_updated".to_string(), json!("not a date"));

        let err = transform(&records).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidTimestamp {
                index: 1,
                value: "not a date".to_string()
            }
        );
    }

    #[test]
    fn test_columns_lower_case_for_any_input_casing() {
        let mixed: RawRecord = bitcoin()
            .into_iter()
            .map(|(key, value)| (key.to_uppercase(), value))
            .collect();

        let table = transform(&[mixed]).unwrap();
        for column in table.columns() {
            assert_eq!(column, &column.to_lowercase());
        }
        assert_eq!(table.rows()[0].id, "bitcoin");
    }

    #[test]
    fn test_absent_input_propagates() {
        assert_eq!(transform_opt(None).unwrap(), None);

        let records = listing(2);
        let table = transform_opt(Some(records.as_slice())).unwrap().unwrap();
        assert_eq!(table.len(), 2);
    }
}
