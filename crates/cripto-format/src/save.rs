//! Persisting the asset table to disk.

use cripto_types::AssetTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "dados_cripto_tratados.csv";

/// Result of a [`save`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// No table was given; the filesystem was not touched.
    Skipped,
    /// The file was written.
    Written {
        /// Number of data rows written.
        rows: usize,
    },
}

/// Writes the table to `path` in the given format.
///
/// An existing file is truncated and replaced without backup. With `None`
/// nothing is created, truncated or removed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save(
    table: Option<&AssetTable>,
    path: &Path,
    format: OutputFormat,
) -> Result<SaveStatus, FormatError> {
    let Some(table) = table else {
        return Ok(SaveStatus::Skipped);
    };

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => CsvFormatter::new().write_assets(table, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new().write_assets(table, &mut writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_assets(table, &mut writer)?,
    }
    writer.flush()?;

    info!(path = %path.display(), rows = table.len(), "Data saved");
    Ok(SaveStatus::Written { rows: table.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cripto_types::{AssetRow, COLUMN_COUNT};
    use tempfile::TempDir;

    fn row(id: &str, high: f64, low: f64) -> AssetRow {
        AssetRow {
            id: id.to_string(),
            symbol: id[..3].to_string(),
            name: format!("{id} token"),
            current_price: 0.123_456_789,
            market_cap: 987_654_321_012.0,
            total_volume: 1.5e9,
            high_24h: high,
            low_24h: low,
            price_change_percentage_24h: -2.75,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 9, 17, 45, 12).unwrap(),
            faixa_preco_24h: AssetRow::price_range(high, low),
        }
    }

    fn table() -> AssetTable {
        AssetTable::new(vec![
            row("bitcoin", 352_000.0, 347_000.0),
            row("tether", 5.01, 4.99),
            row("solana", 0.000_012_5, 0.000_011),
        ])
    }

    #[test]
    fn test_absent_table_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "previous run\n").unwrap();

        let status = save(None, &path, OutputFormat::Csv).unwrap();
        assert_eq!(status, SaveStatus::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");

        let missing = temp_dir.path().join("never.csv");
        save(None, &missing, OutputFormat::Csv).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "stale content that is longer than nothing\n".repeat(50)).unwrap();

        let status = save(Some(&table()), &path, OutputFormat::Csv).unwrap();
        assert_eq!(status, SaveStatus::Written { rows: 3 });

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_csv_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        let original = table();
        save(Some(&original), &path, OutputFormat::Csv).unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let header = reader.headers().unwrap().clone();
        assert_eq!(header.len(), COLUMN_COUNT);
        assert_eq!(
            header.iter().collect::<Vec<_>>(),
            original.columns().iter().map(String::as_str).collect::<Vec<_>>()
        );

        let rows: Vec<AssetRow> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, original.rows());
    }

    #[test]
    fn test_ndjson_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dados.ndjson");

        save(Some(&table()), &path, OutputFormat::Ndjson).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join(DEFAULT_OUTPUT);

        let err = save(Some(&table()), &path, OutputFormat::Csv).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
