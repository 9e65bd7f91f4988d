//! CSV output format.

use cripto_types::AssetTable;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes a header row followed by one comma-separated line per asset, with
/// no index column. Numbers are written in their shortest round-trip form
/// (`5000.0`) and timestamps as RFC 3339 UTC (`2024-01-01T00:00:00Z`). Text
/// cells are quoted only when they contain a comma, a quote or a line break.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn write_assets<W: Write + Send>(
        &self,
        table: &AssetTable,
        writer: W,
    ) -> Result<(), FormatError> {
        let mut csv = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv.write_record(table.columns())?;
        for row in table.rows() {
            csv.serialize(row)?;
        }

        csv.flush()?;
        Ok(())
    }
}
