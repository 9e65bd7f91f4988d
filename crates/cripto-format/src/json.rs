//! JSON output format.

use cripto_types::AssetTable;
use std::io::Write;

use crate::{FormatError, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum JsonStyle {
    #[default]
    Array,
    Ndjson,
}

/// JSON formatter.
///
/// Each row becomes an object keyed by column name.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
        }
    }
}

impl Formatter for JsonFormatter {
    fn write_assets<W: Write + Send>(
        &self,
        table: &AssetTable,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                serde_json::to_writer(&mut writer, table.rows())?;
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for row in table.rows() {
                    serde_json::to_writer(&mut writer, row)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}
