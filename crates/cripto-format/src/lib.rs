//! Output formatters for the cripto-etl market data pipeline.
//!
//! This crate provides writers for the cleaned asset table:
//!
//! - [`CsvFormatter`] - CSV format (default output)
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`save`] - Writes a table to a file, overwriting it

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod save;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use save::{DEFAULT_OUTPUT, SaveStatus, save};
