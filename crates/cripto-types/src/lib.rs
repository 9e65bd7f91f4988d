//! Core types for the cripto-etl market data pipeline.
//!
//! This crate provides the data structures shared by every pipeline stage:
//!
//! - [`RawRecord`] - An untyped asset object as returned by the markets API
//! - [`AssetRecord`] - The ten allow-listed fields of a raw record, nullable
//! - [`AssetRow`] - A cleaned row with parsed timestamp and derived price range
//! - [`AssetTable`] - The eleven-column output table
//! - [`ColumnKind`] - Value kind of each output column

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod asset;
mod error;
mod table;

pub use asset::{AssetRecord, AssetRow, RawRecord};
pub use error::{CriptoError, Result};
pub use table::{AssetTable, COLUMN_COUNT, ColumnKind, DERIVED_COLUMN, SOURCE_COLUMNS};
