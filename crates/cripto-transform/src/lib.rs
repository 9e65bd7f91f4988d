//! Cleaning and enrichment stage of the cripto-etl market data pipeline.
//!
//! This crate turns raw API objects into an [`AssetTable`](cripto_types::AssetTable):
//!
//! - [`project`] - Case-insensitive projection onto the allow-listed columns
//! - [`parse_timestamp`] - Lenient ISO-8601 timestamp parsing
//! - [`transform`] - The full cleaning pass
//! - [`transform_opt`] - Same, propagating an absent upstream result

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod project;
mod timestamp;
mod transform;

pub use error::TransformError;
pub use project::project;
pub use timestamp::parse_timestamp;
pub use transform::{transform, transform_opt};
