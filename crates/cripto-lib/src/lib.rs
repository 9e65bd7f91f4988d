//! Fetch, clean and save CoinGecko market data for the top 100 cryptocurrencies.
//!
//! This is a facade crate that re-exports functionality from the cripto-etl
//! workspace crates and wires them into a [`Pipeline`].
//!
//! # Quick Start
//!
//! ```ignore
//! use cripto_lib::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketClient::new(ClientConfig::default())?;
//!     let pipeline = Pipeline::new(client, PipelineConfig::default());
//!
//!     let report = pipeline.run().await?;
//!     if let Some(table) = &report.table {
//!         println!("Cleaned {} assets", table.len());
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "full")]
mod pipeline;

// Re-export core types
pub use cripto_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use cripto_fetch::{ClientConfig, FetchError, MarketClient, url};

// Re-export the cleaning pass
#[cfg(feature = "transform")]
pub use cripto_transform::{TransformError, parse_timestamp, transform, transform_opt};

// Re-export formatters
#[cfg(feature = "format")]
pub use cripto_format::{
    CsvFormatter, DEFAULT_OUTPUT, FormatError, Formatter, JsonFormatter, OutputFormat, SaveStatus,
    save,
};

#[cfg(feature = "full")]
pub use pipeline::{Outcome, Pipeline, PipelineConfig, RunReport};

/// Prelude module for convenient imports.
///
/// ```
/// use cripto_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cripto_types::{
        AssetRecord, AssetRow, AssetTable, ColumnKind, CriptoError, RawRecord, Result,
    };

    #[cfg(feature = "fetch")]
    pub use cripto_fetch::{ClientConfig, MarketClient};

    #[cfg(feature = "transform")]
    pub use cripto_transform::{transform, transform_opt};

    #[cfg(feature = "format")]
    pub use cripto_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, save};

    #[cfg(feature = "full")]
    pub use crate::pipeline::{Outcome, Pipeline, PipelineConfig, RunReport};
}
