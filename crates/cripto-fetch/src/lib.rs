//! HTTP client for the cripto-etl market data pipeline.
//!
//! This crate provides the extraction stage:
//!
//! - [`url::markets_url`] - Constructs the markets endpoint URL
//! - [`url::MarketsQuery`] - Query parameters of the markets request
//! - [`MarketClient`] - HTTP client issuing the single markets request

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod url;

pub use client::{ClientConfig, FetchError, MarketClient};
