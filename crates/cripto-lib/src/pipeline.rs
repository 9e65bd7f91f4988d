//! The linear fetch, clean and save run.

use cripto_fetch::{FetchError, MarketClient};
use cripto_format::{DEFAULT_OUTPUT, OutputFormat, SaveStatus, save};
use cripto_transform::transform_opt;
use cripto_types::{AssetTable, RawRecord, Result};
use std::path::PathBuf;
use tracing::{error, info};

/// Where and how the cleaned table is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Output file, overwritten on every successful run.
    pub output: PathBuf,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Csv,
        }
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The table was written.
    Written {
        /// File that was written.
        path: PathBuf,
        /// Number of data rows.
        rows: usize,
    },
    /// The market data request failed; nothing was cleaned or written.
    FetchFailed,
    /// The table was cleaned but could not be written.
    WriteFailed,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: Outcome,
    /// The cleaned table, present whenever the fetch succeeded.
    pub table: Option<AssetTable>,
}

/// Fetch, clean and save, strictly in sequence.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: MarketClient,
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline from a market client and output settings.
    #[must_use]
    pub const fn new(client: MarketClient, config: PipelineConfig) -> Self {
        Self { client, config }
    }

    /// Runs the whole pipeline once.
    ///
    /// A failed fetch or write is logged and reported through
    /// [`RunReport::outcome`]; neither is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a fetched record cannot be cleaned.
    pub async fn run(&self) -> Result<RunReport> {
        let fetched = self.fetch().await;
        self.settle(fetched)
    }

    /// Requests the market data without logging the outcome.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged; hand it to [`Pipeline::settle`].
    pub async fn fetch(&self) -> std::result::Result<Vec<RawRecord>, FetchError> {
        self.client.fetch_assets().await
    }

    /// Finishes a run from the result of [`Pipeline::fetch`].
    ///
    /// # Errors
    ///
    /// Returns an error if a fetched record cannot be cleaned.
    pub fn settle(
        &self,
        fetched: std::result::Result<Vec<RawRecord>, FetchError>,
    ) -> Result<RunReport> {
        let records = match fetched {
            Ok(records) => {
                info!(count = records.len(), "Market data fetched");
                Some(records)
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch market data");
                None
            }
        };

        self.process(records.as_deref())
    }

    /// Cleans and saves already fetched records.
    ///
    /// `None` stands for a failed fetch: nothing is cleaned and the output
    /// file is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be cleaned.
    pub fn process(&self, records: Option<&[RawRecord]>) -> Result<RunReport> {
        let table = transform_opt(records)?;

        let outcome = match save(table.as_ref(), &self.config.output, self.config.format) {
            Ok(SaveStatus::Written { rows }) => Outcome::Written {
                path: self.config.output.clone(),
                rows,
            },
            Ok(SaveStatus::Skipped) => Outcome::FetchFailed,
            Err(e) => {
                error!(
                    path = %self.config.output.display(),
                    error = %e,
                    "Failed to save data"
                );
                Outcome::WriteFailed
            }
        };

        Ok(RunReport { outcome, table })
    }
}
