//! cripto-etl CLI - fetch, clean and save the top 100 cryptocurrencies by market cap.

use anyhow::Result;
use clap::Parser;
use cripto_lib::prelude::*;
use cripto_lib::{DEFAULT_OUTPUT, OutputFormat, url};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

mod display;

#[derive(Parser)]
#[command(name = "cripto-etl")]
#[command(
    about = "Fetch, clean and save CoinGecko market data for the top 100 cryptocurrencies",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output format (csv, json, ndjson)
    #[arg(short, long, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// API base URL
    #[arg(long, default_value = url::BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    /// Number of rows shown in the console preview
    #[arg(long, default_value = "5")]
    preview_rows: usize,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (warnings and errors only, no preview)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let client = MarketClient::new(ClientConfig {
        base_url: cli.base_url.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
        ..Default::default()
    })?;
    let pipeline = Pipeline::new(
        client,
        PipelineConfig {
            output: cli.output,
            format: cli.format,
        },
    );

    let spinner = display::spinner(&cli.base_url, cli.quiet);
    let fetched = pipeline.fetch().await;
    spinner.finish_and_clear();

    let report = pipeline.settle(fetched)?;

    if cli.quiet {
        return Ok(());
    }

    if let Some(table) = &report.table {
        println!("{}", display::preview(table, cli.preview_rows));
        println!("{}", display::summary(table));
    }

    if let Outcome::Written { path, rows } = &report.outcome {
        println!("Output written to: {} ({rows} rows)", path.display());
    }

    Ok(())
}
