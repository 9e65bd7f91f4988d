//! Console output for the cripto-etl CLI.

use cripto_lib::{AssetRow, AssetTable};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the markets request is in flight.
pub(crate) fn spinner(base_url: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Fetching market data from {base_url}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn cells(row: &AssetRow) -> Vec<String> {
    vec![
        row.id.clone(),
        row.symbol.clone(),
        row.name.clone(),
        row.current_price.to_string(),
        row.market_cap.to_string(),
        row.total_volume.to_string(),
        row.high_24h.to_string(),
        row.low_24h.to_string(),
        row.price_change_percentage_24h.to_string(),
        row.last_updated.format("%Y-%m-%d %H:%M:%S%:z").to_string(),
        row.faixa_preco_24h.to_string(),
    ]
}

fn aligned<'a>(lead: String, cells: impl Iterator<Item = (&'a String, &'a usize)>) -> String {
    cells.fold(lead, |line, (cell, &width)| format!("{line}  {cell:>width$}"))
}

/// Renders the first `n` rows as an aligned text table.
pub(crate) fn preview(table: &AssetTable, n: usize) -> String {
    let rows: Vec<Vec<String>> = table.head(n).iter().map(cells).collect();
    let index_width = rows.len().saturating_sub(1).to_string().len();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|cells| cells[i].len())
                .chain(std::iter::once(column.len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header = aligned(
        format!("{:<index_width$}", ""),
        table.columns().iter().zip(&widths),
    );
    let body = rows
        .iter()
        .enumerate()
        .map(|(index, cells)| aligned(format!("{index:<index_width$}"), cells.iter().zip(&widths)));

    std::iter::once(format!("First {} rows:", rows.len()))
        .chain(std::iter::once(header))
        .chain(body)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the per-column summary: position, name, non-null count and type.
pub(crate) fn summary(table: &AssetTable) -> String {
    let schema = table.schema();
    let name_width = schema
        .iter()
        .map(|(name, _)| name.len())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or_default();
    let non_null = format!("{} non-null", table.len());

    let lines = schema.iter().enumerate().map(|(index, (name, kind))| {
        format!("{index:>3}  {name:<name_width$}  {non_null:>14}  {kind}")
    });

    [
        format!("{} entries, {} columns", table.len(), table.column_count()),
        format!("{:>3}  {:<name_width$}  {:>14}  Type", "#", "Column", "Non-Null Count"),
    ]
    .into_iter()
    .chain(lines)
    .collect::<Vec<_>>()
    .join("\n")
}
