//! Symbol universe loading.
//!
//! The universe is a CSV file with a `Symbol` or `Ticker` column. Loading is
//! soft-fail by contract: this module returns typed errors and the caller
//! substitutes [`fallback_universe`], so a broken file never stops a run.

use crate::domain::errors::UniverseError;
use std::collections::HashSet;
use std::path::Path;

/// Large-cap standbys used whenever the universe file cannot be read.
pub const FALLBACK_SYMBOLS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"];

pub fn fallback_universe() -> Vec<String> {
    FALLBACK_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Read tickers from `path`, preferring a `Symbol` column over `Ticker`
/// (case-sensitive, in that order). Keeps source order, drops duplicates,
/// and filters out anything that does not look like a plain ticker.
pub fn load_symbols(path: &Path) -> Result<Vec<String>, UniverseError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = headers
        .iter()
        .position(|h| h == "Symbol")
        .or_else(|| headers.iter().position(|h| h == "Ticker"))
        .ok_or_else(|| UniverseError::MissingColumn {
            columns: headers.iter().map(String::from).collect(),
        })?;

    let mut seen = HashSet::new();
    let mut symbols = Vec::new();
    for record in reader.records() {
        let record = record?;
        let value = match record.get(column) {
            Some(v) => v.trim(),
            None => continue,
        };
        if !is_plain_ticker(value) {
            continue;
        }
        if seen.insert(value.to_string()) {
            symbols.push(value.to_string());
        }
    }

    Ok(symbols)
}

/// Share-class and when-issued tickers (`BRK.B`, `BF-B`) are not tradable
/// under their index spelling, and bare numbers are spreadsheet noise.
/// The digit test is deliberate: a float parse would also swallow real
/// tickers like `NAN` and `INF`.
fn is_plain_ticker(value: &str) -> bool {
    !value.is_empty()
        && !value.contains('.')
        && !value.contains('-')
        && !value.chars().all(|c| c.is_ascii_digit())
}
