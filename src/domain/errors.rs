use thiserror::Error;

/// Errors from the brokerage REST APIs. Within a sweep these are contained
/// per symbol; at startup (credentials, account check) they are fatal.
#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("broker rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse broker response: {0}")]
    Parse(String),
}

/// Errors loading the symbol universe file. The caller treats every variant
/// as soft: log it and fall back to the fixed universe.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("failed to read universe file: {0}")]
    Csv(#[from] csv::Error),

    #[error("universe file has no 'Symbol' or 'Ticker' column (found: {columns:?})")]
    MissingColumn { columns: Vec<String> },
}
