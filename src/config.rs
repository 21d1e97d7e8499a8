use std::path::PathBuf;
use tracing::warn;

/// Runtime configuration for one sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub universe_file: PathBuf,
    pub lookback_days: i64,
    pub symbol_delay_ms: u64,
    pub order_qty: u32,
    pub paper: bool,
    pub request_timeout_secs: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            universe_file: PathBuf::from("sp500_companies.csv"),
            lookback_days: 120,
            symbol_delay_ms: 500,
            order_qty: 1,
            paper: true,
            request_timeout_secs: 30,
        }
    }
}

impl SweepConfig {
    /// Load configuration from environment variables, keeping defaults for
    /// anything unset or out of range.
    pub fn from_env() -> SweepConfig {
        let mut config = SweepConfig::default();

        if let Ok(path) = std::env::var("UNIVERSE_FILE") {
            if !path.trim().is_empty() {
                config.universe_file = PathBuf::from(path);
            }
        }

        if let Ok(days) = std::env::var("LOOKBACK_DAYS") {
            match days.parse::<i64>() {
                Ok(value) if (2..=1000).contains(&value) => {
                    config.lookback_days = value;
                }
                Ok(value) => {
                    warn!(
                        "LOOKBACK_DAYS {} out of range (2..=1000), using default: {}",
                        value, config.lookback_days
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to parse LOOKBACK_DAYS '{}': {}, using default: {}",
                        days, e, config.lookback_days
                    );
                }
            }
        }

        if let Ok(delay) = std::env::var("SYMBOL_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(value) if value <= 60_000 => {
                    config.symbol_delay_ms = value;
                }
                Ok(value) => {
                    warn!(
                        "SYMBOL_DELAY_MS {} out of range (0..=60000), using default: {}",
                        value, config.symbol_delay_ms
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to parse SYMBOL_DELAY_MS '{}': {}, using default: {}",
                        delay, e, config.symbol_delay_ms
                    );
                }
            }
        }

        if let Ok(qty) = std::env::var("ORDER_QTY") {
            match qty.parse::<u32>() {
                Ok(value) if (1..=1000).contains(&value) => {
                    config.order_qty = value;
                }
                Ok(value) => {
                    warn!(
                        "ORDER_QTY {} out of range (1..=1000), using default: {}",
                        value, config.order_qty
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to parse ORDER_QTY '{}': {}, using default: {}",
                        qty, e, config.order_qty
                    );
                }
            }
        }

        if let Ok(paper) = std::env::var("ALPACA_PAPER") {
            config.paper = paper.to_lowercase() == "true" || paper == "1";
        }

        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(value) if (1..=300).contains(&value) => {
                    config.request_timeout_secs = value;
                }
                Ok(value) => {
                    warn!(
                        "REQUEST_TIMEOUT_SECS {} out of range (1..=300), using default: {}",
                        value, config.request_timeout_secs
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to parse REQUEST_TIMEOUT_SECS '{}': {}, using default: {}",
                        timeout, e, config.request_timeout_secs
                    );
                }
            }
        }

        config
    }
}
