//! The sweep: one sequential pass over the universe.
//!
//! Each symbol is fetched, augmented, evaluated, and possibly ordered,
//! entirely independently of every other symbol. A failure anywhere in one
//! symbol's pipeline is recorded and the sweep moves on; there is no retry
//! or backoff. A fixed delay follows every symbol as crude rate limiting.

use crate::config::SweepConfig;
use crate::domain::entities::order::{Order, OrderSide, TimeInForce};
use crate::domain::repositories::broker::{MarketData, TradingApi};
use crate::domain::services::indicators::{augment, Indicator};
use crate::domain::services::signal::should_buy;
use chrono::{Duration, NaiveDate, Utc};
use tracing::{info, warn};

/// How one symbol's pass ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    /// Buy rule fired and the broker accepted the order.
    Ordered { order_id: String, status: String },
    /// Bars were evaluated, rule said no.
    NoSignal,
    /// The data API had no bars for the window; not counted as an error.
    NoData,
    /// Something in fetch/evaluate/submit failed; sweep continued.
    Failed(String),
}

/// Per-symbol outcomes in sweep order, so a run's behavior is auditable
/// without scraping logs.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub outcomes: Vec<(String, SymbolOutcome)>,
}

impl SweepReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn ordered(&self) -> usize {
        self.count(|o| matches!(o, SymbolOutcome::Ordered { .. }))
    }

    pub fn no_signal(&self) -> usize {
        self.count(|o| matches!(o, SymbolOutcome::NoSignal))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, SymbolOutcome::NoData))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, SymbolOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&SymbolOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

/// Drive one sweep over `symbols` and collect the outcomes.
pub async fn run_sweep<T: TradingApi, D: MarketData>(
    trading: &T,
    data: &D,
    config: &SweepConfig,
    indicators: &[Box<dyn Indicator>],
    symbols: &[String],
) -> SweepReport {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(config.lookback_days);
    info!(
        "starting sweep over {} symbols, daily bars {} to {}",
        symbols.len(),
        start,
        end
    );

    let mut report = SweepReport::default();
    for symbol in symbols {
        let outcome = process_symbol(trading, data, config, indicators, symbol, start, end).await;
        match &outcome {
            SymbolOutcome::Ordered { order_id, status } => {
                info!(
                    "BUY SIGNAL {}: order accepted, id={}, status={}",
                    symbol, order_id, status
                );
            }
            SymbolOutcome::NoSignal => info!("NO SIGNAL {}", symbol),
            SymbolOutcome::NoData => info!("{}: no bar data in window, skipping", symbol),
            SymbolOutcome::Failed(message) => warn!("{}: {}", symbol, message),
        }
        report.outcomes.push((symbol.clone(), outcome));

        tokio::time::sleep(std::time::Duration::from_millis(config.symbol_delay_ms)).await;
    }

    info!(
        "sweep finished: {} ordered, {} no-signal, {} skipped, {} failed",
        report.ordered(),
        report.no_signal(),
        report.skipped(),
        report.failed()
    );
    report
}

async fn process_symbol<T: TradingApi, D: MarketData>(
    trading: &T,
    data: &D,
    config: &SweepConfig,
    indicators: &[Box<dyn Indicator>],
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> SymbolOutcome {
    let bars = match data.daily_bars(symbol, start, end).await {
        Ok(bars) => bars,
        Err(e) => return SymbolOutcome::Failed(e.to_string()),
    };
    if bars.is_empty() {
        return SymbolOutcome::NoData;
    }

    let series = augment(bars, indicators);
    if !should_buy(&series) {
        return SymbolOutcome::NoSignal;
    }

    let order = match Order::market(symbol, OrderSide::Buy, config.order_qty, TimeInForce::Gtc) {
        Ok(order) => order,
        Err(e) => return SymbolOutcome::Failed(e),
    };
    match trading.submit_order(&order).await {
        Ok(receipt) => SymbolOutcome::Ordered {
            order_id: receipt.id,
            status: receipt.status,
        },
        Err(e) => SymbolOutcome::Failed(e.to_string()),
    }
}
