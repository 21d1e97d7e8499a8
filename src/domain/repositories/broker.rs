//! Broker seams.
//!
//! These traits are the only surface the orchestrator and monitor see, which
//! keeps the sweep logic independent of the Alpaca wire format and lets tests
//! run against in-memory fakes.

use crate::domain::entities::account::AccountSnapshot;
use crate::domain::entities::bar::Bar;
use crate::domain::entities::order::{Order, OrderReceipt};
use crate::domain::entities::position::Position;
use crate::domain::errors::BrokerError;
use async_trait::async_trait;
use chrono::NaiveDate;

pub type BrokerResult<T> = Result<T, BrokerError>;

/// Account and order operations.
#[async_trait]
pub trait TradingApi: Send + Sync {
    /// Current account snapshot (status, equity, prior-session equity).
    async fn account(&self) -> BrokerResult<AccountSnapshot>;

    /// Submit an order and return the broker's receipt. The order is not
    /// tracked after submission; there is no fill verification.
    async fn submit_order(&self, order: &Order) -> BrokerResult<OrderReceipt>;

    /// All currently open positions.
    async fn positions(&self) -> BrokerResult<Vec<Position>>;
}

/// Historical market data operations.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Daily bars for one symbol over `[start, end)`, ascending by date.
    /// An empty vec is a valid answer (unknown or thinly traded symbol).
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BrokerResult<Vec<Bar>>;
}
