//! End-of-run account and position report.
//!
//! Runs last and never fails the run: every fetch error here is logged and
//! swallowed.

use crate::domain::repositories::broker::TradingApi;
use crate::domain::services::performance::{daily_pnl, daily_pnl_pct};
use tracing::{info, warn};

pub async fn report_performance<T: TradingApi>(trading: &T) {
    info!("==== account and position summary ====");

    match trading.account().await {
        Ok(account) => {
            info!("account status: {}", account.status);
            info!("equity: ${:.2}", account.equity);
            info!(
                "daily P&L: ${:.2} ({:.2}%)",
                daily_pnl(account.equity, account.last_equity),
                daily_pnl_pct(account.equity, account.last_equity)
            );
        }
        Err(e) => warn!("failed to fetch account snapshot: {}", e),
    }

    match trading.positions().await {
        Ok(positions) if positions.is_empty() => info!("no open positions"),
        Ok(positions) => {
            info!("open positions:");
            for position in &positions {
                info!(
                    "  {}: qty={}, unrealized P&L {:.2}%",
                    position.symbol,
                    position.qty,
                    position.unrealized_pl_pct()
                );
            }
        }
        Err(e) => warn!("failed to fetch positions: {}", e),
    }
}
