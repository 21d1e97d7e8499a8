//! Daily P&L arithmetic for the end-of-run report.

pub fn daily_pnl(equity: f64, last_equity: f64) -> f64 {
    equity - last_equity
}

/// Daily P&L as a percentage of prior-session equity. A zero prior equity
/// (fresh account) reports 0% rather than dividing by zero.
pub fn daily_pnl_pct(equity: f64, last_equity: f64) -> f64 {
    if last_equity == 0.0 {
        0.0
    } else {
        daily_pnl(equity, last_equity) / last_equity * 100.0
    }
}
