/// An open position as reported by the broker. Read-only, reporting only.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub qty: f64,
    /// Unrealized P&L as a fraction of cost basis (0.05 = +5%).
    pub unrealized_plpc: f64,
}

impl Position {
    /// Unrealized P&L in percent, the way the report prints it.
    pub fn unrealized_pl_pct(&self) -> f64 {
        self.unrealized_plpc * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrealized_pl_pct() {
        let position = Position {
            symbol: "AAPL".to_string(),
            qty: 3.0,
            unrealized_plpc: 0.0215,
        };
        assert!((position.unrealized_pl_pct() - 2.15).abs() < 1e-9);
    }
}
