/// Point-in-time view of the trading account. Reporting only: nothing in the
/// sweep makes decisions from it beyond the startup ACTIVE check.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub status: String,
    /// Total account value including cash and position market value.
    pub equity: f64,
    /// Equity as of the previous session close.
    pub last_equity: f64,
}

impl AccountSnapshot {
    pub fn is_active(&self) -> bool {
        self.status == "ACTIVE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let account = AccountSnapshot {
            status: "ACTIVE".to_string(),
            equity: 100_000.0,
            last_equity: 99_500.0,
        };
        assert!(account.is_active());
    }

    #[test]
    fn test_inactive_statuses() {
        for status in ["ACCOUNT_UPDATED", "SUBMITTED", "active"] {
            let account = AccountSnapshot {
                status: status.to_string(),
                equity: 0.0,
                last_equity: 0.0,
            };
            assert!(!account.is_active(), "{} should not count as active", status);
        }
    }
}
