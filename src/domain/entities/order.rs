#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInForce {
    Day,
    Gtc,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Day => write!(f, "day"),
            TimeInForce::Gtc => write!(f, "gtc"),
        }
    }
}

/// A market order for a whole number of shares. This system never places
/// limit orders, so the order type is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub symbol: String,
    pub side: OrderSide,
    pub qty: u32,
    pub time_in_force: TimeInForce,
}

impl Order {
    pub fn market(
        symbol: &str,
        side: OrderSide,
        qty: u32,
        time_in_force: TimeInForce,
    ) -> Result<Self, String> {
        if symbol.trim().is_empty() {
            return Err("Order symbol must not be empty".to_string());
        }
        if qty == 0 {
            return Err("Order quantity must be at least 1".to_string());
        }
        Ok(Order {
            symbol: symbol.to_string(),
            side,
            qty,
            time_in_force,
        })
    }
}

/// What the broker hands back on order submission. The order is not tracked
/// any further after this.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub id: String,
    pub status: String,
}
