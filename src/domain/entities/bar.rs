use chrono::NaiveDate;

/// One trading day's OHLCV record for a single symbol.
///
/// Series are ordered ascending by date with at most one bar per date.
/// Calendar gaps (weekends, holidays, halts) are expected; nothing
/// downstream may assume one row per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
