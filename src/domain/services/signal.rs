//! The buy rule: did the latest close improve on the previous one.

use crate::domain::services::indicators::AugmentedSeries;

/// True when the last close strictly exceeds the one before it and both are
/// positive real numbers. Pure and total: short series, NaN closes, and
/// non-positive closes all answer false instead of erroring. Only the last
/// two rows matter, whatever else the series carries.
pub fn should_buy(series: &AugmentedSeries) -> bool {
    if series.len() < 2 {
        return false;
    }
    let bars = series.bars();
    let latest = &bars[bars.len() - 1];
    let previous = &bars[bars.len() - 2];

    if latest.close.is_nan() || previous.close.is_nan() {
        return false;
    }
    if latest.close <= 0.0 || previous.close <= 0.0 {
        return false;
    }

    latest.close > previous.close
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::bar::Bar;
    use crate::domain::services::indicators::augment;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> AugmentedSeries {
        let bars: Vec<Bar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64);
                Bar::new(date, close, close, close, close, 1000.0)
            })
            .collect();
        augment(bars, &[])
    }

    #[test]
    fn test_rising_close_buys() {
        assert!(should_buy(&series(&[100.0, 105.0])));
    }

    #[test]
    fn test_falling_close_does_not_buy() {
        assert!(!should_buy(&series(&[105.0, 100.0])));
    }

    #[test]
    fn test_equal_closes_do_not_buy() {
        assert!(!should_buy(&series(&[100.0, 100.0])));
    }

    #[test]
    fn test_short_series_does_not_buy() {
        assert!(!should_buy(&series(&[])));
        assert!(!should_buy(&series(&[100.0])));
    }

    #[test]
    fn test_nan_close_does_not_buy() {
        assert!(!should_buy(&series(&[f64::NAN, 100.0])));
        assert!(!should_buy(&series(&[100.0, f64::NAN])));
    }

    #[test]
    fn test_non_positive_close_does_not_buy() {
        assert!(!should_buy(&series(&[0.0, 100.0])));
        assert!(!should_buy(&series(&[100.0, 0.0])));
        assert!(!should_buy(&series(&[-5.0, 100.0])));
        assert!(!should_buy(&series(&[100.0, -5.0])));
    }

    #[test]
    fn test_only_last_two_rows_matter() {
        // A wild history before the final pair changes nothing.
        assert!(should_buy(&series(&[900.0, f64::NAN, -3.0, 100.0, 105.0])));
        assert!(!should_buy(&series(&[1.0, 2.0, 3.0, 105.0, 100.0])));
    }
}
