//! Derived indicator columns over a bar series.
//!
//! The buy rule itself only reads closes, so the production sweep runs with
//! an empty indicator list and [`augment`] is a pass-through. The trait is
//! the extension point for anything richer: each indicator contributes one
//! named column, aligned row-for-row with the input bars.

use crate::domain::entities::bar::Bar;
use std::collections::BTreeMap;

/// A derived column computed over a bar series.
///
/// Implementations return exactly one value per input row, with `NaN` in
/// positions where the indicator's window is not yet full. They must not
/// reorder or drop rows.
pub trait Indicator {
    fn name(&self) -> &str;
    fn calculate(&self, bars: &[Bar]) -> Vec<f64>;
}

/// A bar series plus the indicator columns computed over it. Rows keep the
/// order of the input series; the last two rows are always the two most
/// recent trading days.
#[derive(Debug, Clone)]
pub struct AugmentedSeries {
    bars: Vec<Bar>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl AugmentedSeries {
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Attach one column per indicator to `bars`. Columns that come back with
/// the wrong length are padded or truncated to one value per row so the
/// series shape is always consistent. Name collisions keep the last writer.
pub fn augment(bars: Vec<Bar>, indicators: &[Box<dyn Indicator>]) -> AugmentedSeries {
    let mut columns = BTreeMap::new();
    for indicator in indicators {
        let mut values = indicator.calculate(&bars);
        values.truncate(bars.len());
        values.resize(bars.len(), f64::NAN);
        columns.insert(indicator.name().to_string(), values);
    }
    AugmentedSeries { bars, columns }
}

/// Simple moving average of closes.
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Sma {
            period,
            name: format!("sma_{}", period),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        let mut out = vec![f64::NAN; bars.len()];
        if self.period == 0 || bars.len() < self.period {
            return out;
        }
        let mut sum: f64 = bars[..self.period].iter().map(|b| b.close).sum();
        out[self.period - 1] = sum / self.period as f64;
        for i in self.period..bars.len() {
            sum += bars[i].close - bars[i - self.period].close;
            out[i] = sum / self.period as f64;
        }
        out
    }
}

/// Exponential moving average of closes, seeded with the SMA of the first
/// full window.
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Ema {
            period,
            name: format!("ema_{}", period),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        let mut out = vec![f64::NAN; bars.len()];
        if self.period == 0 || bars.len() < self.period {
            return out;
        }
        let multiplier = 2.0 / (self.period as f64 + 1.0);
        let mut ema: f64 =
            bars[..self.period].iter().map(|b| b.close).sum::<f64>() / self.period as f64;
        out[self.period - 1] = ema;
        for i in self.period..bars.len() {
            ema = (bars[i].close - ema) * multiplier + ema;
            out[i] = ema;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64);
                Bar::new(date, close, close, close, close, 1000.0)
            })
            .collect()
    }

    #[test]
    fn test_augment_without_indicators_is_pass_through() {
        let bars = series(&[100.0, 101.0, 102.0]);
        let augmented = augment(bars.clone(), &[]);
        assert_eq!(augmented.bars(), bars.as_slice());
        assert_eq!(augmented.len(), 3);
        assert!(!augmented.is_empty());
        assert_eq!(augmented.column_names().count(), 0);
    }

    #[test]
    fn test_augment_preserves_row_order() {
        let bars = series(&[5.0, 4.0, 3.0, 2.0]);
        let indicators: Vec<Box<dyn Indicator>> = vec![Box::new(Sma::new(2))];
        let augmented = augment(bars.clone(), &indicators);
        assert_eq!(augmented.bars(), bars.as_slice());
        assert_eq!(augmented.column("sma_2").unwrap().len(), 4);
    }

    #[test]
    fn test_sma_values() {
        let bars = series(&[1.0, 2.0, 3.0, 4.0]);
        let sma = Sma::new(2);
        let values = sma.calculate(&bars);
        assert!(values[0].is_nan());
        assert_eq!(values[1], 1.5);
        assert_eq!(values[2], 2.5);
        assert_eq!(values[3], 3.5);
    }

    #[test]
    fn test_sma_short_series_is_all_nan() {
        let bars = series(&[1.0, 2.0]);
        let values = Sma::new(5).calculate(&bars);
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_ema_seeds_with_sma() {
        let bars = series(&[2.0, 4.0, 6.0]);
        let values = Ema::new(2).calculate(&bars);
        assert!(values[0].is_nan());
        assert_eq!(values[1], 3.0);
        // (6 - 3) * 2/3 + 3 = 5
        assert!((values[2] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_column_length_guard() {
        struct Broken;
        impl Indicator for Broken {
            fn name(&self) -> &str {
                "broken"
            }
            fn calculate(&self, _bars: &[Bar]) -> Vec<f64> {
                vec![1.0] // wrong length on purpose
            }
        }
        let bars = series(&[1.0, 2.0, 3.0]);
        let indicators: Vec<Box<dyn Indicator>> = vec![Box::new(Broken)];
        let augmented = augment(bars, &indicators);
        let column = augmented.column("broken").unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column[0], 1.0);
        assert!(column[1].is_nan() && column[2].is_nan());
    }
}
