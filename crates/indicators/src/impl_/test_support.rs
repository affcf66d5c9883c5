//! Shared bar builders for indicator unit tests.

use chrono::NaiveDate;
use vela_types::PriceBar;

/// Sequential trading day, starting 2024-01-02.
pub(crate) fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap() + chrono::Days::new(offset as u64)
}

/// Bars where only the close matters (open/high/low collapse onto it).
pub(crate) fn close_bars(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: day(i),
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        })
        .collect()
}

/// Bars from (open, high, low, close) rows, zero volume.
pub(crate) fn ohlc_bars(rows: &[(f64, f64, f64, f64)]) -> Vec<PriceBar> {
    rows.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| PriceBar {
            date: day(i),
            open,
            high,
            low,
            close,
            volume: 0.0,
        })
        .collect()
}
