//! Per-symbol price series store.

use crate::error::DataError;
use crate::validation::validate_bars;
use chrono::NaiveDate;
use vela_types::PriceBar;

/// Ordered, validated daily price series for one symbol.
///
/// Construction runs the full governance validation; afterwards the bars
/// are immutable, so any number of concurrent computations can share one
/// series by reference.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Builds a series from already-fetched bars, failing fast on an
    /// unsorted, duplicate-dated, or corrupt sequence.
    ///
    /// # Errors
    /// See [`validate_bars`].
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, DataError> {
        validate_bars(&bars)?;
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Symbol this series belongs to.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The validated bars, ascending by date.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Number of trading days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always `false` for a constructed series; kept for slice-like APIs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at an index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PriceBar> {
        self.bars.get(index)
    }

    /// Index of the last bar dated at or before `date`.
    ///
    /// This is the anchor-resolution rule: a requested anchor that falls
    /// on a non-trading day resolves to the most recent trading day.
    #[must_use]
    pub fn last_index_at_or_before(&self, date: NaiveDate) -> Option<usize> {
        let n = self.bars.partition_point(|bar| bar.date <= date);
        n.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset)
    }

    fn bar(offset: u64, close: f64) -> PriceBar {
        PriceBar {
            date: day(offset),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn test_new_validates() {
        let result = PriceSeries::new("AAA", vec![bar(1, 10.0), bar(0, 11.0)]);
        assert!(matches!(result, Err(DataError::OutOfOrder { .. })));
    }

    #[test]
    fn test_last_index_at_or_before() {
        // Trading days 0, 1, 2, then a gap, then 5
        let series = PriceSeries::new(
            "AAA",
            vec![bar(0, 10.0), bar(1, 11.0), bar(2, 12.0), bar(5, 13.0)],
        )
        .unwrap();

        assert_eq!(series.last_index_at_or_before(day(2)), Some(2));
        // Non-trading day resolves to the previous trading day
        assert_eq!(series.last_index_at_or_before(day(4)), Some(2));
        assert_eq!(series.last_index_at_or_before(day(5)), Some(3));
        assert_eq!(series.last_index_at_or_before(day(9)), Some(3));
        // Before the first bar: nothing to resolve to
        assert_eq!(
            series.last_index_at_or_before(day(0) - chrono::Days::new(1)),
            None
        );
    }
}
