//! Governance validation helpers.

use crate::error::DataError;
use vela_types::PriceBar;

/// Validates a bar sequence according to the series contract.
///
/// The sequence must be non-empty, strictly ascending by date with no
/// duplicate trading days, and every bar must carry finite OHLCV values,
/// a non-negative volume, and a high/low range that contains open and
/// close. Downstream indicator code relies on these guarantees instead of
/// re-checking them.
///
/// # Errors
/// - [`DataError::EmptySeries`] when `bars` is empty.
/// - [`DataError::OutOfOrder`] / [`DataError::DuplicateDate`] when the
///   date sequence is not strictly ascending.
/// - [`DataError::CorruptBar`] when a bar violates OHLCV sanity.
pub fn validate_bars(bars: &[PriceBar]) -> Result<(), DataError> {
    if bars.is_empty() {
        return Err(DataError::EmptySeries);
    }

    for (i, bar) in bars.iter().enumerate() {
        if !bar.open.is_finite()
            || !bar.high.is_finite()
            || !bar.low.is_finite()
            || !bar.close.is_finite()
            || !bar.volume.is_finite()
        {
            return Err(DataError::CorruptBar(format!(
                "NaN/Inf at index {i}: {bar:?}"
            )));
        }

        if bar.volume < 0.0 {
            return Err(DataError::CorruptBar(format!(
                "negative volume at index {i}: {}",
                bar.volume
            )));
        }

        if bar.low > bar.open
            || bar.low > bar.close
            || bar.high < bar.open
            || bar.high < bar.close
            || bar.low > bar.high
        {
            return Err(DataError::CorruptBar(format!(
                "invalid OHLC at index {i}: low={}, high={}, open={}, close={}",
                bar.low, bar.high, bar.open, bar.close
            )));
        }

        if i > 0 {
            let prev_date = bars[i - 1].date;
            if bar.date == prev_date {
                return Err(DataError::DuplicateDate {
                    index: i,
                    date: bar.date,
                });
            }
            if bar.date < prev_date {
                return Err(DataError::OutOfOrder {
                    index: i,
                    prev_date,
                    date: bar.date,
                });
            }
        }
    }

    Ok(())
}
