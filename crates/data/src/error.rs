//! Data-layer error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or validating a price series.
///
/// All of these are fatal to the affected symbol's pipeline but must not
/// abort a batch over other symbols.
#[derive(Debug, Error)]
pub enum DataError {
    /// Series contained no bars.
    #[error("empty series")]
    EmptySeries,

    /// Bar dates regressed (series not sorted ascending).
    #[error("out-of-order date at index {index}: {date} after {prev_date}")]
    OutOfOrder {
        /// Index of the offending bar.
        index: usize,
        /// Date of the preceding bar.
        prev_date: NaiveDate,
        /// Date of the offending bar.
        date: NaiveDate,
    },

    /// Two bars share a trading day.
    #[error("duplicate date at index {index}: {date}")]
    DuplicateDate {
        /// Index of the second occurrence.
        index: usize,
        /// The duplicated date.
        date: NaiveDate,
    },

    /// A bar violated basic OHLCV sanity (NaN/Inf, negative volume,
    /// high/low inconsistent with open/close).
    #[error("corrupt bar: {0}")]
    CorruptBar(String),
}
