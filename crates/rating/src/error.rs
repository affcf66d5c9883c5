//! Rating-engine error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the rating and panel engines.
#[derive(Debug, Error)]
pub enum RatingError {
    /// Snapshot extraction failed.
    #[error(transparent)]
    Indicator(#[from] vela_indicators::IndicatorError),

    /// No trading day exists at or before the requested anchor.
    #[error("no bar at or before anchor date {anchor} for {symbol}")]
    AnchorNotFound {
        /// Symbol whose series was anchored.
        symbol: String,
        /// Requested anchor date.
        anchor: NaiveDate,
    },

    /// Panel offsets count backwards from the anchor; positive values
    /// would look into the future.
    #[error("offset {0} is positive; panel offsets count backwards from the anchor")]
    PositiveOffset(i32),
}
