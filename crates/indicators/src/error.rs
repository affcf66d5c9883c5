//! Indicator error types.

use thiserror::Error;

/// Errors that can occur while extracting indicator snapshots.
///
/// Insufficient history is deliberately not an error: an unsatisfied
/// lookback window yields an absent value in the snapshot instead.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Snapshot requested beyond the end of the series.
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange {
        /// Requested bar index.
        index: usize,
        /// Length of the series.
        len: usize,
    },
}
