//! Historical rating panel engine.
//!
//! Re-runs calculate -> classify -> aggregate at the anchor day and at
//! prior trading days, all against one shared [`IndicatorTable`]. Offsets
//! are pure index arithmetic on the immutable series: no per-offset
//! recomputation, no re-fetching, and therefore no drift between the
//! "-1 day" column of today and the "current" column of yesterday.

use chrono::NaiveDate;
use tracing::debug;
use vela_data::PriceSeries;
use vela_indicators::IndicatorTable;
use vela_signals::classify_signals;
use vela_types::{PanelEntry, RatingPanel};

use crate::aggregate::aggregate_ratings;
use crate::error::RatingError;

/// Computes the rating panel for a symbol at the given anchor offsets.
///
/// The anchor resolves to the last trading day at or before
/// `anchor_date`. Offsets are non-positive trading-day counts (0 = the
/// anchor day itself); offsets reaching before the start of the series
/// are skipped. Duplicate offsets are collapsed and entries are returned
/// anchor-first.
///
/// # Errors
/// - [`RatingError::AnchorNotFound`] when the series has no bar at or
///   before the anchor.
/// - [`RatingError::PositiveOffset`] for offsets into the future.
pub fn compute_rating_panel(
    series: &PriceSeries,
    anchor_date: NaiveDate,
    offsets: &[i32],
) -> Result<RatingPanel, RatingError> {
    let anchor_index = resolve_anchor(series, anchor_date)?;
    let table = IndicatorTable::compute(series);
    panel_from_table(series, &table, anchor_index, anchor_date, offsets)
}

pub(crate) fn resolve_anchor(
    series: &PriceSeries,
    anchor_date: NaiveDate,
) -> Result<usize, RatingError> {
    series
        .last_index_at_or_before(anchor_date)
        .ok_or_else(|| RatingError::AnchorNotFound {
            symbol: series.symbol().to_string(),
            anchor: anchor_date,
        })
}

pub(crate) fn panel_from_table(
    series: &PriceSeries,
    table: &IndicatorTable,
    anchor_index: usize,
    anchor_date: NaiveDate,
    offsets: &[i32],
) -> Result<RatingPanel, RatingError> {
    if let Some(&offset) = offsets.iter().find(|&&o| o > 0) {
        return Err(RatingError::PositiveOffset(offset));
    }

    let mut ordered: Vec<i32> = offsets.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();

    let mut entries = Vec::with_capacity(ordered.len());
    for offset in ordered {
        let index = anchor_index as i64 + i64::from(offset);
        let Ok(index) = usize::try_from(index) else {
            debug!(
                symbol = series.symbol(),
                offset, "offset reaches before the start of history; skipping"
            );
            continue;
        };
        entries.push(entry_at(table, index, offset)?);
    }

    Ok(RatingPanel {
        symbol: series.symbol().to_string(),
        anchor_date,
        entries,
    })
}

pub(crate) fn entry_at(
    table: &IndicatorTable,
    index: usize,
    offset: i32,
) -> Result<PanelEntry, RatingError> {
    let current = table.snapshot(index)?;
    let previous = if index > 0 {
        Some(table.snapshot(index - 1)?)
    } else {
        None
    };

    let signals = classify_signals(&current, previous.as_ref());
    let ratings = aggregate_ratings(&signals, current.date());

    Ok(PanelEntry {
        offset,
        date: current.date(),
        ratings,
    })
}
