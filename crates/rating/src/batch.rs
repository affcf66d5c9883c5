//! Per-symbol reports and batch orchestration.
//!
//! One symbol's failure never aborts the batch: every series yields a
//! result-or-error outcome, and outcomes come back in input order.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, warn};
use vela_data::PriceSeries;
use vela_indicators::{strength_snapshot, IndicatorTable, StrengthSnapshot};
use vela_signals::classify_signals;
use vela_types::{RatingPanel, WeightedScores};

use crate::aggregate::{aggregate_ratings, weighted_scores};
use crate::error::RatingError;
use crate::panel::{panel_from_table, resolve_anchor};

/// Full analysis output for one symbol at one anchor date.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SymbolReport {
    /// Symbol the report covers
    pub symbol: String,
    /// Trading day the anchor resolved to
    pub date: NaiveDate,
    /// Close on the anchor day
    pub close: f64,
    /// Percent change vs the prior trading day's close
    pub percent_change: Option<f64>,
    /// Close-vs-MA strength metrics on the anchor day
    pub strength: StrengthSnapshot,
    /// Weighted summary scores on the anchor day
    pub scores: WeightedScores,
    /// Rating panel across the requested offsets
    pub panel: RatingPanel,
}

/// Outcome of analyzing one symbol within a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Symbol the outcome belongs to
    pub symbol: String,
    /// The report, or the isolated per-symbol failure
    pub result: Result<SymbolReport, RatingError>,
}

/// Analyzes one symbol: indicators, signals, ratings, panel, strength.
///
/// Everything is derived from a single [`IndicatorTable`] over the
/// series snapshot, including all panel offsets.
///
/// # Errors
/// See [`crate::compute_rating_panel`].
pub fn analyze_symbol(
    series: &PriceSeries,
    anchor_date: NaiveDate,
    offsets: &[i32],
) -> Result<SymbolReport, RatingError> {
    let anchor_index = resolve_anchor(series, anchor_date)?;
    let table = IndicatorTable::compute(series);

    let panel = panel_from_table(series, &table, anchor_index, anchor_date, offsets)?;

    let current = table.snapshot(anchor_index)?;
    let previous = if anchor_index > 0 {
        Some(table.snapshot(anchor_index - 1)?)
    } else {
        None
    };

    let signals = classify_signals(&current, previous.as_ref());
    let ratings = aggregate_ratings(&signals, current.date());
    let scores = weighted_scores(&ratings);
    let strength = strength_snapshot(&current);

    let percent_change = previous.as_ref().and_then(|prev| {
        if prev.close() == 0.0 {
            None
        } else {
            Some((current.close() - prev.close()) / prev.close() * 100.0)
        }
    });

    Ok(SymbolReport {
        symbol: series.symbol().to_string(),
        date: current.date(),
        close: current.close(),
        percent_change,
        strength,
        scores,
        panel,
    })
}

/// Analyzes a batch of symbols on the rayon worker pool.
///
/// Symbols are independent, so the batch fans out with per-symbol
/// failure isolation; outcomes are returned in input order.
#[must_use]
pub fn analyze_batch(
    series_list: &[PriceSeries],
    anchor_date: NaiveDate,
    offsets: &[i32],
) -> Vec<BatchOutcome> {
    series_list
        .par_iter()
        .map(|series| {
            let result = analyze_symbol(series, anchor_date, offsets);
            match &result {
                Ok(report) => debug!(
                    symbol = series.symbol(),
                    date = %report.date,
                    "symbol analysis complete"
                ),
                Err(error) => warn!(
                    symbol = series.symbol(),
                    %error,
                    "symbol analysis failed; continuing batch"
                ),
            }
            BatchOutcome {
                symbol: series.symbol().to_string(),
                result,
            }
        })
        .collect()
}
