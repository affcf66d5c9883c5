//! Close-vs-MA strength metrics.
//!
//! Percentage distance of the close from the SMA ladder, plus the
//! short/long-term strength averages and the golden-cross flag. Any
//! missing component nulls the dependent aggregate instead of skewing it.

use crate::catalogue::IndicatorKind;
use crate::table::IndicatorSet;

/// Strength metrics derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrengthSnapshot {
    /// Close vs SMA(5), percent
    pub close_vs_ma5: Option<f64>,
    /// Close vs SMA(10), percent
    pub close_vs_ma10: Option<f64>,
    /// Close vs SMA(20), percent
    pub close_vs_ma20: Option<f64>,
    /// Close vs SMA(50), percent
    pub close_vs_ma50: Option<f64>,
    /// Close vs SMA(200), percent
    pub close_vs_ma200: Option<f64>,
    /// Mean of the 5/10/20 distances
    pub short_term: Option<f64>,
    /// Mean of the 5/10/20/50/200 distances
    pub long_term: Option<f64>,
    /// Whether SMA(50) sits above SMA(200)
    pub golden_cross: Option<bool>,
}

/// Computes the strength metrics for a snapshot.
#[must_use]
pub fn strength_snapshot(set: &IndicatorSet) -> StrengthSnapshot {
    let close_vs_ma5 = close_vs(set, IndicatorKind::Sma5);
    let close_vs_ma10 = close_vs(set, IndicatorKind::Sma10);
    let close_vs_ma20 = close_vs(set, IndicatorKind::Sma20);
    let close_vs_ma50 = close_vs(set, IndicatorKind::Sma50);
    let close_vs_ma200 = close_vs(set, IndicatorKind::Sma200);

    let short_term = mean(&[close_vs_ma5, close_vs_ma10, close_vs_ma20]);
    let long_term = mean(&[
        close_vs_ma5,
        close_vs_ma10,
        close_vs_ma20,
        close_vs_ma50,
        close_vs_ma200,
    ]);

    let golden_cross = match (set.get(IndicatorKind::Sma50), set.get(IndicatorKind::Sma200)) {
        (Some(fast), Some(slow)) => Some(fast > slow),
        _ => None,
    };

    StrengthSnapshot {
        close_vs_ma5,
        close_vs_ma10,
        close_vs_ma20,
        close_vs_ma50,
        close_vs_ma200,
        short_term,
        long_term,
        golden_cross,
    }
}

fn close_vs(set: &IndicatorSet, kind: IndicatorKind) -> Option<f64> {
    let ma = set.get(kind)?;
    if ma == 0.0 {
        return None;
    }
    Some((set.close() - ma) / ma * 100.0)
}

fn mean(components: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    for component in components {
        sum += (*component)?;
    }
    Some(sum / components.len() as f64)
}
