//! One-pass indicator table and per-day snapshots.
//!
//! [`IndicatorTable::compute`] evaluates the whole catalogue over a
//! validated series exactly once; [`IndicatorTable::snapshot`] extracts
//! the strongly-typed value set for any bar index. Every anchor-offset
//! computation over the same series shares one table, which is what
//! makes "today's -1d" and "yesterday's current" views identical by
//! construction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use vela_data::PriceSeries;
use vela_types::PriceBar;

use crate::catalogue::IndicatorKind;
use crate::error::IndicatorError;
use crate::impl_::{
    awesome::AwesomeOscillator, cci::Cci, dmi::Dmi, elder_ray::ElderRay, ema::Ema,
    ichimoku::Ichimoku, macd::Macd, momentum::Momentum, rsi::Rsi, sma::Sma, stoch_rsi::StochRsi,
    stochastic::Stochastic, ultimate::UltimateOscillator, vwma::Vwma, williams_r::WilliamsR,
    wma::HullMa,
};
use crate::traits::{Indicator, MultiOutputIndicator};

/// Raw/scaled value pair for one indicator line on one day.
///
/// `scaled` is `raw * IndicatorKind::scale()`; the multiplier is applied
/// here and nowhere else, so a kind cannot drift from its documented
/// display scale.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndicatorValue {
    /// Value at the formula's native scale
    pub raw: f64,
    /// Display-compatible value
    pub scaled: f64,
}

impl IndicatorValue {
    fn new(kind: IndicatorKind, raw: f64) -> Self {
        Self {
            raw,
            scaled: raw * kind.scale(),
        }
    }
}

/// Strongly-typed indicator snapshot for one bar index.
///
/// Kinds whose lookback window is unsatisfied are absent from the map:
/// missing means excluded, not zero.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndicatorSet {
    date: NaiveDate,
    close: f64,
    values: BTreeMap<IndicatorKind, IndicatorValue>,
}

impl IndicatorSet {
    /// Builds a snapshot directly from scaled values.
    ///
    /// [`IndicatorTable::snapshot`] is the normal source of snapshots;
    /// this constructor serves adapters and tests that hand-assemble
    /// value sets.
    #[must_use]
    pub fn from_scaled(
        date: NaiveDate,
        close: f64,
        values: impl IntoIterator<Item = (IndicatorKind, f64)>,
    ) -> Self {
        let values = values
            .into_iter()
            .map(|(kind, scaled)| {
                (
                    kind,
                    IndicatorValue {
                        raw: scaled / kind.scale(),
                        scaled,
                    },
                )
            })
            .collect();
        Self {
            date,
            close,
            values,
        }
    }

    /// Trading day of the snapshot.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Close price on the snapshot day.
    #[must_use]
    pub fn close(&self) -> f64 {
        self.close
    }

    /// Scaled value for a kind, if its lookback is satisfied.
    #[must_use]
    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        self.values.get(&kind).map(|v| v.scaled)
    }

    /// Raw (unscaled) value for a kind.
    #[must_use]
    pub fn raw(&self, kind: IndicatorKind) -> Option<f64> {
        self.values.get(&kind).map(|v| v.raw)
    }

    /// Whether the kind has a defined value on this day.
    #[must_use]
    pub fn contains(&self, kind: IndicatorKind) -> bool {
        self.values.contains_key(&kind)
    }

    /// All defined values, in catalogue order.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<IndicatorKind, IndicatorValue> {
        &self.values
    }
}

/// All catalogue series for one price series, computed in one pass.
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
    series: BTreeMap<IndicatorKind, Vec<f64>>,
}

impl IndicatorTable {
    /// Computes every catalogue indicator over the series.
    ///
    /// The input is a validated [`PriceSeries`], so ordering and
    /// duplicate-date violations have already failed fast at
    /// construction; nothing here can observe unordered data.
    #[must_use]
    pub fn compute(series: &PriceSeries) -> Self {
        let bars = series.bars();
        let mut table: BTreeMap<IndicatorKind, Vec<f64>> = BTreeMap::new();

        let sma_windows = [
            (IndicatorKind::Sma5, 5),
            (IndicatorKind::Sma10, 10),
            (IndicatorKind::Sma20, 20),
            (IndicatorKind::Sma30, 30),
            (IndicatorKind::Sma50, 50),
            (IndicatorKind::Sma100, 100),
            (IndicatorKind::Sma200, 200),
        ];
        for (kind, period) in sma_windows {
            table.insert(kind, Sma::new(period).compute(bars));
        }

        let ema_windows = [
            (IndicatorKind::Ema5, 5),
            (IndicatorKind::Ema10, 10),
            (IndicatorKind::Ema13, 13),
            (IndicatorKind::Ema20, 20),
            (IndicatorKind::Ema30, 30),
            (IndicatorKind::Ema50, 50),
            (IndicatorKind::Ema100, 100),
            (IndicatorKind::Ema200, 200),
        ];
        for (kind, period) in ema_windows {
            table.insert(kind, Ema::new(period).compute(bars));
        }

        table.insert(IndicatorKind::Vwma20, Vwma::new(20).compute(bars));
        table.insert(IndicatorKind::HullMa9, HullMa::new(9).compute(bars));
        table.insert(IndicatorKind::Rsi14, Rsi::new(14).compute(bars));
        table.insert(IndicatorKind::Cci20, Cci::new(20).compute(bars));
        table.insert(IndicatorKind::Momentum10, Momentum::new(10).compute(bars));
        table.insert(
            IndicatorKind::AwesomeOsc,
            AwesomeOscillator::new(5, 34).compute(bars),
        );
        table.insert(
            IndicatorKind::WilliamsR14,
            WilliamsR::new(14).compute(bars),
        );
        table.insert(
            IndicatorKind::UltimateOsc,
            UltimateOscillator::new(7, 14, 28).compute(bars),
        );

        let stoch = Stochastic::new(14, 3).compute_all(bars);
        table.insert(IndicatorKind::StochK, stoch.k);
        table.insert(IndicatorKind::StochD, stoch.d);

        let dmi = Dmi::new(14).compute_all(bars);
        table.insert(IndicatorKind::Adx14, dmi.adx);
        table.insert(IndicatorKind::DiPlus, dmi.plus_di);
        table.insert(IndicatorKind::DiMinus, dmi.minus_di);

        let macd = Macd::new(12, 26, 9).compute_all(bars);
        table.insert(IndicatorKind::MacdLine, macd.line);
        table.insert(IndicatorKind::MacdSignal, macd.signal);
        table.insert(IndicatorKind::MacdHist, macd.histogram);

        let stoch_rsi = StochRsi::new(14, 14, 3, 3).compute_all(bars);
        table.insert(IndicatorKind::StochRsiK, stoch_rsi.k);
        table.insert(IndicatorKind::StochRsiD, stoch_rsi.d);

        let elder = ElderRay::new(13).compute_all(bars);
        table.insert(IndicatorKind::BullPower, elder.bull);
        table.insert(IndicatorKind::BearPower, elder.bear);

        let ichimoku = Ichimoku::new(9, 26, 52, 26).compute_all(bars);
        table.insert(IndicatorKind::IchimokuTenkan, ichimoku.tenkan);
        table.insert(IndicatorKind::IchimokuKijun, ichimoku.kijun);
        table.insert(IndicatorKind::IchimokuSenkouA, ichimoku.senkou_a);
        table.insert(IndicatorKind::IchimokuSenkouB, ichimoku.senkou_b);
        table.insert(IndicatorKind::IchimokuChikou, ichimoku.chikou_ref);

        for (kind, values) in &table {
            debug_check_bounds(*kind, values);
        }

        Self {
            dates: bars.iter().map(|b| b.date).collect(),
            closes: bars.iter().map(|b| b.close).collect(),
            series: table,
        }
    }

    /// Number of trading days covered by the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table covers no trading days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Scaled value for one kind at one index, if defined.
    #[must_use]
    pub fn value(&self, kind: IndicatorKind, index: usize) -> Option<f64> {
        self.series
            .get(&kind)
            .and_then(|s| s.get(index))
            .copied()
            .filter(|v| v.is_finite())
            .map(|raw| IndicatorValue::new(kind, raw).scaled)
    }

    /// Extracts the snapshot for a bar index.
    ///
    /// # Errors
    /// [`IndicatorError::IndexOutOfRange`] when `index` is past the end
    /// of the series.
    pub fn snapshot(&self, index: usize) -> Result<IndicatorSet, IndicatorError> {
        if index >= self.len() {
            return Err(IndicatorError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let mut values = BTreeMap::new();
        for (kind, series) in &self.series {
            let raw = series[index];
            if raw.is_finite() {
                values.insert(*kind, IndicatorValue::new(*kind, raw));
            }
        }

        Ok(IndicatorSet {
            date: self.dates[index],
            close: self.closes[index],
            values,
        })
    }
}

/// Computes the full indicator set at one bar index.
///
/// One-shot convenience over [`IndicatorTable`]; callers that need
/// several indices of the same series should build the table once and
/// snapshot repeatedly.
///
/// # Errors
/// [`IndicatorError::IndexOutOfRange`] when `index` is past the end of
/// the series.
pub fn compute_indicators(
    series: &PriceSeries,
    index: usize,
) -> Result<IndicatorSet, IndicatorError> {
    IndicatorTable::compute(series).snapshot(index)
}

fn debug_check_bounds(kind: IndicatorKind, values: &[f64]) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Some((lo, hi)) = kind.bounds() {
        for (i, &raw) in values.iter().enumerate() {
            if raw.is_finite() {
                let scaled = raw * kind.scale();
                debug_assert!(
                    scaled >= lo - 1e-6 && scaled <= hi + 1e-6,
                    "{} out of documented range at index {i}: {scaled} not in [{lo}, {hi}]",
                    kind.label(),
                );
            }
        }
    }
}
