//! Stochastic RSI (%K / %D)

use crate::impl_::rsi::Rsi;
use crate::impl_::smoothing::{rolling_max, rolling_min, sma_series};
use crate::traits::{Indicator, MultiOutputIndicator};
use vela_types::PriceBar;

/// Stochastic RSI result lines, raw in [0, 1].
#[derive(Debug, Clone)]
pub struct StochRsiResult {
    /// Smoothed %K
    pub k: Vec<f64>,
    /// %D: SMA of %K
    pub d: Vec<f64>,
}

/// Stochastic RSI
///
/// Applies the stochastic transform to the RSI series:
/// `(RSI - LL) / (HH - LL)` over `stoch_period` RSI values, smoothed
/// into %K and %D. Raw output is in [0, 1]; display scaling to [0, 100]
/// happens at the catalogue level.
#[derive(Debug, Clone)]
pub struct StochRsi {
    /// RSI window
    pub rsi_period: usize,
    /// Stochastic window over the RSI series
    pub stoch_period: usize,
    /// SMA window for %K
    pub smooth_k: usize,
    /// SMA window for %D
    pub smooth_d: usize,
}

impl StochRsi {
    /// Creates a new StochRSI indicator (conventionally 14, 14, 3, 3).
    pub fn new(rsi_period: usize, stoch_period: usize, smooth_k: usize, smooth_d: usize) -> Self {
        Self {
            rsi_period,
            stoch_period,
            smooth_k,
            smooth_d,
        }
    }
}

impl MultiOutputIndicator for StochRsi {
    type Output = StochRsiResult;

    fn compute_all(&self, bars: &[PriceBar]) -> StochRsiResult {
        let len = bars.len();
        let rsi = Rsi::new(self.rsi_period).compute(bars);

        let hh = rolling_max(&rsi, self.stoch_period);
        let ll = rolling_min(&rsi, self.stoch_period);

        let mut raw = vec![f64::NAN; len];
        for i in 0..len {
            if rsi[i].is_finite() && hh[i].is_finite() && ll[i].is_finite() {
                let range = hh[i] - ll[i];
                if range > 0.0 {
                    raw[i] = (rsi[i] - ll[i]) / range;
                }
            }
        }

        let k = sma_series(&raw, self.smooth_k);
        let d = sma_series(&k, self.smooth_d);

        StochRsiResult { k, d }
    }

    fn name(&self) -> &str {
        "STOCH_RSI"
    }

    fn warmup_periods(&self) -> usize {
        self.rsi_period + self.stoch_period + self.smooth_k + self.smooth_d - 1
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["k", "d"]
    }
}
