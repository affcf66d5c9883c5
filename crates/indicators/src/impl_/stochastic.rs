//! Stochastic Oscillator (%K / %D)

use crate::impl_::smoothing::{rolling_max, rolling_min, sma_series};
use crate::traits::MultiOutputIndicator;
use vela_types::PriceBar;

/// Stochastic Oscillator result lines.
#[derive(Debug, Clone)]
pub struct StochasticResult {
    /// Fast %K: close position within the rolling high/low range
    pub k: Vec<f64>,
    /// %D: SMA of %K over the smoothing window
    pub d: Vec<f64>,
}

/// Stochastic Oscillator
///
/// `%K = 100 * (close - LL) / (HH - LL)` over `k_period` bars;
/// `%D = SMA(%K, d_period)`. A flat high/low range leaves %K undefined.
#[derive(Debug, Clone)]
pub struct Stochastic {
    /// Rolling window for the high/low range
    pub k_period: usize,
    /// SMA window for the signal line
    pub d_period: usize,
}

impl Stochastic {
    /// Creates a new Stochastic oscillator (conventionally 14, 3).
    pub fn new(k_period: usize, d_period: usize) -> Self {
        Self { k_period, d_period }
    }
}

impl MultiOutputIndicator for Stochastic {
    type Output = StochasticResult;

    fn compute_all(&self, bars: &[PriceBar]) -> StochasticResult {
        let len = bars.len();
        let mut k = vec![f64::NAN; len];

        if self.k_period > 0 && len >= self.k_period {
            let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
            let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
            let hh = rolling_max(&highs, self.k_period);
            let ll = rolling_min(&lows, self.k_period);

            for i in (self.k_period - 1)..len {
                let range = hh[i] - ll[i];
                if range > 0.0 {
                    k[i] = 100.0 * (bars[i].close - ll[i]) / range;
                }
            }
        }

        let d = sma_series(&k, self.d_period);
        StochasticResult { k, d }
    }

    fn name(&self) -> &str {
        "STOCH"
    }

    fn warmup_periods(&self) -> usize {
        self.k_period + self.d_period - 1
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["k", "d"]
    }
}
