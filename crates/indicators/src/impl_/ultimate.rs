//! Ultimate Oscillator

use crate::impl_::smoothing::rolling_sum;
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Ultimate Oscillator
///
/// Weighted blend of buying-pressure/true-range ratios over three
/// windows: `100 * (4*avg_short + 2*avg_medium + avg_long) / 7`.
#[derive(Debug, Clone)]
pub struct UltimateOscillator {
    /// Short averaging window
    pub short_period: usize,
    /// Medium averaging window
    pub medium_period: usize,
    /// Long averaging window
    pub long_period: usize,
}

impl UltimateOscillator {
    /// Creates a new Ultimate Oscillator (conventionally 7, 14, 28).
    pub fn new(short_period: usize, medium_period: usize, long_period: usize) -> Self {
        Self {
            short_period,
            medium_period,
            long_period,
        }
    }
}

impl Indicator for UltimateOscillator {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];
        if self.long_period == 0 || len < 2 {
            return result;
        }

        let mut bp = vec![f64::NAN; len];
        let mut tr = vec![f64::NAN; len];
        for i in 1..len {
            let prev_close = bars[i - 1].close;
            let true_low = bars[i].low.min(prev_close);
            let true_high = bars[i].high.max(prev_close);
            bp[i] = bars[i].close - true_low;
            tr[i] = true_high - true_low;
        }

        let bp_short = rolling_sum(&bp, self.short_period);
        let tr_short = rolling_sum(&tr, self.short_period);
        let bp_medium = rolling_sum(&bp, self.medium_period);
        let tr_medium = rolling_sum(&tr, self.medium_period);
        let bp_long = rolling_sum(&bp, self.long_period);
        let tr_long = rolling_sum(&tr, self.long_period);

        for i in 0..len {
            if tr_short[i].is_finite()
                && tr_medium[i].is_finite()
                && tr_long[i].is_finite()
                && tr_short[i] > 0.0
                && tr_medium[i] > 0.0
                && tr_long[i] > 0.0
            {
                let avg_short = bp_short[i] / tr_short[i];
                let avg_medium = bp_medium[i] / tr_medium[i];
                let avg_long = bp_long[i] / tr_long[i];
                result[i] = 100.0 * (4.0 * avg_short + 2.0 * avg_medium + avg_long) / 7.0;
            }
        }

        result
    }

    fn name(&self) -> &str {
        "UO"
    }

    fn warmup_periods(&self) -> usize {
        self.long_period + 1
    }
}
