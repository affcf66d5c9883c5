//! Volume-Weighted Moving Average (VWMA) indicator

use crate::impl_::smoothing::rolling_sum;
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Volume-Weighted Moving Average
///
/// Rolling `sum(typical_price * volume) / sum(volume)` over the window,
/// with typical price `(high + low + close) / 3`. Windows with zero total
/// volume have no defined value.
#[derive(Debug, Clone)]
pub struct Vwma {
    /// Number of periods for the moving average
    pub period: usize,
}

impl Vwma {
    /// Creates a new VWMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Vwma {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];
        if self.period == 0 || len < self.period {
            return result;
        }

        let weighted: Vec<f64> = bars
            .iter()
            .map(|b| (b.high + b.low + b.close) / 3.0 * b.volume)
            .collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let weighted_sum = rolling_sum(&weighted, self.period);
        let volume_sum = rolling_sum(&volumes, self.period);

        for i in (self.period - 1)..len {
            if volume_sum[i].is_finite() && volume_sum[i] > 0.0 {
                result[i] = weighted_sum[i] / volume_sum[i];
            }
        }

        result
    }

    fn name(&self) -> &str {
        "VWMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
