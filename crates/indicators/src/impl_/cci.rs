//! Commodity Channel Index (CCI) indicator

use crate::traits::Indicator;
use vela_types::PriceBar;

/// Commodity Channel Index
///
/// `(TP - SMA(TP)) / (0.015 * mean_deviation)` with typical price
/// `(high + low + close) / 3` and the mean absolute deviation taken
/// around each window's own mean.
#[derive(Debug, Clone)]
pub struct Cci {
    /// Number of periods for the CCI
    pub period: usize,
}

impl Cci {
    /// Creates a new CCI indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Cci {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];
        if self.period == 0 || len < self.period {
            return result;
        }

        let tp: Vec<f64> = bars
            .iter()
            .map(|b| (b.high + b.low + b.close) / 3.0)
            .collect();

        for i in (self.period - 1)..len {
            let window = &tp[i + 1 - self.period..=i];
            let mean = window.iter().sum::<f64>() / self.period as f64;
            let mean_dev =
                window.iter().map(|v| (v - mean).abs()).sum::<f64>() / self.period as f64;
            if mean_dev > 0.0 {
                result[i] = (tp[i] - mean) / (0.015 * mean_dev);
            }
        }

        result
    }

    fn name(&self) -> &str {
        "CCI"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
