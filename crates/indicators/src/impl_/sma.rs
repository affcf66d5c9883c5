//! Simple Moving Average (SMA) indicator

use crate::traits::Indicator;
use vela_types::PriceBar;

/// Simple Moving Average
///
/// Calculates the arithmetic mean of the last N close prices.
#[derive(Debug, Clone)]
pub struct Sma {
    /// Number of periods for the moving average
    pub period: usize,
}

impl Sma {
    /// Creates a new SMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];

        if len < self.period || self.period == 0 {
            return result;
        }

        // Calculate initial sum
        let mut sum: f64 = bars[..self.period].iter().map(|b| b.close).sum();
        result[self.period - 1] = sum / self.period as f64;

        // Rolling calculation
        for i in self.period..len {
            sum += bars[i].close - bars[i - self.period].close;
            result[i] = sum / self.period as f64;
        }

        result
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
