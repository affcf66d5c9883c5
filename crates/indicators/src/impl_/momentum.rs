//! Momentum indicator

use crate::traits::Indicator;
use vela_types::PriceBar;

/// Momentum
///
/// The absolute close difference `close[i] - close[i - period]`,
/// not a ratio.
#[derive(Debug, Clone)]
pub struct Momentum {
    /// Number of bars to look back
    pub period: usize,
}

impl Momentum {
    /// Creates a new Momentum indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Momentum {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];
        if self.period == 0 {
            return result;
        }

        for i in self.period..len {
            result[i] = bars[i].close - bars[i - self.period].close;
        }

        result
    }

    fn name(&self) -> &str {
        "MOMENTUM"
    }

    fn warmup_periods(&self) -> usize {
        self.period + 1
    }
}
