//! Exponential Moving Average (EMA) indicator

use crate::impl_::smoothing::{ema_series, mask_warmup};
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Exponential Moving Average
///
/// Matches pandas `ewm(span=period, adjust=False).mean()` semantics:
/// seeded at the first close, multiplier `2 / (period + 1)`. Output is
/// masked until a full window of bars exists, so the lookback contract
/// matches the SMA family.
#[derive(Debug, Clone)]
pub struct Ema {
    /// Number of periods for the EMA
    pub period: usize,
}

impl Ema {
    /// Creates a new EMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Ema {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let mut result = ema_series(&closes, self.period);
        mask_warmup(&mut result, self.period);
        result
    }

    fn name(&self) -> &str {
        "EMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
