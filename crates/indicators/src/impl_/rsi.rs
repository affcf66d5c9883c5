//! Relative Strength Index (RSI) indicator

use crate::impl_::smoothing::{mask_warmup, wilder_series};
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Relative Strength Index (Wilder)
///
/// Average gain / average loss over the period with Wilder smoothing
/// (`ewm(alpha=1/period, adjust=False)`), mapped into [0, 100].
#[derive(Debug, Clone)]
pub struct Rsi {
    /// Number of periods for the RSI
    pub period: usize,
}

impl Rsi {
    /// Creates a new RSI indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Rsi {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];
        if self.period == 0 || len < 2 {
            return result;
        }

        let mut gains = vec![f64::NAN; len];
        let mut losses = vec![f64::NAN; len];
        for i in 1..len {
            let change = bars[i].close - bars[i - 1].close;
            gains[i] = change.max(0.0);
            losses[i] = (-change).max(0.0);
        }

        let avg_gain = wilder_series(&gains, self.period);
        let avg_loss = wilder_series(&losses, self.period);

        for i in 1..len {
            let gain = avg_gain[i];
            let loss = avg_loss[i];
            if !gain.is_finite() || !loss.is_finite() {
                continue;
            }
            if loss == 0.0 {
                // No losses in the smoothed window: saturated unless flat
                if gain > 0.0 {
                    result[i] = 100.0;
                }
            } else {
                result[i] = 100.0 - 100.0 / (1.0 + gain / loss);
            }
        }

        // One bar for the seed change plus the smoothing window
        mask_warmup(&mut result, self.period + 1);
        result
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn warmup_periods(&self) -> usize {
        self.period + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_support::close_bars;

    #[test]
    fn test_rsi_bounds_and_warmup() {
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.9).sin() * 4.0)
            .collect();
        let bars = close_bars(&closes);

        let rsi = Rsi::new(14);
        let result = rsi.compute(&bars);

        for value in result.iter().take(14) {
            assert!(value.is_nan());
        }
        for value in result.iter().skip(14) {
            assert!(value.is_finite());
            assert!((0.0..=100.0).contains(value));
        }
    }

    #[test]
    fn test_rsi_all_gains_saturates() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let bars = close_bars(&closes);

        let rsi = Rsi::new(14);
        let result = rsi.compute(&bars);

        assert!((result[19] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses_is_zero() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let bars = close_bars(&closes);

        let rsi = Rsi::new(14);
        let result = rsi.compute(&bars);

        assert!(result[19].abs() < 1e-10);
    }

    #[test]
    fn test_rsi_balanced_alternation_near_fifty() {
        // Alternating +1/-1 moves settle close to 50
        let closes: Vec<f64> = (0..60)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let bars = close_bars(&closes);

        let rsi = Rsi::new(14);
        let result = rsi.compute(&bars);

        let last = result[59];
        assert!((last - 50.0).abs() < 10.0, "RSI = {last}");
    }
}
