//! Awesome Oscillator

use crate::impl_::smoothing::sma_series;
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Awesome Oscillator
///
/// `SMA(median_price, fast) - SMA(median_price, slow)` with median price
/// `(high + low) / 2`. Reported at native scale; unlike MACD and
/// Bull/Bear Power, no display multiplier is applied.
#[derive(Debug, Clone)]
pub struct AwesomeOscillator {
    /// Fast SMA window
    pub fast_period: usize,
    /// Slow SMA window
    pub slow_period: usize,
}

impl AwesomeOscillator {
    /// Creates a new Awesome Oscillator (conventionally 5, 34).
    pub fn new(fast_period: usize, slow_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
        }
    }
}

impl Indicator for AwesomeOscillator {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let median: Vec<f64> = bars.iter().map(|b| (b.high + b.low) / 2.0).collect();

        let fast = sma_series(&median, self.fast_period);
        let slow = sma_series(&median, self.slow_period);

        fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect()
    }

    fn name(&self) -> &str {
        "AO"
    }

    fn warmup_periods(&self) -> usize {
        self.slow_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_support::ohlc_bars;

    #[test]
    fn test_ao_positive_in_uptrend() {
        let rows: Vec<(f64, f64, f64, f64)> = (0..40)
            .map(|i| {
                let base = 100.0 + 1.5 * i as f64;
                (base, base + 1.0, base - 1.0, base)
            })
            .collect();
        let bars = ohlc_bars(&rows);

        let ao = AwesomeOscillator::new(5, 34);
        let result = ao.compute(&bars);

        assert!(result[32].is_nan());
        assert!(result[33] > 0.0);
    }

    #[test]
    fn test_ao_zero_on_constant_series() {
        let rows = vec![(100.0, 101.0, 99.0, 100.0); 40];
        let bars = ohlc_bars(&rows);

        let ao = AwesomeOscillator::new(5, 34);
        let result = ao.compute(&bars);

        assert!(result[39].abs() < 1e-10);
    }

    #[test]
    fn test_ao_exact_value_small_windows() {
        // Median prices 1..=4
        let rows = vec![
            (1.0, 2.0, 0.0, 1.0), // median 1
            (2.0, 3.0, 1.0, 2.0), // median 2
            (3.0, 4.0, 2.0, 3.0), // median 3
            (4.0, 5.0, 3.0, 4.0), // median 4
        ];
        let bars = ohlc_bars(&rows);

        let ao = AwesomeOscillator::new(2, 3);
        let result = ao.compute(&bars);

        // SMA2 = 3.5, SMA3 = 3.0 at the last bar
        assert!((result[3] - 0.5).abs() < 1e-10);
    }
}
