//! Moving Average Convergence Divergence (MACD)

use crate::impl_::smoothing::{ema_series, mask_warmup};
use crate::traits::MultiOutputIndicator;
use vela_types::PriceBar;

/// MACD result lines, at raw (unscaled) magnitude.
#[derive(Debug, Clone)]
pub struct MacdResult {
    /// MACD line: EMA(fast) - EMA(slow)
    pub line: Vec<f64>,
    /// Signal line: EMA(signal) of the MACD line
    pub signal: Vec<f64>,
    /// Histogram: line - signal
    pub histogram: Vec<f64>,
}

/// Moving Average Convergence Divergence
///
/// EMAs follow `ewm(span, adjust=False)` semantics; the line is defined
/// once the slow window fills, the signal once its own window fills on
/// top of that.
#[derive(Debug, Clone)]
pub struct Macd {
    /// Fast EMA window
    pub fast_period: usize,
    /// Slow EMA window
    pub slow_period: usize,
    /// Signal EMA window
    pub signal_period: usize,
}

impl Macd {
    /// Creates a new MACD indicator (conventionally 12, 26, 9).
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

impl MultiOutputIndicator for Macd {
    type Output = MacdResult;

    fn compute_all(&self, bars: &[PriceBar]) -> MacdResult {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

        let fast = ema_series(&closes, self.fast_period);
        let slow = ema_series(&closes, self.slow_period);

        let mut line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        mask_warmup(&mut line, self.slow_period);

        let mut signal = ema_series(&line, self.signal_period);
        mask_warmup(&mut signal, self.slow_period + self.signal_period - 1);

        let histogram: Vec<f64> = line
            .iter()
            .zip(signal.iter())
            .map(|(l, s)| l - s)
            .collect();

        MacdResult {
            line,
            signal,
            histogram,
        }
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn warmup_periods(&self) -> usize {
        self.slow_period + self.signal_period - 1
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["line", "signal", "histogram"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_support::close_bars;

    #[test]
    fn test_macd_warmup_boundaries() {
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0)
            .collect();
        let bars = close_bars(&closes);

        let macd = Macd::new(12, 26, 9);
        let result = macd.compute_all(&bars);

        assert!(result.line[24].is_nan());
        assert!(result.line[25].is_finite());
        assert!(result.signal[32].is_nan());
        assert!(result.signal[33].is_finite());
        assert!(result.histogram[32].is_nan());
        assert!(result.histogram[33].is_finite());
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + 2.0 * i as f64).collect();
        let bars = close_bars(&closes);

        let macd = Macd::new(12, 26, 9);
        let result = macd.compute_all(&bars);

        // Fast EMA sits above slow EMA in a sustained uptrend
        assert!(result.line[59] > 0.0);
    }

    #[test]
    fn test_macd_histogram_is_line_minus_signal() {
        let closes: Vec<f64> = (0..50)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 8.0)
            .collect();
        let bars = close_bars(&closes);

        let macd = Macd::new(12, 26, 9);
        let result = macd.compute_all(&bars);

        for i in 33..50 {
            let expected = result.line[i] - result.signal[i];
            assert!((result.histogram[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_constant_series_is_zero() {
        let bars = close_bars(&[100.0; 40]);

        let macd = Macd::new(12, 26, 9);
        let result = macd.compute_all(&bars);

        assert!(result.line[39].abs() < 1e-10);
        assert!(result.signal[39].abs() < 1e-10);
    }
}
