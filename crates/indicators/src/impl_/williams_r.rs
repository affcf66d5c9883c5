//! Williams %R indicator

use crate::impl_::smoothing::{rolling_max, rolling_min};
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Williams %R
///
/// `-100 * (HH - close) / (HH - LL)` over the window; ranges [-100, 0].
#[derive(Debug, Clone)]
pub struct WilliamsR {
    /// Lookback window
    pub period: usize,
}

impl WilliamsR {
    /// Creates a new Williams %R indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for WilliamsR {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];
        if self.period == 0 || len < self.period {
            return result;
        }

        let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let hh = rolling_max(&highs, self.period);
        let ll = rolling_min(&lows, self.period);

        for i in (self.period - 1)..len {
            let range = hh[i] - ll[i];
            if range > 0.0 {
                result[i] = -100.0 * (hh[i] - bars[i].close) / range;
            }
        }

        result
    }

    fn name(&self) -> &str {
        "WILLIAMS_R"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_support::ohlc_bars;

    #[test]
    fn test_williams_r_close_at_high_is_zero() {
        let rows: Vec<(f64, f64, f64, f64)> = (0..5)
            .map(|i| {
                let base = 100.0 + i as f64;
                (base, base + 1.0, base - 1.0, base + 1.0)
            })
            .collect();
        let bars = ohlc_bars(&rows);

        let wr = WilliamsR::new(3);
        let result = wr.compute(&bars);

        for value in result.iter().skip(2) {
            assert!(value.abs() < 1e-10);
        }
    }

    #[test]
    fn test_williams_r_close_at_low_is_minus_hundred() {
        let rows: Vec<(f64, f64, f64, f64)> = (0..5)
            .map(|i| {
                let base = 100.0 - i as f64;
                (base, base + 1.0, base - 1.0, base - 1.0)
            })
            .collect();
        let bars = ohlc_bars(&rows);

        let wr = WilliamsR::new(3);
        let result = wr.compute(&bars);

        for value in result.iter().skip(2) {
            assert!((value + 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_williams_r_warmup() {
        let bars = ohlc_bars(&[(1.0, 2.0, 0.5, 1.5), (1.5, 2.5, 1.0, 2.0)]);

        let wr = WilliamsR::new(3);
        let result = wr.compute(&bars);

        assert!(result.iter().all(|v| v.is_nan()));
    }
}
