//! Directional Movement Index (ADX, +DI, -DI) with Wilder smoothing

use crate::impl_::smoothing::{mask_warmup, wilder_series};
use crate::traits::MultiOutputIndicator;
use vela_types::PriceBar;

/// DMI result lines.
#[derive(Debug, Clone)]
pub struct DmiResult {
    /// Average Directional Index (trend strength, 0-100)
    pub adx: Vec<f64>,
    /// Positive Directional Indicator
    pub plus_di: Vec<f64>,
    /// Negative Directional Indicator
    pub minus_di: Vec<f64>,
}

/// Directional Movement Index
///
/// +DI/-DI are Wilder-smoothed directional movement relative to the
/// smoothed true range; ADX is the Wilder smoothing of the DX spread.
/// The DI lines need one full window, ADX a second one on top.
#[derive(Debug, Clone)]
pub struct Dmi {
    /// Number of periods for all smoothing stages
    pub period: usize,
}

impl Dmi {
    /// Creates a new DMI indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// True Range against the previous close.
    #[inline]
    fn true_range(bar: &PriceBar, prev_close: f64) -> f64 {
        let hl = bar.high - bar.low;
        let hc = (bar.high - prev_close).abs();
        let lc = (bar.low - prev_close).abs();
        hl.max(hc).max(lc)
    }
}

impl MultiOutputIndicator for Dmi {
    type Output = DmiResult;

    fn compute_all(&self, bars: &[PriceBar]) -> DmiResult {
        let len = bars.len();
        let mut adx = vec![f64::NAN; len];
        let mut plus_di = vec![f64::NAN; len];
        let mut minus_di = vec![f64::NAN; len];

        if self.period == 0 || len < 2 {
            return DmiResult {
                adx,
                plus_di,
                minus_di,
            };
        }

        let mut tr = vec![f64::NAN; len];
        let mut plus_dm = vec![f64::NAN; len];
        let mut minus_dm = vec![f64::NAN; len];

        for i in 1..len {
            tr[i] = Self::true_range(&bars[i], bars[i - 1].close);

            let up_move = bars[i].high - bars[i - 1].high;
            let down_move = bars[i - 1].low - bars[i].low;
            plus_dm[i] = if up_move > down_move && up_move > 0.0 {
                up_move
            } else {
                0.0
            };
            minus_dm[i] = if down_move > up_move && down_move > 0.0 {
                down_move
            } else {
                0.0
            };
        }

        let smooth_tr = wilder_series(&tr, self.period);
        let smooth_plus = wilder_series(&plus_dm, self.period);
        let smooth_minus = wilder_series(&minus_dm, self.period);

        let mut dx = vec![f64::NAN; len];
        for i in 1..len {
            let atr = smooth_tr[i];
            if atr.is_finite() && atr > 0.0 {
                plus_di[i] = 100.0 * smooth_plus[i] / atr;
                minus_di[i] = 100.0 * smooth_minus[i] / atr;

                let di_sum = plus_di[i] + minus_di[i];
                if di_sum > 0.0 {
                    dx[i] = 100.0 * (plus_di[i] - minus_di[i]).abs() / di_sum;
                }
            }
        }

        // DI lines need one change bar plus the smoothing window
        mask_warmup(&mut plus_di, self.period + 1);
        mask_warmup(&mut minus_di, self.period + 1);
        mask_warmup(&mut dx, self.period + 1);

        adx = wilder_series(&dx, self.period);
        mask_warmup(&mut adx, 2 * self.period);

        DmiResult {
            adx,
            plus_di,
            minus_di,
        }
    }

    fn name(&self) -> &str {
        "DMI"
    }

    fn warmup_periods(&self) -> usize {
        2 * self.period
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["adx", "plus_di", "minus_di"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_support::ohlc_bars;

    fn trending_bars(n: usize, step: f64) -> Vec<PriceBar> {
        let rows: Vec<(f64, f64, f64, f64)> = (0..n)
            .map(|i| {
                let base = 100.0 + step * i as f64;
                (base, base + 1.0, base - 1.0, base + 0.5)
            })
            .collect();
        ohlc_bars(&rows)
    }

    #[test]
    fn test_dmi_uptrend_plus_di_leads() {
        let bars = trending_bars(40, 2.0);

        let dmi = Dmi::new(14);
        let result = dmi.compute_all(&bars);

        let i = 39;
        assert!(result.plus_di[i] > result.minus_di[i]);
        assert!(result.adx[i] > 20.0);
    }

    #[test]
    fn test_dmi_downtrend_minus_di_leads() {
        let bars = trending_bars(40, -2.0);

        let dmi = Dmi::new(14);
        let result = dmi.compute_all(&bars);

        let i = 39;
        assert!(result.minus_di[i] > result.plus_di[i]);
    }

    #[test]
    fn test_dmi_warmup_boundaries() {
        let bars = trending_bars(40, 1.0);

        let dmi = Dmi::new(14);
        let result = dmi.compute_all(&bars);

        assert!(result.plus_di[13].is_nan());
        assert!(result.plus_di[14].is_finite());
        assert!(result.adx[26].is_nan());
        assert!(result.adx[27].is_finite());
    }

    #[test]
    fn test_dmi_di_within_bounds() {
        let bars = trending_bars(60, 1.5);

        let dmi = Dmi::new(14);
        let result = dmi.compute_all(&bars);

        for value in result.plus_di.iter().chain(&result.minus_di).chain(&result.adx) {
            if value.is_finite() {
                assert!((0.0..=100.0).contains(value));
            }
        }
    }
}
