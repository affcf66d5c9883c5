//! Ichimoku Cloud

use crate::impl_::smoothing::{rolling_max, rolling_min, shift_forward};
use crate::traits::MultiOutputIndicator;
use vela_types::PriceBar;

/// Ichimoku result lines.
///
/// The Senkou spans are displaced forward by the displacement period, so
/// `senkou_a[i]` is the span value plotted against bar `i` (computed from
/// the window ending `displacement` bars earlier). `chikou_ref[i]` is the
/// close `displacement` bars back, the level the Chikou span (today's
/// close plotted backwards) is compared against.
#[derive(Debug, Clone)]
pub struct IchimokuResult {
    /// Tenkan-sen (conversion line)
    pub tenkan: Vec<f64>,
    /// Kijun-sen (base line)
    pub kijun: Vec<f64>,
    /// Senkou Span A, displaced forward
    pub senkou_a: Vec<f64>,
    /// Senkou Span B, displaced forward
    pub senkou_b: Vec<f64>,
    /// Close `displacement` bars back
    pub chikou_ref: Vec<f64>,
}

/// Ichimoku Cloud
///
/// Standard periods are (9, 26, 52) with a displacement of 26. All lines
/// are rolling high/low midpoints except the spans' displacement and the
/// Chikou reference.
#[derive(Debug, Clone)]
pub struct Ichimoku {
    /// Tenkan-sen window
    pub tenkan_period: usize,
    /// Kijun-sen window
    pub kijun_period: usize,
    /// Senkou Span B window
    pub senkou_b_period: usize,
    /// Forward displacement of the spans (and Chikou lookback)
    pub displacement: usize,
}

impl Ichimoku {
    /// Creates a new Ichimoku indicator (conventionally 9, 26, 52, 26).
    pub fn new(
        tenkan_period: usize,
        kijun_period: usize,
        senkou_b_period: usize,
        displacement: usize,
    ) -> Self {
        Self {
            tenkan_period,
            kijun_period,
            senkou_b_period,
            displacement,
        }
    }

    fn midpoint(bars: &[PriceBar], period: usize) -> Vec<f64> {
        let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let hh = rolling_max(&highs, period);
        let ll = rolling_min(&lows, period);
        hh.iter().zip(ll.iter()).map(|(h, l)| (h + l) / 2.0).collect()
    }
}

impl MultiOutputIndicator for Ichimoku {
    type Output = IchimokuResult;

    fn compute_all(&self, bars: &[PriceBar]) -> IchimokuResult {
        let tenkan = Self::midpoint(bars, self.tenkan_period);
        let kijun = Self::midpoint(bars, self.kijun_period);

        let senkou_a_raw: Vec<f64> = tenkan
            .iter()
            .zip(kijun.iter())
            .map(|(t, k)| (t + k) / 2.0)
            .collect();
        let senkou_b_raw = Self::midpoint(bars, self.senkou_b_period);

        let senkou_a = shift_forward(&senkou_a_raw, self.displacement);
        let senkou_b = shift_forward(&senkou_b_raw, self.displacement);

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let chikou_ref = shift_forward(&closes, self.displacement);

        IchimokuResult {
            tenkan,
            kijun,
            senkou_a,
            senkou_b,
            chikou_ref,
        }
    }

    fn name(&self) -> &str {
        "ICHIMOKU"
    }

    fn warmup_periods(&self) -> usize {
        self.senkou_b_period + self.displacement
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["tenkan", "kijun", "senkou_a", "senkou_b", "chikou_ref"]
    }
}
