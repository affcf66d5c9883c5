//! Weighted and Hull moving averages

use crate::impl_::smoothing::wma_series;
use crate::traits::Indicator;
use vela_types::PriceBar;

/// Linearly-Weighted Moving Average
///
/// Weights the last N closes linearly, newest bar heaviest.
#[derive(Debug, Clone)]
pub struct Wma {
    /// Number of periods for the moving average
    pub period: usize,
}

impl Wma {
    /// Creates a new WMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Wma {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        wma_series(&closes, self.period)
    }

    fn name(&self) -> &str {
        "WMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}

/// Hull Moving Average
///
/// `WMA(2*WMA(close, n/2) - WMA(close, n), round(sqrt(n)))` with integer
/// half-period. Reported at native price scale.
#[derive(Debug, Clone)]
pub struct HullMa {
    /// Number of periods for the Hull MA
    pub period: usize,
}

impl HullMa {
    /// Creates a new Hull MA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    fn half_period(&self) -> usize {
        self.period / 2
    }

    fn sqrt_period(&self) -> usize {
        (self.period as f64).sqrt().round() as usize
    }
}

impl Indicator for HullMa {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let len = bars.len();
        if self.period < 2 {
            return vec![f64::NAN; len];
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let half = wma_series(&closes, self.half_period());
        let full = wma_series(&closes, self.period);

        let raw: Vec<f64> = half
            .iter()
            .zip(full.iter())
            .map(|(h, f)| 2.0 * h - f)
            .collect();

        wma_series(&raw, self.sqrt_period())
    }

    fn name(&self) -> &str {
        "HULL_MA"
    }

    fn warmup_periods(&self) -> usize {
        self.period + self.sqrt_period() - 1
    }
}
