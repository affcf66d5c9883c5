//! Elder-Ray Bull Power / Bear Power

use crate::impl_::ema::Ema;
use crate::traits::{Indicator, MultiOutputIndicator};
use vela_types::PriceBar;

/// Elder-Ray result lines, at raw (unscaled) magnitude.
#[derive(Debug, Clone)]
pub struct ElderRayResult {
    /// Bull Power: high - EMA
    pub bull: Vec<f64>,
    /// Bear Power: low - EMA
    pub bear: Vec<f64>,
}

/// Elder-Ray Bull/Bear Power
///
/// Distance of the bar's high and low from the EMA baseline.
#[derive(Debug, Clone)]
pub struct ElderRay {
    /// EMA baseline window
    pub period: usize,
}

impl ElderRay {
    /// Creates a new Elder-Ray indicator (conventionally EMA 13).
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl MultiOutputIndicator for ElderRay {
    type Output = ElderRayResult;

    fn compute_all(&self, bars: &[PriceBar]) -> ElderRayResult {
        let ema = Ema::new(self.period).compute(bars);

        let bull: Vec<f64> = bars
            .iter()
            .zip(ema.iter())
            .map(|(b, e)| b.high - e)
            .collect();
        let bear: Vec<f64> = bars
            .iter()
            .zip(ema.iter())
            .map(|(b, e)| b.low - e)
            .collect();

        ElderRayResult { bull, bear }
    }

    fn name(&self) -> &str {
        "ELDER_RAY"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["bull", "bear"]
    }
}
