//! Indicator traits.
//!
//! Defines the core computation contracts shared by all indicators.

use vela_types::PriceBar;

/// Trait for single-output indicators.
///
/// All indicators compute over the full bar series and return a Vec<f64>
/// of the same length. Values at indices before `warmup_periods() - 1`
/// are `f64::NAN`; downstream code treats NaN as "no value".
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all bars.
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64>;

    /// Name of the indicator (e.g., "SMA", "RSI").
    fn name(&self) -> &str;

    /// Minimum number of bars required for a defined output.
    fn warmup_periods(&self) -> usize;
}

/// Trait for indicators that produce several co-computed lines
/// (e.g., MACD line/signal/histogram, Stochastic %K/%D).
///
/// The lines share intermediate state, so they are computed together.
pub trait MultiOutputIndicator: Send + Sync {
    /// Type of the output structure.
    type Output;

    /// Computes all output lines at once.
    fn compute_all(&self, bars: &[PriceBar]) -> Self::Output;

    /// Name of the indicator.
    fn name(&self) -> &str;

    /// Minimum number of bars for the slowest output line.
    fn warmup_periods(&self) -> usize;

    /// Names of the output lines, in `Output` field order.
    fn output_names(&self) -> &'static [&'static str];
}
