//! Signal classification over an indicator snapshot.

use crate::rules;
use vela_indicators::{IndicatorKind, IndicatorSet};
use vela_types::{Signal, SignalClass, SignalKind};

/// Evaluates the rule for one signal kind.
///
/// Returns `None` when the kind's primary indicator value is undefined
/// on the snapshot day; such indicators are excluded from aggregation
/// rather than counted as Neutral.
#[must_use]
pub fn evaluate(
    kind: SignalKind,
    current: &IndicatorSet,
    previous: Option<&IndicatorSet>,
) -> Option<SignalClass> {
    match kind {
        SignalKind::Rsi => rules::rsi(current),
        SignalKind::Stochastic => rules::stochastic(current),
        SignalKind::Cci => rules::cci(current, previous),
        SignalKind::Adx => rules::adx(current, previous),
        SignalKind::AwesomeOscillator => rules::awesome(current, previous),
        SignalKind::Momentum => rules::momentum(current, previous),
        SignalKind::Macd => rules::macd(current),
        SignalKind::StochRsi => rules::stoch_rsi(current),
        SignalKind::WilliamsR => rules::williams_r(current, previous),
        SignalKind::BullBearPower => rules::bull_bear_power(current, previous),
        SignalKind::UltimateOscillator => rules::ultimate(current),
        SignalKind::Sma10 => rules::moving_average(current, IndicatorKind::Sma10),
        SignalKind::Sma20 => rules::moving_average(current, IndicatorKind::Sma20),
        SignalKind::Sma30 => rules::moving_average(current, IndicatorKind::Sma30),
        SignalKind::Sma50 => rules::moving_average(current, IndicatorKind::Sma50),
        SignalKind::Sma100 => rules::moving_average(current, IndicatorKind::Sma100),
        SignalKind::Sma200 => rules::moving_average(current, IndicatorKind::Sma200),
        SignalKind::Ema10 => rules::moving_average(current, IndicatorKind::Ema10),
        SignalKind::Ema20 => rules::moving_average(current, IndicatorKind::Ema20),
        SignalKind::Ema30 => rules::moving_average(current, IndicatorKind::Ema30),
        SignalKind::Ema50 => rules::moving_average(current, IndicatorKind::Ema50),
        SignalKind::Ema100 => rules::moving_average(current, IndicatorKind::Ema100),
        SignalKind::Ema200 => rules::moving_average(current, IndicatorKind::Ema200),
        SignalKind::Vwma => rules::moving_average(current, IndicatorKind::Vwma20),
        SignalKind::HullMa => rules::moving_average(current, IndicatorKind::HullMa9),
        SignalKind::Ichimoku => rules::ichimoku(current),
    }
}

/// Classifies every signal-bearing indicator with a defined value.
///
/// `previous` is the snapshot one trading day earlier; rules that need
/// it fall back to Neutral when it is unavailable.
#[must_use]
pub fn classify_signals(current: &IndicatorSet, previous: Option<&IndicatorSet>) -> Vec<Signal> {
    SignalKind::ALL
        .iter()
        .filter_map(|&kind| {
            evaluate(kind, current, previous).map(|class| Signal {
                kind,
                date: current.date(),
                class,
            })
        })
        .collect()
}
