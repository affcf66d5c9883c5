//! Per-indicator decision rules.
//!
//! Each rule returns `None` when its primary input has no defined value
//! (the indicator then contributes no signal at all) and `Some(Neutral)`
//! when the primary is present but a co-input (the previous-day value
//! or a sibling line) is missing.

use vela_indicators::{IndicatorKind, IndicatorSet};
use vela_types::SignalClass;

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;
const STOCH_OVERBOUGHT: f64 = 80.0;
const STOCH_OVERSOLD: f64 = 20.0;
const CCI_UPPER: f64 = 100.0;
const CCI_LOWER: f64 = -100.0;
const ADX_TREND_FLOOR: f64 = 20.0;
const WILLIAMS_OVERSOLD: f64 = -80.0;
const WILLIAMS_OVERBOUGHT: f64 = -20.0;
const UO_UPPER: f64 = 70.0;
const UO_LOWER: f64 = 30.0;

fn value_at(set: Option<&IndicatorSet>, kind: IndicatorKind) -> Option<f64> {
    set.and_then(|s| s.get(kind))
}

/// Close vs moving-average rule, shared by the whole MA family.
pub fn moving_average(set: &IndicatorSet, kind: IndicatorKind) -> Option<SignalClass> {
    let ma = set.get(kind)?;
    Some(if set.close() > ma {
        SignalClass::Buy
    } else if set.close() < ma {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// RSI threshold rule: overbought sells, oversold buys.
pub fn rsi(set: &IndicatorSet) -> Option<SignalClass> {
    let rsi = set.get(IndicatorKind::Rsi14)?;
    Some(if rsi > RSI_OVERBOUGHT {
        SignalClass::Sell
    } else if rsi < RSI_OVERSOLD {
        SignalClass::Buy
    } else {
        SignalClass::Neutral
    })
}

/// Stochastic rule: both lines at an extreme with %K leading out of it.
pub fn stochastic(set: &IndicatorSet) -> Option<SignalClass> {
    stochastic_shape(set, IndicatorKind::StochK, IndicatorKind::StochD)
}

/// StochRSI rule: same shape as Stochastic on the [0, 100] scale.
pub fn stoch_rsi(set: &IndicatorSet) -> Option<SignalClass> {
    stochastic_shape(set, IndicatorKind::StochRsiK, IndicatorKind::StochRsiD)
}

fn stochastic_shape(
    set: &IndicatorSet,
    k_kind: IndicatorKind,
    d_kind: IndicatorKind,
) -> Option<SignalClass> {
    let k = set.get(k_kind)?;
    let Some(d) = set.get(d_kind) else {
        return Some(SignalClass::Neutral);
    };

    Some(
        if k < STOCH_OVERSOLD && d < STOCH_OVERSOLD && k > d {
            SignalClass::Buy
        } else if k > STOCH_OVERBOUGHT && d > STOCH_OVERBOUGHT && k < d {
            SignalClass::Sell
        } else {
            SignalClass::Neutral
        },
    )
}

/// CCI reversal rule: extreme reading turning back toward the mean.
pub fn cci(set: &IndicatorSet, previous: Option<&IndicatorSet>) -> Option<SignalClass> {
    let cci = set.get(IndicatorKind::Cci20)?;
    let Some(prev_cci) = value_at(previous, IndicatorKind::Cci20) else {
        return Some(SignalClass::Neutral);
    };

    Some(if cci < CCI_LOWER && cci > prev_cci {
        SignalClass::Buy
    } else if cci > CCI_UPPER && cci < prev_cci {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// ADX rule: directional lead confirmed by a strengthening trend.
pub fn adx(set: &IndicatorSet, previous: Option<&IndicatorSet>) -> Option<SignalClass> {
    let adx = set.get(IndicatorKind::Adx14)?;
    let (Some(plus_di), Some(minus_di), Some(prev_adx)) = (
        set.get(IndicatorKind::DiPlus),
        set.get(IndicatorKind::DiMinus),
        value_at(previous, IndicatorKind::Adx14),
    ) else {
        return Some(SignalClass::Neutral);
    };

    let trending = adx > ADX_TREND_FLOOR && adx > prev_adx;
    Some(if plus_di > minus_di && trending {
        SignalClass::Buy
    } else if plus_di < minus_di && trending {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// Awesome Oscillator rule: saucer on the matching side of zero.
pub fn awesome(set: &IndicatorSet, previous: Option<&IndicatorSet>) -> Option<SignalClass> {
    let ao = set.get(IndicatorKind::AwesomeOsc)?;
    let Some(prev_ao) = value_at(previous, IndicatorKind::AwesomeOsc) else {
        return Some(SignalClass::Neutral);
    };

    Some(if ao > 0.0 && ao > prev_ao {
        SignalClass::Buy
    } else if ao < 0.0 && ao < prev_ao {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// Momentum rule: rising momentum buys, falling momentum sells.
pub fn momentum(set: &IndicatorSet, previous: Option<&IndicatorSet>) -> Option<SignalClass> {
    let momentum = set.get(IndicatorKind::Momentum10)?;
    let Some(prev_momentum) = value_at(previous, IndicatorKind::Momentum10) else {
        return Some(SignalClass::Neutral);
    };

    Some(if momentum > prev_momentum {
        SignalClass::Buy
    } else if momentum < prev_momentum {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// MACD rule: line above its signal line buys, below sells.
pub fn macd(set: &IndicatorSet) -> Option<SignalClass> {
    let line = set.get(IndicatorKind::MacdLine)?;
    let Some(signal) = set.get(IndicatorKind::MacdSignal) else {
        return Some(SignalClass::Neutral);
    };

    Some(if line > signal {
        SignalClass::Buy
    } else if line < signal {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// Williams %R reversal rule.
pub fn williams_r(set: &IndicatorSet, previous: Option<&IndicatorSet>) -> Option<SignalClass> {
    let wr = set.get(IndicatorKind::WilliamsR14)?;
    let Some(prev_wr) = value_at(previous, IndicatorKind::WilliamsR14) else {
        return Some(SignalClass::Neutral);
    };

    Some(if wr < WILLIAMS_OVERSOLD && wr > prev_wr {
        SignalClass::Buy
    } else if wr > WILLIAMS_OVERBOUGHT && wr < prev_wr {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// Elder-Ray rule: baseline direction plus the weakening opposite power.
pub fn bull_bear_power(set: &IndicatorSet, previous: Option<&IndicatorSet>) -> Option<SignalClass> {
    let bull = set.get(IndicatorKind::BullPower)?;
    let (Some(bear), Some(ema), Some(prev_bull), Some(prev_bear), Some(prev_ema)) = (
        set.get(IndicatorKind::BearPower),
        set.get(IndicatorKind::Ema13),
        value_at(previous, IndicatorKind::BullPower),
        value_at(previous, IndicatorKind::BearPower),
        value_at(previous, IndicatorKind::Ema13),
    ) else {
        return Some(SignalClass::Neutral);
    };

    Some(if ema > prev_ema && bear < 0.0 && bear > prev_bear {
        SignalClass::Buy
    } else if ema < prev_ema && bull > 0.0 && bull < prev_bull {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// Ultimate Oscillator threshold rule.
pub fn ultimate(set: &IndicatorSet) -> Option<SignalClass> {
    let uo = set.get(IndicatorKind::UltimateOsc)?;
    Some(if uo > UO_UPPER {
        SignalClass::Buy
    } else if uo < UO_LOWER {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    })
}

/// Ichimoku composite rule.
///
/// Precedence: the price-vs-cloud position dominates; the Tenkan/Kijun
/// order breaks ties; the Chikou comparison confirms a verdict but never
/// overrides an opposite cloud side. Gated on Tenkan (the shortest
/// lookback line); any other missing line collapses to Neutral.
pub fn ichimoku(set: &IndicatorSet) -> Option<SignalClass> {
    let tenkan = set.get(IndicatorKind::IchimokuTenkan)?;
    let (Some(kijun), Some(span_a), Some(span_b), Some(chikou_ref)) = (
        set.get(IndicatorKind::IchimokuKijun),
        set.get(IndicatorKind::IchimokuSenkouA),
        set.get(IndicatorKind::IchimokuSenkouB),
        set.get(IndicatorKind::IchimokuChikou),
    ) else {
        return Some(SignalClass::Neutral);
    };

    let price = set.close();
    let cloud_top = span_a.max(span_b);
    let cloud_bottom = span_a.min(span_b);

    let cross_bullish = tenkan > kijun;
    let cross_bearish = tenkan < kijun;
    let chikou_bullish = price > chikou_ref;
    let chikou_bearish = price < chikou_ref;

    let class = if price > cloud_top {
        if cross_bullish {
            SignalClass::Buy
        } else if cross_bearish {
            SignalClass::Neutral
        } else if chikou_bullish {
            SignalClass::Buy
        } else {
            SignalClass::Neutral
        }
    } else if price < cloud_bottom {
        if cross_bearish {
            SignalClass::Sell
        } else if cross_bullish {
            SignalClass::Neutral
        } else if chikou_bearish {
            SignalClass::Sell
        } else {
            SignalClass::Neutral
        }
    } else if cross_bullish && chikou_bullish {
        SignalClass::Buy
    } else if cross_bearish && chikou_bearish {
        SignalClass::Sell
    } else {
        SignalClass::Neutral
    };

    Some(class)
}
