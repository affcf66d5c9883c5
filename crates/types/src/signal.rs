use chrono::NaiveDate;

/// Ternary verdict of a single indicator rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalClass {
    /// Bullish verdict
    Buy,
    /// Bearish verdict
    Sell,
    /// No directional verdict
    Neutral,
}

/// Aggregation category of a signal-bearing indicator.
///
/// The two categories partition the catalogue; every [`SignalKind`]
/// belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// Bounded / mean-reverting indicators (RSI, Stochastic, CCI, ...)
    Oscillator,
    /// Trend-following indicators compared against price (SMA/EMA/VWMA/Hull/Ichimoku)
    MovingAverage,
}

/// Signal-bearing indicators of the fixed catalogue.
///
/// One rule exists per kind; kinds that consume several indicator lines
/// (Stochastic, MACD, Ichimoku, ...) still produce a single signal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// RSI(14) threshold rule
    Rsi,
    /// Stochastic %K/%D rule
    Stochastic,
    /// CCI(20) reversal rule
    Cci,
    /// ADX(14) with +DI/-DI rule
    Adx,
    /// Awesome Oscillator zero-line rule
    AwesomeOscillator,
    /// Momentum(10) rising/falling rule
    Momentum,
    /// MACD line vs signal line rule
    Macd,
    /// Stochastic RSI %K/%D rule
    StochRsi,
    /// Williams %R reversal rule
    WilliamsR,
    /// Elder-Ray Bull/Bear Power rule
    BullBearPower,
    /// Ultimate Oscillator threshold rule
    UltimateOscillator,
    /// Close vs SMA(10)
    Sma10,
    /// Close vs SMA(20)
    Sma20,
    /// Close vs SMA(30)
    Sma30,
    /// Close vs SMA(50)
    Sma50,
    /// Close vs SMA(100)
    Sma100,
    /// Close vs SMA(200)
    Sma200,
    /// Close vs EMA(10)
    Ema10,
    /// Close vs EMA(20)
    Ema20,
    /// Close vs EMA(30)
    Ema30,
    /// Close vs EMA(50)
    Ema50,
    /// Close vs EMA(100)
    Ema100,
    /// Close vs EMA(200)
    Ema200,
    /// Close vs VWMA(20)
    Vwma,
    /// Close vs Hull MA(9)
    HullMa,
    /// Ichimoku composite rule
    Ichimoku,
}

impl SignalKind {
    /// Every signal-bearing kind, oscillators first.
    pub const ALL: [SignalKind; 26] = [
        SignalKind::Rsi,
        SignalKind::Stochastic,
        SignalKind::Cci,
        SignalKind::Adx,
        SignalKind::AwesomeOscillator,
        SignalKind::Momentum,
        SignalKind::Macd,
        SignalKind::StochRsi,
        SignalKind::WilliamsR,
        SignalKind::BullBearPower,
        SignalKind::UltimateOscillator,
        SignalKind::Sma10,
        SignalKind::Sma20,
        SignalKind::Sma30,
        SignalKind::Sma50,
        SignalKind::Sma100,
        SignalKind::Sma200,
        SignalKind::Ema10,
        SignalKind::Ema20,
        SignalKind::Ema30,
        SignalKind::Ema50,
        SignalKind::Ema100,
        SignalKind::Ema200,
        SignalKind::Vwma,
        SignalKind::HullMa,
        SignalKind::Ichimoku,
    ];

    /// Aggregation category for this kind.
    #[must_use]
    pub fn category(self) -> SignalCategory {
        match self {
            SignalKind::Rsi
            | SignalKind::Stochastic
            | SignalKind::Cci
            | SignalKind::Adx
            | SignalKind::AwesomeOscillator
            | SignalKind::Momentum
            | SignalKind::Macd
            | SignalKind::StochRsi
            | SignalKind::WilliamsR
            | SignalKind::BullBearPower
            | SignalKind::UltimateOscillator => SignalCategory::Oscillator,
            _ => SignalCategory::MovingAverage,
        }
    }

    /// Stable display label (matches the export layer's column names).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SignalKind::Rsi => "RSI",
            SignalKind::Stochastic => "Stochastic",
            SignalKind::Cci => "CCI",
            SignalKind::Adx => "ADX",
            SignalKind::AwesomeOscillator => "AO",
            SignalKind::Momentum => "Momentum",
            SignalKind::Macd => "MACD",
            SignalKind::StochRsi => "StochRSI",
            SignalKind::WilliamsR => "Williams_R",
            SignalKind::BullBearPower => "BBP",
            SignalKind::UltimateOscillator => "UO",
            SignalKind::Sma10 => "MA_10",
            SignalKind::Sma20 => "MA_20",
            SignalKind::Sma30 => "MA_30",
            SignalKind::Sma50 => "MA_50",
            SignalKind::Sma100 => "MA_100",
            SignalKind::Sma200 => "MA_200",
            SignalKind::Ema10 => "EMA_10",
            SignalKind::Ema20 => "EMA_20",
            SignalKind::Ema30 => "EMA_30",
            SignalKind::Ema50 => "EMA_50",
            SignalKind::Ema100 => "EMA_100",
            SignalKind::Ema200 => "EMA_200",
            SignalKind::Vwma => "VWMA",
            SignalKind::HullMa => "Hull_MA",
            SignalKind::Ichimoku => "Ichimoku",
        }
    }
}

/// Classified signal for one indicator on one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Signal {
    /// Indicator rule that produced the verdict
    pub kind: SignalKind,
    /// Trading day the verdict applies to
    pub date: NaiveDate,
    /// The verdict itself
    pub class: SignalClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_class_serialization() {
        assert_eq!(serde_json::to_string(&SignalClass::Buy).unwrap(), "\"buy\"");
        assert_eq!(
            serde_json::to_string(&SignalClass::Neutral).unwrap(),
            "\"neutral\""
        );
    }

    #[test]
    fn test_category_partition() {
        let oscillators = SignalKind::ALL
            .iter()
            .filter(|k| k.category() == SignalCategory::Oscillator)
            .count();
        let mas = SignalKind::ALL
            .iter()
            .filter(|k| k.category() == SignalCategory::MovingAverage)
            .count();

        assert_eq!(oscillators, 11);
        assert_eq!(mas, 15);
        assert_eq!(oscillators + mas, SignalKind::ALL.len());
    }

    #[test]
    fn test_signal_serde_roundtrip() {
        let signal = Signal {
            kind: SignalKind::Macd,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            class: SignalClass::Buy,
        };

        let json = serde_json::to_string(&signal).unwrap();
        let deserialized: Signal = serde_json::from_str(&json).unwrap();

        assert_eq!(signal, deserialized);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = SignalKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SignalKind::ALL.len());
    }
}
