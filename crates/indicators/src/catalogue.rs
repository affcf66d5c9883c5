//! The fixed indicator catalogue.
//!
//! Every computable indicator line is one [`IndicatorKind`]. The kind
//! carries the metadata the rest of the engine needs: minimum lookback,
//! display-scale multiplier, and (where bounded) the documented value
//! range. Keeping this in one enum replaces the loosely-typed column
//! tables of ad-hoc analysis code with an auditable catalogue.

/// One indicator line of the fixed catalogue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Simple moving average, 5 days
    Sma5,
    /// Simple moving average, 10 days
    Sma10,
    /// Simple moving average, 20 days
    Sma20,
    /// Simple moving average, 30 days
    Sma30,
    /// Simple moving average, 50 days
    Sma50,
    /// Simple moving average, 100 days
    Sma100,
    /// Simple moving average, 200 days
    Sma200,
    /// Exponential moving average, 5 days
    Ema5,
    /// Exponential moving average, 10 days
    Ema10,
    /// Exponential moving average, 13 days (Elder-Ray baseline)
    Ema13,
    /// Exponential moving average, 20 days
    Ema20,
    /// Exponential moving average, 30 days
    Ema30,
    /// Exponential moving average, 50 days
    Ema50,
    /// Exponential moving average, 100 days
    Ema100,
    /// Exponential moving average, 200 days
    Ema200,
    /// Volume-weighted moving average, 20 days
    Vwma20,
    /// Hull moving average, 9 days
    HullMa9,
    /// Relative Strength Index, 14 days
    Rsi14,
    /// Stochastic %K (14)
    StochK,
    /// Stochastic %D (SMA 3 of %K)
    StochD,
    /// Commodity Channel Index, 20 days
    Cci20,
    /// Average Directional Index, 14 days
    Adx14,
    /// Positive Directional Indicator (+DI, 14 days)
    DiPlus,
    /// Negative Directional Indicator (-DI, 14 days)
    DiMinus,
    /// Awesome Oscillator (5/34 median-price SMAs, native scale)
    AwesomeOsc,
    /// Momentum, 10 days (absolute close difference)
    Momentum10,
    /// MACD line (EMA12 - EMA26, x1000)
    MacdLine,
    /// MACD signal line (EMA9 of the line, x1000)
    MacdSignal,
    /// MACD histogram (line - signal, x1000)
    MacdHist,
    /// Stochastic RSI %K (x100)
    StochRsiK,
    /// Stochastic RSI %D (x100)
    StochRsiD,
    /// Williams %R, 14 days
    WilliamsR14,
    /// Ultimate Oscillator (7/14/28)
    UltimateOsc,
    /// Elder-Ray Bull Power (high - EMA13, x1000)
    BullPower,
    /// Elder-Ray Bear Power (low - EMA13, x1000)
    BearPower,
    /// Ichimoku Tenkan-sen (conversion line, 9)
    IchimokuTenkan,
    /// Ichimoku Kijun-sen (base line, 26)
    IchimokuKijun,
    /// Ichimoku Senkou Span A, displaced forward 26 bars
    IchimokuSenkouA,
    /// Ichimoku Senkou Span B (52), displaced forward 26 bars
    IchimokuSenkouB,
    /// Chikou reference level: close 26 bars back
    IchimokuChikou,
}

impl IndicatorKind {
    /// Every kind of the catalogue, in table order.
    pub const ALL: [IndicatorKind; 40] = [
        IndicatorKind::Sma5,
        IndicatorKind::Sma10,
        IndicatorKind::Sma20,
        IndicatorKind::Sma30,
        IndicatorKind::Sma50,
        IndicatorKind::Sma100,
        IndicatorKind::Sma200,
        IndicatorKind::Ema5,
        IndicatorKind::Ema10,
        IndicatorKind::Ema13,
        IndicatorKind::Ema20,
        IndicatorKind::Ema30,
        IndicatorKind::Ema50,
        IndicatorKind::Ema100,
        IndicatorKind::Ema200,
        IndicatorKind::Vwma20,
        IndicatorKind::HullMa9,
        IndicatorKind::Rsi14,
        IndicatorKind::StochK,
        IndicatorKind::StochD,
        IndicatorKind::Cci20,
        IndicatorKind::Adx14,
        IndicatorKind::DiPlus,
        IndicatorKind::DiMinus,
        IndicatorKind::AwesomeOsc,
        IndicatorKind::Momentum10,
        IndicatorKind::MacdLine,
        IndicatorKind::MacdSignal,
        IndicatorKind::MacdHist,
        IndicatorKind::StochRsiK,
        IndicatorKind::StochRsiD,
        IndicatorKind::WilliamsR14,
        IndicatorKind::UltimateOsc,
        IndicatorKind::BullPower,
        IndicatorKind::BearPower,
        IndicatorKind::IchimokuTenkan,
        IndicatorKind::IchimokuKijun,
        IndicatorKind::IchimokuSenkouA,
        IndicatorKind::IchimokuSenkouB,
        IndicatorKind::IchimokuChikou,
    ];

    /// Minimum number of bars before this line has a defined value.
    ///
    /// A series of exactly `lookback()` bars has its first defined value
    /// at the last index.
    #[must_use]
    pub fn lookback(self) -> usize {
        match self {
            IndicatorKind::Sma5 | IndicatorKind::Ema5 => 5,
            IndicatorKind::Sma10 | IndicatorKind::Ema10 => 10,
            IndicatorKind::Sma20 | IndicatorKind::Ema20 | IndicatorKind::Cci20 => 20,
            IndicatorKind::Sma30 | IndicatorKind::Ema30 => 30,
            IndicatorKind::Sma50 | IndicatorKind::Ema50 => 50,
            IndicatorKind::Sma100 | IndicatorKind::Ema100 => 100,
            IndicatorKind::Sma200 | IndicatorKind::Ema200 => 200,
            IndicatorKind::Ema13 | IndicatorKind::BullPower | IndicatorKind::BearPower => 13,
            IndicatorKind::Vwma20 => 20,
            IndicatorKind::HullMa9 => 11,
            IndicatorKind::Rsi14 => 15,
            IndicatorKind::StochK | IndicatorKind::WilliamsR14 => 14,
            IndicatorKind::StochD => 16,
            IndicatorKind::Adx14 => 28,
            IndicatorKind::DiPlus | IndicatorKind::DiMinus => 15,
            IndicatorKind::AwesomeOsc => 34,
            IndicatorKind::Momentum10 => 11,
            IndicatorKind::MacdLine => 26,
            IndicatorKind::MacdSignal | IndicatorKind::MacdHist => 34,
            IndicatorKind::StochRsiK => 30,
            IndicatorKind::StochRsiD => 32,
            IndicatorKind::UltimateOsc => 29,
            IndicatorKind::IchimokuTenkan => 9,
            IndicatorKind::IchimokuKijun => 26,
            IndicatorKind::IchimokuSenkouA => 52,
            IndicatorKind::IchimokuSenkouB => 78,
            IndicatorKind::IchimokuChikou => 27,
        }
    }

    /// Display-compatibility multiplier applied to the raw value.
    ///
    /// MACD and Bull/Bear Power are reported x1000 and StochRSI x100;
    /// the Awesome Oscillator is deliberately left at native scale.
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            IndicatorKind::MacdLine
            | IndicatorKind::MacdSignal
            | IndicatorKind::MacdHist
            | IndicatorKind::BullPower
            | IndicatorKind::BearPower => 1000.0,
            IndicatorKind::StochRsiK | IndicatorKind::StochRsiD => 100.0,
            _ => 1.0,
        }
    }

    /// Documented value range of the scaled value, for bounded kinds.
    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            IndicatorKind::Rsi14
            | IndicatorKind::StochK
            | IndicatorKind::StochD
            | IndicatorKind::StochRsiK
            | IndicatorKind::StochRsiD
            | IndicatorKind::UltimateOsc
            | IndicatorKind::Adx14
            | IndicatorKind::DiPlus
            | IndicatorKind::DiMinus => Some((0.0, 100.0)),
            IndicatorKind::WilliamsR14 => Some((-100.0, 0.0)),
            _ => None,
        }
    }

    /// Stable display label (matches the export layer's column names).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IndicatorKind::Sma5 => "SMA_5",
            IndicatorKind::Sma10 => "SMA_10",
            IndicatorKind::Sma20 => "SMA_20",
            IndicatorKind::Sma30 => "SMA_30",
            IndicatorKind::Sma50 => "SMA_50",
            IndicatorKind::Sma100 => "SMA_100",
            IndicatorKind::Sma200 => "SMA_200",
            IndicatorKind::Ema5 => "EMA_5",
            IndicatorKind::Ema10 => "EMA_10",
            IndicatorKind::Ema13 => "EMA_13",
            IndicatorKind::Ema20 => "EMA_20",
            IndicatorKind::Ema30 => "EMA_30",
            IndicatorKind::Ema50 => "EMA_50",
            IndicatorKind::Ema100 => "EMA_100",
            IndicatorKind::Ema200 => "EMA_200",
            IndicatorKind::Vwma20 => "VWMA_20",
            IndicatorKind::HullMa9 => "Hull_MA_9",
            IndicatorKind::Rsi14 => "RSI_14",
            IndicatorKind::StochK => "Stoch_K",
            IndicatorKind::StochD => "Stoch_D",
            IndicatorKind::Cci20 => "CCI_20",
            IndicatorKind::Adx14 => "ADX_14",
            IndicatorKind::DiPlus => "DMI_Positive",
            IndicatorKind::DiMinus => "DMI_Negative",
            IndicatorKind::AwesomeOsc => "AO",
            IndicatorKind::Momentum10 => "Momentum_10",
            IndicatorKind::MacdLine => "MACD",
            IndicatorKind::MacdSignal => "MACD_Signal",
            IndicatorKind::MacdHist => "MACD_Hist",
            IndicatorKind::StochRsiK => "StochRSI_K",
            IndicatorKind::StochRsiD => "StochRSI_D",
            IndicatorKind::WilliamsR14 => "Williams_R",
            IndicatorKind::UltimateOsc => "UO",
            IndicatorKind::BullPower => "Bull_Power",
            IndicatorKind::BearPower => "Bear_Power",
            IndicatorKind::IchimokuTenkan => "Ichimoku_Conversion",
            IndicatorKind::IchimokuKijun => "Ichimoku_Base",
            IndicatorKind::IchimokuSenkouA => "Ichimoku_A",
            IndicatorKind::IchimokuSenkouB => "Ichimoku_B",
            IndicatorKind::IchimokuChikou => "Ichimoku_Chikou",
        }
    }
}
