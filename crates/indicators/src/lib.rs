//! Vela Indicators
//!
//! Technical indicator engine for the Vela analysis system.
//! Computes the fixed indicator catalogue over a validated daily series
//! and exposes strongly-typed per-day snapshots.
//!
//! # Features
//! - Indicator traits with full-series computation (NaN before warmup)
//! - Multi-output indicators (MACD, Stochastic, DMI, Ichimoku, ...)
//! - Fixed enumerated catalogue with per-kind lookback, category scale
//!   multipliers, and documented value ranges
//! - One-pass [`IndicatorTable`] shared by all per-day snapshots
//!
//! # Catalogue
//! - Moving averages: SMA/EMA families, VWMA, Hull MA
//! - Oscillators: RSI, Stochastic, CCI, ADX/DMI, Awesome Oscillator,
//!   Momentum, MACD, StochRSI, Williams %R, Bull/Bear Power, Ultimate
//!   Oscillator
//! - Ichimoku Cloud (9, 26, 52, 26) with displaced Senkou spans

#![deny(clippy::all)]

pub mod catalogue;
pub mod error;
pub mod impl_;
pub mod strength;
pub mod table;
pub mod traits;

// Re-export main types
pub use catalogue::IndicatorKind;
pub use error::IndicatorError;
pub use strength::{StrengthSnapshot, strength_snapshot};
pub use table::{IndicatorSet, IndicatorTable, IndicatorValue, compute_indicators};
pub use traits::{Indicator, MultiOutputIndicator};

// Re-export indicator implementations
pub use impl_::{
    awesome::AwesomeOscillator,
    cci::Cci,
    dmi::{Dmi, DmiResult},
    elder_ray::{ElderRay, ElderRayResult},
    ema::Ema,
    ichimoku::{Ichimoku, IchimokuResult},
    macd::{Macd, MacdResult},
    momentum::Momentum,
    rsi::Rsi,
    sma::Sma,
    stoch_rsi::{StochRsi, StochRsiResult},
    stochastic::{Stochastic, StochasticResult},
    ultimate::UltimateOscillator,
    vwma::Vwma,
    williams_r::WilliamsR,
    wma::{HullMa, Wma},
};
