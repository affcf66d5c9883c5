use chrono::NaiveDate;

/// One daily OHLCV bar.
///
/// `date` is the trading day; per-symbol sequences are ordered ascending
/// with unique dates. Bars are immutable once ingested.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PriceBar {
    /// Trading day (calendar date, no time-of-day component)
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume (non-negative)
    pub volume: f64,
}
