//! Integration tests for the historical rating engine.
//!
//! Covers the cross-day consistency law, the category count invariant,
//! end-to-end classification coherence, and batch failure isolation.

use chrono::NaiveDate;
use proptest::prelude::*;
use vela_data::PriceSeries;
use vela_indicators::{compute_indicators, IndicatorKind};
use vela_rating::{aggregate_ratings, analyze_batch, analyze_symbol, compute_rating_panel, RatingError};
use vela_signals::classify_signals;
use vela_types::{PriceBar, SignalCategory, SignalClass, SignalKind};

fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap() + chrono::Days::new(offset as u64)
}

fn bar(i: usize, close: f64) -> PriceBar {
    PriceBar {
        date: day(i),
        open: close,
        high: close + 1.2,
        low: close - 1.2,
        close,
        volume: 50_000.0 + (i % 5) as f64 * 1_000.0,
    }
}

fn wavy_series(symbol: &str, n: usize) -> PriceSeries {
    let bars: Vec<PriceBar> = (0..n)
        .map(|i| bar(i, 100.0 + (i as f64 * 0.37).sin() * 7.0 + i as f64 * 0.04))
        .collect();
    PriceSeries::new(symbol, bars).unwrap()
}

fn rising_series(symbol: &str, n: usize) -> PriceSeries {
    let bars: Vec<PriceBar> = (0..n).map(|i| bar(i, 100.0 + 1.5 * i as f64)).collect();
    PriceSeries::new(symbol, bars).unwrap()
}

#[test]
fn test_consistency_law_across_all_anchors() {
    let series = wavy_series("AAA", 90);

    for n in 40..90 {
        let back_view = compute_rating_panel(&series, day(n), &[-1]).unwrap();
        let current_view = compute_rating_panel(&series, day(n - 1), &[0]).unwrap();

        let back = back_view.entry_at(-1).unwrap();
        let current = current_view.entry_at(0).unwrap();

        assert_eq!(back.date, current.date, "dates diverge at anchor {n}");
        assert_eq!(
            back.ratings, current.ratings,
            "ratings diverge at anchor {n}"
        );
    }
}

#[test]
fn test_panel_offsets_resolve_by_index_not_calendar() {
    // Trading days with a weekend-like gap: 0, 1, 2, 5, 6
    let closes = [100.0, 101.0, 102.0, 103.0, 104.0];
    let offsets = [0usize, 1, 2, 5, 6];
    let bars: Vec<PriceBar> = closes
        .iter()
        .zip(offsets.iter())
        .map(|(&c, &o)| bar(o, c))
        .collect();
    let series = PriceSeries::new("GAP", bars).unwrap();

    let panel = compute_rating_panel(&series, day(6), &[0, -1, -2]).unwrap();

    // -1 steps over the calendar gap to the previous trading day
    assert_eq!(panel.entry_at(0).unwrap().date, day(6));
    assert_eq!(panel.entry_at(-1).unwrap().date, day(5));
    assert_eq!(panel.entry_at(-2).unwrap().date, day(2));
}

#[test]
fn test_anchor_on_non_trading_day_resolves_backwards() {
    let bars = vec![bar(0, 100.0), bar(1, 101.0), bar(4, 102.0)];
    let series = PriceSeries::new("HOL", bars).unwrap();

    let panel = compute_rating_panel(&series, day(3), &[0]).unwrap();
    assert_eq!(panel.entry_at(0).unwrap().date, day(1));
}

#[test]
fn test_underflowing_offsets_are_skipped() {
    let series = wavy_series("SHORT", 30);

    let panel = compute_rating_panel(&series, day(29), &[0, -1, -50]).unwrap();

    assert_eq!(panel.entries.len(), 2);
    assert!(panel.entry_at(-50).is_none());
}

#[test]
fn test_positive_offset_is_rejected() {
    let series = wavy_series("FUT", 30);

    let err = compute_rating_panel(&series, day(29), &[0, 1]).unwrap_err();
    assert!(matches!(err, RatingError::PositiveOffset(1)));
}

#[test]
fn test_anchor_before_history_errors() {
    let bars: Vec<PriceBar> = (5..30).map(|i| bar(i, 100.0)).collect();
    let series = PriceSeries::new("LATE", bars).unwrap();

    let err = compute_rating_panel(&series, day(2), &[0]).unwrap_err();
    assert!(matches!(err, RatingError::AnchorNotFound { .. }));
}

#[test]
fn test_category_counts_match_produced_signals() {
    let series = wavy_series("CNT", 250);

    for index in [20, 60, 120, 249] {
        let current = compute_indicators(&series, index).unwrap();
        let previous = compute_indicators(&series, index - 1).unwrap();
        let signals = classify_signals(&current, Some(&previous));
        let ratings = aggregate_ratings(&signals, current.date());

        let oscillators = signals
            .iter()
            .filter(|s| s.kind.category() == SignalCategory::Oscillator)
            .count();
        let moving_averages = signals.len() - oscillators;

        assert_eq!(ratings.oscillators.counted(), oscillators);
        assert_eq!(ratings.moving_averages.counted(), moving_averages);
    }
}

#[test]
fn test_end_to_end_oscillator_verdicts_cohere() {
    // A sustained rally: RSI pinned above 70, MACD line above its signal
    let series = rising_series("UP", 300);
    let index = 299;

    let current = compute_indicators(&series, index).unwrap();
    let previous = compute_indicators(&series, index - 1).unwrap();

    let rsi = current.get(IndicatorKind::Rsi14).unwrap();
    assert!(rsi > 70.0);

    let signals = classify_signals(&current, Some(&previous));
    let class_of = |kind: SignalKind| signals.iter().find(|s| s.kind == kind).unwrap().class;

    assert_eq!(class_of(SignalKind::Rsi), SignalClass::Sell);

    let line = current.get(IndicatorKind::MacdLine).unwrap();
    let macd_signal = current.get(IndicatorKind::MacdSignal).unwrap();
    assert!(line > macd_signal);
    assert_eq!(class_of(SignalKind::Macd), SignalClass::Buy);

    // Every MA sits below the rising close
    for kind in [SignalKind::Sma200, SignalKind::Ema200, SignalKind::Vwma] {
        assert_eq!(class_of(kind), SignalClass::Buy);
    }

    // The counts reflect exactly these verdicts
    let ratings = aggregate_ratings(&signals, current.date());
    let osc_buys = signals
        .iter()
        .filter(|s| {
            s.kind.category() == SignalCategory::Oscillator && s.class == SignalClass::Buy
        })
        .count();
    assert_eq!(ratings.oscillators.buy_count, osc_buys);
}

#[test]
fn test_ichimoku_needs_displaced_span_history() {
    // 60 bars: Tenkan/Kijun/Span A defined, Span B (78 bars) not yet
    let series = rising_series("ICH", 60);
    let current = compute_indicators(&series, 59).unwrap();

    assert!(current.contains(IndicatorKind::IchimokuTenkan));
    assert!(current.contains(IndicatorKind::IchimokuSenkouA));
    assert!(!current.contains(IndicatorKind::IchimokuSenkouB));

    let signals = classify_signals(&current, None);
    let ichimoku = signals
        .iter()
        .find(|s| s.kind == SignalKind::Ichimoku)
        .unwrap();
    assert_eq!(ichimoku.class, SignalClass::Neutral);
}

#[test]
fn test_ichimoku_bullish_stack_in_long_rally() {
    let series = rising_series("ICH2", 150);
    let current = compute_indicators(&series, 149).unwrap();

    let signals = classify_signals(&current, None);
    let ichimoku = signals
        .iter()
        .find(|s| s.kind == SignalKind::Ichimoku)
        .unwrap();
    assert_eq!(ichimoku.class, SignalClass::Buy);
}

#[test]
fn test_report_carries_price_and_scores() {
    let series = wavy_series("REP", 250);

    let report = analyze_symbol(&series, day(249), &[0, -1, -2]).unwrap();

    assert_eq!(report.symbol, "REP");
    assert_eq!(report.date, day(249));
    assert_eq!(report.panel.entries.len(), 3);
    assert!(report.percent_change.is_some());
    assert!(report.strength.long_term.is_some());

    // Scores recompute from the anchor entry's counts
    let entry = report.panel.entry_at(0).unwrap();
    let expected_momentum = 2 * entry.ratings.oscillators.buy_count as i64
        + entry.ratings.moving_averages.buy_count as i64;
    assert_eq!(report.scores.momentum, expected_momentum);
}

#[test]
fn test_batch_isolates_per_symbol_failures() {
    let good = wavy_series("GOOD", 120);
    // This series starts long after the anchor below
    let late_bars: Vec<PriceBar> = (200..260).map(|i| bar(i, 50.0)).collect();
    let late = PriceSeries::new("LATE", late_bars).unwrap();
    let also_good = rising_series("ALSO", 120);

    let outcomes = analyze_batch(&[good, late, also_good], day(119), &[0, -1]);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].symbol, "GOOD");
    assert!(outcomes[0].result.is_ok());
    assert_eq!(outcomes[1].symbol, "LATE");
    assert!(matches!(
        outcomes[1].result,
        Err(RatingError::AnchorNotFound { .. })
    ));
    assert_eq!(outcomes[2].symbol, "ALSO");
    assert!(outcomes[2].result.is_ok());
}

#[test]
fn test_report_serializes_for_export_layers() {
    let series = wavy_series("EXP", 250);

    let report = analyze_symbol(&series, day(249), &[0, -1]).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let deserialized: vela_rating::SymbolReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, deserialized);
}

#[test]
fn test_panel_is_deterministic() {
    let series = wavy_series("DET", 200);

    let first = compute_rating_panel(&series, day(199), &[0, -1, -2]).unwrap();
    let second = compute_rating_panel(&series, day(199), &[0, -1, -2]).unwrap();

    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_consistency_law_on_random_walks(
        steps in prop::collection::vec(-2.0f64..2.0, 70),
        anchor in 45usize..69,
    ) {
        let mut close = 100.0;
        let bars: Vec<PriceBar> = steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                close = (close + step).max(5.0);
                bar(i, close)
            })
            .collect();
        let series = PriceSeries::new("PROP", bars).unwrap();

        let back_view = compute_rating_panel(&series, day(anchor), &[-1]).unwrap();
        let current_view = compute_rating_panel(&series, day(anchor - 1), &[0]).unwrap();

        let back = back_view.entry_at(-1).unwrap();
        let current = current_view.entry_at(0).unwrap();
        prop_assert_eq!(back.date, current.date);
        prop_assert_eq!(back.ratings, current.ratings);
    }
}
