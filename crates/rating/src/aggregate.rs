//! Signal aggregation into composite category ratings.

use chrono::NaiveDate;
use vela_types::{
    CategoryRating, CategoryRatings, CompositeLabel, Signal, SignalCategory, SignalClass,
    WeightedScores,
};

/// Net-score fraction above which a category leans Buy (mirrored for Sell).
pub const LEAN_CUT: f64 = 0.1;
/// Net-score fraction above which a category is a Strong Buy (mirrored).
pub const STRONG_CUT: f64 = 0.5;

/// Aggregates classified signals into the two category ratings.
///
/// Only signals actually present are counted, so indicators whose
/// lookback was unsatisfied never inflate the neutral column. `date` is
/// carried explicitly so an empty signal set still yields dated ratings.
#[must_use]
pub fn aggregate_ratings(signals: &[Signal], date: NaiveDate) -> CategoryRatings {
    CategoryRatings {
        oscillators: category_rating(signals, SignalCategory::Oscillator, date),
        moving_averages: category_rating(signals, SignalCategory::MovingAverage, date),
    }
}

fn category_rating(signals: &[Signal], category: SignalCategory, date: NaiveDate) -> CategoryRating {
    let mut buy_count = 0;
    let mut sell_count = 0;
    let mut neutral_count = 0;

    for signal in signals.iter().filter(|s| s.kind.category() == category) {
        match signal.class {
            SignalClass::Buy => buy_count += 1,
            SignalClass::Sell => sell_count += 1,
            SignalClass::Neutral => neutral_count += 1,
        }
    }

    CategoryRating {
        date,
        category,
        buy_count,
        sell_count,
        neutral_count,
        label: label_for(buy_count, sell_count, buy_count + sell_count + neutral_count),
    }
}

/// Maps the buy/sell balance onto the five-step composite label.
///
/// `score = (buy - sell) / counted`, cut symmetrically at
/// [`LEAN_CUT`] and [`STRONG_CUT`]; an empty category is Neutral.
fn label_for(buy_count: usize, sell_count: usize, counted: usize) -> CompositeLabel {
    if counted == 0 {
        return CompositeLabel::Neutral;
    }

    let score = (buy_count as f64 - sell_count as f64) / counted as f64;
    if score >= STRONG_CUT {
        CompositeLabel::StrongBuy
    } else if score >= LEAN_CUT {
        CompositeLabel::Buy
    } else if score <= -STRONG_CUT {
        CompositeLabel::StrongSell
    } else if score <= -LEAN_CUT {
        CompositeLabel::Sell
    } else {
        CompositeLabel::Neutral
    }
}

/// Weighted summary scores: oscillator buys count double.
#[must_use]
pub fn weighted_scores(ratings: &CategoryRatings) -> WeightedScores {
    let osc_buy = ratings.oscillators.buy_count as i64;
    let osc_sell = ratings.oscillators.sell_count as i64;
    let ma_buy = ratings.moving_averages.buy_count as i64;
    let ma_sell = ratings.moving_averages.sell_count as i64;

    WeightedScores {
        trend: 2 * osc_buy - osc_sell + ma_buy - ma_sell,
        momentum: 2 * osc_buy + ma_buy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_types::SignalKind;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    fn signal(kind: SignalKind, class: SignalClass) -> Signal {
        Signal {
            kind,
            date: date(),
            class,
        }
    }

    #[test]
    fn test_counts_split_by_category() {
        let signals = vec![
            signal(SignalKind::Rsi, SignalClass::Buy),
            signal(SignalKind::Macd, SignalClass::Buy),
            signal(SignalKind::Cci, SignalClass::Sell),
            signal(SignalKind::Sma10, SignalClass::Buy),
            signal(SignalKind::Ema20, SignalClass::Neutral),
        ];

        let ratings = aggregate_ratings(&signals, date());

        assert_eq!(ratings.oscillators.buy_count, 2);
        assert_eq!(ratings.oscillators.sell_count, 1);
        assert_eq!(ratings.oscillators.neutral_count, 0);
        assert_eq!(ratings.moving_averages.buy_count, 1);
        assert_eq!(ratings.moving_averages.neutral_count, 1);
        assert_eq!(ratings.oscillators.counted(), 3);
        assert_eq!(ratings.moving_averages.counted(), 2);
    }

    #[test]
    fn test_empty_category_is_neutral() {
        let ratings = aggregate_ratings(&[], date());
        assert_eq!(ratings.oscillators.label, CompositeLabel::Neutral);
        assert_eq!(ratings.oscillators.counted(), 0);
    }

    #[test]
    fn test_label_cut_points() {
        // 6 buys, 0 sells, 5 neutral: score 6/11 >= 0.5
        assert_eq!(label_for(6, 0, 11), CompositeLabel::StrongBuy);
        // 3 buys, 1 sell, 7 neutral: score 2/11
        assert_eq!(label_for(3, 1, 11), CompositeLabel::Buy);
        // Balanced
        assert_eq!(label_for(2, 2, 11), CompositeLabel::Neutral);
        // Mirror image
        assert_eq!(label_for(1, 3, 11), CompositeLabel::Sell);
        assert_eq!(label_for(0, 6, 11), CompositeLabel::StrongSell);
    }

    #[test]
    fn test_label_boundaries_are_inclusive() {
        // Exactly at the strong cut: 5/10 = 0.5
        assert_eq!(label_for(5, 0, 10), CompositeLabel::StrongBuy);
        // Exactly at the lean cut: 1/10 = 0.1
        assert_eq!(label_for(1, 0, 10), CompositeLabel::Buy);
    }

    #[test]
    fn test_weighted_scores() {
        let signals = vec![
            signal(SignalKind::Rsi, SignalClass::Buy),
            signal(SignalKind::Macd, SignalClass::Buy),
            signal(SignalKind::Cci, SignalClass::Sell),
            signal(SignalKind::Sma10, SignalClass::Buy),
            signal(SignalKind::Sma20, SignalClass::Sell),
        ];
        let ratings = aggregate_ratings(&signals, date());

        let scores = weighted_scores(&ratings);
        // 2*2 - 1 + 1 - 1 = 3; 2*2 + 1 = 5
        assert_eq!(scores.trend, 3);
        assert_eq!(scores.momentum, 5);
    }
}
