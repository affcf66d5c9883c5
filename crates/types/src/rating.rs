//! Composite rating types produced by the aggregation and panel layers.

use crate::signal::SignalCategory;
use chrono::NaiveDate;

/// Composite strength label for one category on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeLabel {
    /// Sell signals dominate strongly
    StrongSell,
    /// Sell signals lead
    Sell,
    /// Balanced, or nothing counted
    Neutral,
    /// Buy signals lead
    Buy,
    /// Buy signals dominate strongly
    StrongBuy,
}

/// Aggregated signal counts and composite label for one category.
///
/// Invariant: `buy_count + sell_count + neutral_count` equals the number
/// of indicators in the category that produced a signal on `date`
/// (indicators without a defined value are excluded, not counted neutral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryRating {
    /// Trading day the rating applies to
    pub date: NaiveDate,
    /// Category the counts cover
    pub category: SignalCategory,
    /// Number of Buy verdicts
    pub buy_count: usize,
    /// Number of Sell verdicts
    pub sell_count: usize,
    /// Number of Neutral verdicts
    pub neutral_count: usize,
    /// Composite label derived from the counts
    pub label: CompositeLabel,
}

impl CategoryRating {
    /// Total number of signals counted in this category.
    #[must_use]
    pub fn counted(&self) -> usize {
        self.buy_count + self.sell_count + self.neutral_count
    }
}

/// The two category ratings for one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryRatings {
    /// Oscillator category
    pub oscillators: CategoryRating,
    /// Moving-average category
    pub moving_averages: CategoryRating,
}

/// Weighted summary scores derived from the category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeightedScores {
    /// `2*osc_buy - osc_sell + ma_buy - ma_sell`
    pub trend: i64,
    /// `2*osc_buy + ma_buy`
    pub momentum: i64,
}

/// One anchor-offset row of a rating panel.
///
/// Produced transiently by the historical rating engine; never mutated
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelEntry {
    /// Trading-day offset from the anchor (0 = anchor day, -1 = one day back)
    pub offset: i32,
    /// Trading day this entry resolves to
    pub date: NaiveDate,
    /// Ratings for both categories on that day
    pub ratings: CategoryRatings,
}

/// Ratings for one symbol across a set of anchor offsets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatingPanel {
    /// Symbol the panel was computed for
    pub symbol: String,
    /// Requested anchor date (entries resolve to trading days at or before it)
    pub anchor_date: NaiveDate,
    /// Entries ordered by offset, anchor day first
    pub entries: Vec<PanelEntry>,
}

impl RatingPanel {
    /// Returns the entry for a given offset, if it was computable.
    #[must_use]
    pub fn entry_at(&self, offset: i32) -> Option<&PanelEntry> {
        self.entries.iter().find(|e| e.offset == offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(category: SignalCategory) -> CategoryRating {
        CategoryRating {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            category,
            buy_count: 4,
            sell_count: 2,
            neutral_count: 5,
            label: CompositeLabel::Buy,
        }
    }

    #[test]
    fn test_counted_sums_all_classes() {
        let r = rating(SignalCategory::Oscillator);
        assert_eq!(r.counted(), 11);
    }

    #[test]
    fn test_panel_entry_lookup() {
        let ratings = CategoryRatings {
            oscillators: rating(SignalCategory::Oscillator),
            moving_averages: rating(SignalCategory::MovingAverage),
        };
        let panel = RatingPanel {
            symbol: "VNM".to_string(),
            anchor_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            entries: vec![
                PanelEntry {
                    offset: 0,
                    date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                    ratings,
                },
                PanelEntry {
                    offset: -1,
                    date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
                    ratings,
                },
            ],
        };

        assert_eq!(panel.entry_at(0).unwrap().offset, 0);
        assert_eq!(
            panel.entry_at(-1).unwrap().date,
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
        );
        assert!(panel.entry_at(-2).is_none());
    }

    #[test]
    fn test_rating_serde_roundtrip() {
        let r = rating(SignalCategory::MovingAverage);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: CategoryRating = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
