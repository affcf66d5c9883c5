//! Vela Types
//!
//! Core data structures for the Vela technical-analysis engine.
//! This crate provides types for daily price bars, ternary trading
//! signals, and composite category ratings.

#![deny(clippy::all)]

pub mod bar;
pub mod rating;
pub mod signal;

// Re-export main types for convenience
pub use bar::PriceBar;
pub use rating::{
    CategoryRating, CategoryRatings, CompositeLabel, PanelEntry, RatingPanel, WeightedScores,
};
pub use signal::{Signal, SignalCategory, SignalClass, SignalKind};
