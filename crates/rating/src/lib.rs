//! Vela Rating
//!
//! Aggregates classified signals into composite category ratings,
//! reproduces those ratings for prior trading days, and orchestrates
//! per-symbol analysis across a batch.
//!
//! The historical engine keys every anchor-offset run off one shared
//! indicator table over one immutable series snapshot, which makes the
//! "-1 day" view of today identical to the "current" view of yesterday
//! by construction.

#![deny(clippy::all)]

pub mod aggregate;
pub mod batch;
pub mod error;
pub mod panel;

// Re-export main entry points
pub use aggregate::{aggregate_ratings, weighted_scores, LEAN_CUT, STRONG_CUT};
pub use batch::{analyze_batch, analyze_symbol, BatchOutcome, SymbolReport};
pub use error::RatingError;
pub use panel::compute_rating_panel;
