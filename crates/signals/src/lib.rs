//! Vela Signals
//!
//! Maps indicator snapshots into ternary trading signals.
//! One explicit rule per signal-bearing indicator; rules that compare
//! against the previous day receive the prior snapshot as well.
//!
//! Null handling follows the engine contract: an absent primary value
//! produces no signal at all (the indicator is excluded from counting),
//! while a present primary with missing co-inputs collapses to Neutral.

#![deny(clippy::all)]

pub mod classifier;
pub mod rules;

pub use classifier::{classify_signals, evaluate};
