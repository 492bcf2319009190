//! The attendance aggregation engine: pure, synchronous, no I/O.
//!
//! Pipeline: resolve the eligible window, reconcile it day by day against
//! the stored reports, aggregate per month, then roll months up into year
//! and fleet summaries.

pub mod calendar;
pub mod monthly;
pub mod range;
pub mod reconcile;
pub mod timeavg;
pub mod yearly;
