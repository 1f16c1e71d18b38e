//! Business logic services
//!
//! Pure functions over domain models. These services have no I/O
//! dependencies and keep no state between calls - they operate on data
//! passed in and return results.
//!
//! - [`scorer`] - Score assignment maps into risk reports
//! - [`recommender`] - Derive prioritized recommendations from a report

pub mod recommender;
pub mod scorer;

pub use recommender::{UNKNOWN_ROLE, recommend};
pub use scorer::{OVERLOAD_THRESHOLD, score_assignments, score_scenarios};
