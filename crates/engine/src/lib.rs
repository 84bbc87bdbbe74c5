//! Recommendation engine for the movie detail page.
//!
//! This crate contains the aggregator that composes the upstream sources
//! and the filtering pipeline into the final "Recommended Movies" list.

pub mod aggregator;

pub use aggregator::{
    Backfill, DEFAULT_CALL_TIMEOUT, MAX_RECOMMENDATIONS, MIN_PRIMARY_RESULTS,
    RecommendationAggregator, RecommendationOutcome, RecommendationResult, Recommendations,
};
