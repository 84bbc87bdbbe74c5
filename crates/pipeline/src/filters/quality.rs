//! Filter to ensure minimum quality threshold.
//!
//! Removes movies with low average votes, too few votes, or no poster,
//! ensuring we only recommend titles people have actually rated well.

use crate::thresholds::QualityThreshold;
use crate::traits::{Filter, FilterContext};
use anyhow::Result;
use movie_data::MovieSummary;

/// Removes movies below a quality threshold.
///
/// ## Algorithm
/// For each movie:
/// 1. Check vote_average >= min_vote_average
/// 2. Check vote_count >= min_vote_count
/// 3. Check a poster is present (if required)
/// 4. Keep only if all conditions met
pub struct QualityFilter {
    threshold: QualityThreshold,
}

impl QualityFilter {
    /// Create a new QualityFilter.
    ///
    /// # Arguments
    /// * `threshold` - Usually one of the `QualityThreshold` constants
    pub fn new(threshold: QualityThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> QualityThreshold {
        self.threshold
    }
}

impl Filter for QualityFilter {
    fn name(&self) -> &str {
        "QualityFilter"
    }

    fn apply(&self, movies: Vec<MovieSummary>, _context: &FilterContext) -> Result<Vec<MovieSummary>> {
        let filtered: Vec<MovieSummary> = movies
            .into_iter()
            .filter(|movie| self.threshold.accepts(movie))
            .collect();

        Ok(filtered)
    }
}
