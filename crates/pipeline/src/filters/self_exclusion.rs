//! Filter to keep a movie out of its own recommendations.

use crate::traits::{Filter, FilterContext};
use anyhow::Result;
use movie_data::MovieSummary;

/// Removes the movie identified by `FilterContext::movie_id`.
pub struct SelfExclusionFilter;

impl Filter for SelfExclusionFilter {
    fn name(&self) -> &str {
        "SelfExclusionFilter"
    }

    fn apply(&self, movies: Vec<MovieSummary>, context: &FilterContext) -> Result<Vec<MovieSummary>> {
        Ok(movies
            .into_iter()
            .filter(|movie| movie.id != context.movie_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_every_copy_of_self() {
        let movies = vec![
            MovieSummary::new(603, "The Matrix"),
            MovieSummary::new(604, "The Matrix Reloaded"),
            MovieSummary::new(603, "The Matrix"),
        ];

        let filtered = SelfExclusionFilter
            .apply(movies, &FilterContext::new(603))
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 604);
    }
}
