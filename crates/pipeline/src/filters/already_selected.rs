//! Filter to remove movies an earlier stage already picked.
//!
//! Used when backfilling a short list, so the same title cannot
//! appear twice in one result.

use crate::traits::{Filter, FilterContext};
use anyhow::Result;
use movie_data::MovieSummary;

/// Removes movies whose id is in `FilterContext::already_selected`.
///
/// ## Algorithm
/// Uses the HashSet in FilterContext.already_selected for O(1) lookups.
pub struct AlreadySelectedFilter;

impl Filter for AlreadySelectedFilter {
    fn name(&self) -> &str {
        "AlreadySelectedFilter"
    }

    fn apply(&self, movies: Vec<MovieSummary>, context: &FilterContext) -> Result<Vec<MovieSummary>> {
        let filtered: Vec<MovieSummary> = movies
            .into_iter()
            .filter(|movie| !context.already_selected.contains(&movie.id))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_selected_filter() {
        let picked = vec![MovieSummary::new(100, "A"), MovieSummary::new(200, "B")];
        let context = FilterContext::new(1).with_selected(&picked);

        let movies = vec![
            MovieSummary::new(100, "A"),
            MovieSummary::new(101, "C"),
            MovieSummary::new(200, "B"),
            MovieSummary::new(300, "D"),
        ];

        let filter = AlreadySelectedFilter;
        let filtered = filter.apply(movies, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 101);
        assert_eq!(filtered[1].id, 300);
    }

    #[test]
    fn test_nothing_selected_keeps_everything() {
        let movies = vec![MovieSummary::new(1, "A"), MovieSummary::new(2, "B")];
        let filtered = AlreadySelectedFilter
            .apply(movies, &FilterContext::new(9))
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
