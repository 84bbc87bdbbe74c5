//! Query parameters for genre-based discovery.

use crate::types::GenreId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side ordering for discovery results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    PopularityDesc,
}

impl SortOrder {
    /// The provider's `sort_by` value
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::PopularityDesc => "popularity.desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// A discover-by-genre request with server-side vote filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreQuery {
    pub genre_id: GenreId,
    pub sort: SortOrder,
    pub min_vote_average: f32,
    pub min_vote_count: u32,
}

impl GenreQuery {
    /// Popular titles in `genre_id` with at least 6.0 average over 100 votes.
    pub fn popular_in(genre_id: GenreId) -> Self {
        Self {
            genre_id,
            sort: SortOrder::PopularityDesc,
            min_vote_average: 6.0,
            min_vote_count: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_in_defaults() {
        let query = GenreQuery::popular_in(878);
        assert_eq!(query.genre_id, 878);
        assert_eq!(query.sort, SortOrder::PopularityDesc);
        assert_eq!(query.min_vote_average, 6.0);
        assert_eq!(query.min_vote_count, 100);
    }

    #[test]
    fn test_sort_order_param() {
        assert_eq!(SortOrder::PopularityDesc.to_string(), "popularity.desc");
        assert_eq!(SortOrder::PopularityDesc.as_param(), "popularity.desc");
    }
}
