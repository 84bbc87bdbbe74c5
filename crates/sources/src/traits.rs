//! The data-retrieval capabilities the recommendation engine depends on.

use async_trait::async_trait;
use movie_data::{GenreQuery, MovieId, MovieSummary};

use crate::types::TransportError;

/// Upstream movie lists, treated as black-box collaborators.
///
/// ## Design Note
/// - `Send + Sync` so one source can serve many concurrent aggregations
/// - Each method returns the provider's list in the provider's order; quality
///   filtering is the caller's job
/// - Pagination, authentication and transport are the implementor's concern
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Movies recommended for `movie_id`
    async fn fetch_recommendations(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<MovieSummary>, TransportError>;

    /// Movies similar to `movie_id`
    async fn fetch_similar(&self, movie_id: MovieId) -> Result<Vec<MovieSummary>, TransportError>;

    /// Movies in a genre, sorted and pre-filtered server-side per `query`
    async fn fetch_by_genre(
        &self,
        query: &GenreQuery,
    ) -> Result<Vec<MovieSummary>, TransportError>;
}
