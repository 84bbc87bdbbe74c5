//! TMDB Source - `MovieSource` backed by the live TMDB API
//!
//! Maps each capability onto one endpoint:
//! - recommendations → `/movie/{id}/recommendations`
//! - similar → `/movie/{id}/similar`
//! - by genre → `/discover/movie?with_genres=...`
//!
//! Only the first page of each list is requested.

use async_trait::async_trait;
use movie_data::{GenreQuery, MovieId, MovieSummary};
use tmdb_client::{TmdbClient, TmdbError};
use tracing::{debug, instrument};

use crate::traits::MovieSource;
use crate::types::TransportError;

/// TMDB source wraps a shared client
#[derive(Debug, Clone)]
pub struct TmdbSource {
    client: TmdbClient,

    /// Discover page to request (default: 1)
    discover_page: u32,
}

impl TmdbSource {
    /// Create a new TMDB source
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            discover_page: 1,
        }
    }

    /// Configure which discover page to request (default: 1)
    pub fn with_discover_page(mut self, page: u32) -> Self {
        self.discover_page = page.max(1);
        self
    }

    fn transport_error(&self, err: TmdbError) -> TransportError {
        match err {
            TmdbError::Timeout { .. } => {
                TransportError::Timeout(self.client.config().request_timeout)
            }
            TmdbError::Status { status, .. } => TransportError::Status(status),
            TmdbError::Malformed(parse) => TransportError::Malformed(parse.to_string()),
            other => TransportError::Network(other.to_string()),
        }
    }
}

#[async_trait]
impl MovieSource for TmdbSource {
    fn name(&self) -> &str {
        "TmdbSource"
    }

    #[instrument(skip(self))]
    async fn fetch_recommendations(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<MovieSummary>, TransportError> {
        let movies = self
            .client
            .recommendations(movie_id)
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!("Fetched {} recommendations for movie {}", movies.len(), movie_id);
        Ok(movies)
    }

    #[instrument(skip(self))]
    async fn fetch_similar(&self, movie_id: MovieId) -> Result<Vec<MovieSummary>, TransportError> {
        let movies = self
            .client
            .similar_movies(movie_id)
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!("Fetched {} similar movies for movie {}", movies.len(), movie_id);
        Ok(movies)
    }

    #[instrument(skip(self))]
    async fn fetch_by_genre(
        &self,
        query: &GenreQuery,
    ) -> Result<Vec<MovieSummary>, TransportError> {
        let movies = self
            .client
            .discover_by_genre(query, self.discover_page)
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!("Fetched {} movies for genre {}", movies.len(), query.genre_id);
        Ok(movies)
    }
}
