//! HTTP client for the TMDB v3 REST API.
//!
//! This crate provides a thin async client over the endpoints the discovery
//! client needs. It handles:
//! - Building requests (base URL, `api_key` and `language` query parameters)
//! - Per-request timeouts
//! - Mapping transport failures, non-2xx statuses and bad bodies to `TmdbError`
//! - Decoding bodies with `movie_data::parser`

pub mod config;

pub use config::TmdbConfig;

use movie_data::parser;
use movie_data::{Credits, GenreQuery, MovieDetails, MovieId, MovieSummary, Page, ParseError};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Errors that can occur when talking to TMDB
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("TMDB_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid TMDB configuration: {0}")]
    InvalidConfig(String),

    #[error("Request to {path} failed: {message}")]
    Network { path: String, message: String },

    #[error("Request to {path} timed out")]
    Timeout { path: String },

    #[error("TMDB returned {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("Malformed response: {0}")]
    Malformed(#[from] ParseError),
}

/// Client for the TMDB API.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool internally.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Build a client from an explicit config.
    pub fn new(config: TmdbConfig) -> Result<Self, TmdbError> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TmdbError::InvalidConfig(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build a client from `TMDB_*` environment variables.
    pub fn from_env() -> Result<Self, TmdbError> {
        Self::new(TmdbConfig::from_env()?)
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// GET `path` and return the body of a 2xx response.
    async fn get_text(&self, path: &str, params: &[(&str, String)]) -> Result<String, TmdbError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(path = %path, "TMDB request");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("TMDB returned {} for {}", status, path);
            return Err(TmdbError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport_error(path, e))
    }

    /// Popular movies, one page at a time (pages start at 1)
    #[instrument(skip(self))]
    pub async fn popular_movies(&self, page: u32) -> Result<Page<MovieSummary>, TmdbError> {
        let body = self
            .get_text("/movie/popular", &[("page", page.to_string())])
            .await?;
        Ok(parser::parse_movie_page(&body)?)
    }

    /// Title search. A blank query yields an empty page without a request.
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<Page<MovieSummary>, TmdbError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Page::empty());
        }
        let body = self
            .get_text(
                "/search/movie",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;
        Ok(parser::parse_movie_page(&body)?)
    }

    /// Movie details with credits appended in the same request
    #[instrument(skip(self))]
    pub async fn movie_details(&self, movie_id: MovieId) -> Result<MovieDetails, TmdbError> {
        let body = self
            .get_text(
                &format!("/movie/{movie_id}"),
                &[("append_to_response", "credits".to_string())],
            )
            .await?;
        Ok(parser::parse_movie_details(&body)?)
    }

    #[instrument(skip(self))]
    pub async fn movie_credits(&self, movie_id: MovieId) -> Result<Credits, TmdbError> {
        let body = self.get_text(&format!("/movie/{movie_id}/credits"), &[]).await?;
        Ok(parser::parse_credits(&body)?)
    }

    /// First page of `/movie/{id}/recommendations`, in provider order
    #[instrument(skip(self))]
    pub async fn recommendations(&self, movie_id: MovieId) -> Result<Vec<MovieSummary>, TmdbError> {
        let body = self
            .get_text(&format!("/movie/{movie_id}/recommendations"), &[])
            .await?;
        Ok(parser::parse_movie_list(&body)?)
    }

    /// First page of `/movie/{id}/similar`, in provider order
    #[instrument(skip(self))]
    pub async fn similar_movies(&self, movie_id: MovieId) -> Result<Vec<MovieSummary>, TmdbError> {
        let body = self
            .get_text(&format!("/movie/{movie_id}/similar"), &[])
            .await?;
        Ok(parser::parse_movie_list(&body)?)
    }

    /// `/discover/movie` restricted to one genre, with server-side vote floors
    #[instrument(skip(self))]
    pub async fn discover_by_genre(
        &self,
        query: &GenreQuery,
        page: u32,
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        let params = [
            ("with_genres", query.genre_id.to_string()),
            ("sort_by", query.sort.as_param().to_string()),
            ("vote_average.gte", query.min_vote_average.to_string()),
            ("vote_count.gte", query.min_vote_count.to_string()),
            ("page", page.to_string()),
        ];
        let body = self.get_text("/discover/movie", &params).await?;
        Ok(parser::parse_movie_list(&body)?)
    }
}

fn transport_error(path: &str, err: reqwest::Error) -> TmdbError {
    if err.is_timeout() {
        error!("TMDB request to {} timed out", path);
        TmdbError::Timeout {
            path: path.to_string(),
        }
    } else {
        error!("TMDB request to {} failed: {}", path, err);
        TmdbError::Network {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
