//! # Recommendation Aggregator
//!
//! This module produces the "Recommended Movies" list for a movie by composing
//! three upstream sources with per-source quality filtering:
//! 1. Fetch recommendations for the movie
//! 2. Filter them (6.0 average, 100 votes, poster)
//! 3. If fewer than 4 survive, backfill from the movie's first genre
//!    (stricter bar: 6.5 average, 200 votes, poster)
//! 4. If step 1 failed outright, use similar movies instead
//!    (looser bar: 5.5 average, 50 votes, poster)
//! 5. Return at most 6 movies
//!
//! Every branch also drops the movie itself. The backfill additionally drops
//! anything already taken from the recommendations, so a title shared by both
//! lists appears once, in its recommendations position.
//!
//! Steps run strictly in sequence; each depends on the previous outcome.
//! Every upstream call is bounded by a timeout, and a timeout counts as a
//! failure of that call. The aggregator never returns an error: total
//! failure shows up as an empty list tagged `RecommendationOutcome::Unavailable`.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use movie_data::{GenreQuery, MovieDetails, MovieId, MovieSummary};
use pipeline::filters::{AlreadySelectedFilter, QualityFilter, SelfExclusionFilter};
use pipeline::{FilterContext, FilterPipeline, QualityThreshold};
use sources::{MovieSource, SourceKind, TransportError};

/// Upper bound on the length of any result
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Below this many primary results the list is backfilled by genre
pub const MIN_PRIMARY_RESULTS: usize = 4;

/// Default bound on each upstream call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Ordered recommendations, at most `MAX_RECOMMENDATIONS` long
pub type RecommendationResult = Vec<MovieSummary>;

/// What happened to the genre backfill step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backfill {
    /// Enough primary results; discovery was not consulted
    NotNeeded,
    /// The movie has no genres to discover by
    NoGenres,
    /// Discovery answered; this many movies were appended (may be 0)
    Added(usize),
    /// Discovery failed; the primary list is returned as is
    Failed,
}

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationOutcome {
    /// The recommendations source answered
    Primary { backfill: Backfill },
    /// Recommendations failed; similar movies answered
    Degraded,
    /// Every source consulted failed
    Unavailable,
}

/// A result together with how it was produced.
///
/// Lets callers tell "nothing qualified" apart from "nothing could be fetched".
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub movies: RecommendationResult,
    pub outcome: RecommendationOutcome,
}

impl Recommendations {
    fn unavailable() -> Self {
        Self {
            movies: Vec::new(),
            outcome: RecommendationOutcome::Unavailable,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// True when the primary source could not be used
    pub fn is_degraded(&self) -> bool {
        !matches!(self.outcome, RecommendationOutcome::Primary { .. })
    }
}

/// Composes recommendation, discovery and similar-movie sources into one list.
///
/// Holds no per-request state, so one aggregator can serve any number of
/// concurrent `recommend` calls.
pub struct RecommendationAggregator<S: MovieSource + ?Sized> {
    source: Arc<S>,
    primary_filters: Arc<FilterPipeline>,
    backfill_filters: Arc<FilterPipeline>,
    fallback_filters: Arc<FilterPipeline>,
    call_timeout: Duration,
}

impl<S: MovieSource + ?Sized> Clone for RecommendationAggregator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            primary_filters: Arc::clone(&self.primary_filters),
            backfill_filters: Arc::clone(&self.backfill_filters),
            fallback_filters: Arc::clone(&self.fallback_filters),
            call_timeout: self.call_timeout,
        }
    }
}

impl<S: MovieSource + ?Sized> RecommendationAggregator<S> {
    /// Create an aggregator over `source` with the standard thresholds
    ///
    /// 1. Recommendations: SelfExclusionFilter, QualityFilter(6.0 / 100 / poster)
    /// 2. Genre backfill: SelfExclusionFilter, AlreadySelectedFilter,
    ///    QualityFilter(6.5 / 200 / poster)
    /// 3. Similar fallback: SelfExclusionFilter, QualityFilter(5.5 / 50 / poster)
    pub fn new(source: Arc<S>) -> Self {
        let primary_filters = Arc::new(
            FilterPipeline::new()
                .add_filter(SelfExclusionFilter)
                .add_filter(QualityFilter::new(QualityThreshold::RECOMMENDATIONS)),
        );
        let backfill_filters = Arc::new(
            FilterPipeline::new()
                .add_filter(SelfExclusionFilter)
                .add_filter(AlreadySelectedFilter)
                .add_filter(QualityFilter::new(QualityThreshold::GENRE_BACKFILL)),
        );
        let fallback_filters = Arc::new(
            FilterPipeline::new()
                .add_filter(SelfExclusionFilter)
                .add_filter(QualityFilter::new(QualityThreshold::SIMILAR_FALLBACK)),
        );
        Self {
            source,
            primary_filters,
            backfill_filters,
            fallback_filters,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Bound each upstream call by `timeout` (default: 5s)
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Recommended movies for `movie_id`, at most six, never an error.
    ///
    /// `details` must be the already-fetched details of `movie_id`; its genre
    /// list drives the backfill step.
    pub async fn recommend(&self, movie_id: MovieId, details: &MovieDetails) -> RecommendationResult {
        self.recommend_detailed(movie_id, details).await.movies
    }

    /// Same as `recommend`, but also reports which path produced the list.
    #[instrument(skip(self, details), fields(source = self.source.name()))]
    pub async fn recommend_detailed(
        &self,
        movie_id: MovieId,
        details: &MovieDetails,
    ) -> Recommendations {
        let start_time = Instant::now();
        let context = FilterContext::new(movie_id);

        let result = match self
            .call(SourceKind::Recommendations, self.source.fetch_recommendations(movie_id))
            .await
        {
            Ok(movies) => self.fill_from_recommendations(movies, details, context).await,
            Err(err) => {
                warn!(
                    "Recommendations failed for movie {} ({}), trying similar movies",
                    movie_id, err
                );
                self.fall_back_to_similar(movie_id, &context).await
            }
        };

        info!(
            "Recommended {} movies for movie {} ({:?}) in {:.2?}",
            result.movies.len(),
            movie_id,
            result.outcome,
            start_time.elapsed()
        );
        result
    }

    /// Steps 2-3: filter the primary list and backfill by genre if it is short
    async fn fill_from_recommendations(
        &self,
        movies: Vec<MovieSummary>,
        details: &MovieDetails,
        context: FilterContext,
    ) -> Recommendations {
        let fetched = movies.len();
        let mut selected = self.apply_filters(
            &self.primary_filters,
            SourceKind::Recommendations,
            movies,
            &context,
        );
        debug!(
            "{} of {} recommendations passed {}",
            selected.len(),
            fetched,
            QualityThreshold::RECOMMENDATIONS
        );

        if selected.len() >= MIN_PRIMARY_RESULTS {
            selected.truncate(MAX_RECOMMENDATIONS);
            return Recommendations {
                movies: selected,
                outcome: RecommendationOutcome::Primary {
                    backfill: Backfill::NotNeeded,
                },
            };
        }

        let Some(genre) = details.primary_genre() else {
            debug!("Movie {} has no genres, skipping backfill", context.movie_id);
            return Recommendations {
                movies: selected,
                outcome: RecommendationOutcome::Primary {
                    backfill: Backfill::NoGenres,
                },
            };
        };

        let query = GenreQuery::popular_in(genre.id);
        let backfill = match self
            .call(SourceKind::GenreDiscovery, self.source.fetch_by_genre(&query))
            .await
        {
            Ok(genre_movies) => {
                let context = context.with_selected(&selected);
                let candidates = self.apply_filters(
                    &self.backfill_filters,
                    SourceKind::GenreDiscovery,
                    genre_movies,
                    &context,
                );
                let room = MAX_RECOMMENDATIONS.saturating_sub(selected.len());
                let added = candidates.len().min(room);
                selected.extend(candidates.into_iter().take(room));
                debug!("Backfilled {} movies from genre {} ({})", added, genre.id, genre.name);
                Backfill::Added(added)
            }
            Err(err) => {
                warn!("Genre backfill failed for genre {}: {}", genre.id, err);
                Backfill::Failed
            }
        };

        selected.truncate(MAX_RECOMMENDATIONS);
        Recommendations {
            movies: selected,
            outcome: RecommendationOutcome::Primary { backfill },
        }
    }

    /// Step 4: the primary source failed; fall back to similar movies
    async fn fall_back_to_similar(&self, movie_id: MovieId, context: &FilterContext) -> Recommendations {
        match self
            .call(SourceKind::Similar, self.source.fetch_similar(movie_id))
            .await
        {
            Ok(movies) => {
                let mut selected =
                    self.apply_filters(&self.fallback_filters, SourceKind::Similar, movies, context);
                selected.truncate(MAX_RECOMMENDATIONS);
                Recommendations {
                    movies: selected,
                    outcome: RecommendationOutcome::Degraded,
                }
            }
            Err(err) => {
                warn!("Similar movies failed for movie {}: {}", movie_id, err);
                Recommendations::unavailable()
            }
        }
    }

    /// Await one upstream call, turning an elapsed timeout into a failure
    async fn call<F>(&self, kind: SourceKind, request: F) -> Result<Vec<MovieSummary>, TransportError>
    where
        F: Future<Output = Result<Vec<MovieSummary>, TransportError>>,
    {
        match tokio::time::timeout(self.call_timeout, request).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} call timed out after {:?}", kind, self.call_timeout);
                Err(TransportError::Timeout(self.call_timeout))
            }
        }
    }

    /// Run a pipeline; a failing filter empties that list rather than the whole result
    fn apply_filters(
        &self,
        pipeline: &FilterPipeline,
        kind: SourceKind,
        movies: Vec<MovieSummary>,
        context: &FilterContext,
    ) -> Vec<MovieSummary> {
        pipeline.apply(movies, context).unwrap_or_else(|err| {
            warn!("Filtering {} results failed: {:#}", kind, err);
            Vec::new()
        })
    }
}
