//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to movie lists, and the context
//! every filter is evaluated against.

use anyhow::Result;
use movie_data::{MovieId, MovieSummary};
use std::collections::HashSet;

/// What a filter needs to know about the request it is filtering for.
#[derive(Debug, Clone, Default)]
pub struct FilterContext {
    /// The movie recommendations are being produced for
    pub movie_id: MovieId,
    /// Movies already chosen by an earlier stage
    pub already_selected: HashSet<MovieId>,
}

impl FilterContext {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            already_selected: HashSet::new(),
        }
    }

    /// Record movies chosen so far (builder pattern).
    pub fn with_selected<'a>(mut self, movies: impl IntoIterator<Item = &'a MovieSummary>) -> Self {
        self.already_selected.extend(movies.into_iter().map(|m| m.id));
        self
    }
}

/// Core trait for filtering movie lists.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - Filters take ownership of the Vec<MovieSummary> and return a filtered Vec
/// - Filters must keep the relative order of the movies they retain
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `context` - The request being served
    ///
    /// # Returns
    /// * `Ok(Vec<MovieSummary>)` - The retained movies, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, movies: Vec<MovieSummary>, context: &FilterContext) -> Result<Vec<MovieSummary>>;
}
