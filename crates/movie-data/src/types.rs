//! Core domain types for movie metadata.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Every type here is plain data: fetched once from the upstream provider,
//! never mutated afterwards, and dropped when the request that needed it ends.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId, GenreId, PersonId)
//! - Composition instead of inheritance (MovieDetails wraps a MovieSummary)
//! - `Option<T>` for fields the provider may leave out

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up movie IDs with genre IDs

/// Upstream-assigned identifier for a movie
pub type MovieId = u32;

/// Upstream-assigned identifier for a genre (e.g. 28 = Action)
pub type GenreId = u32;

/// Upstream-assigned identifier for a cast or crew member
pub type PersonId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// The list-level view of a movie, as returned by listing, search and
/// recommendation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// Relative poster path (e.g. "/abc123.jpg")
    pub poster_path: Option<String>,
    /// Average vote in the range 0.0..=10.0
    pub vote_average: f32,
    pub vote_count: u32,
    pub release_date: Option<NaiveDate>,
    pub overview: Option<String>,
}

impl MovieSummary {
    /// Create a summary with only the fields the recommendation policy looks at.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            overview: None,
        }
    }

    /// Set vote statistics (builder pattern).
    pub fn with_votes(mut self, vote_average: f32, vote_count: u32) -> Self {
        self.vote_average = vote_average;
        self.vote_count = vote_count;
        self
    }

    /// Set the poster path (builder pattern).
    pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Set the release date (builder pattern).
    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    /// A poster only counts when the path is non-empty.
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Release year, if the date is known
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// A genre tag attached to a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Full detail record for a single movie.
///
/// Rust concept: composition. The summary fields live in `summary` rather
/// than being repeated, so anything that accepts a `&MovieSummary` also
/// works on details via `&details.summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub summary: MovieSummary,
    /// Genres in the provider's order; the first one is the primary genre
    pub genres: Vec<Genre>,
    pub budget: u64,
    pub revenue: u64,
    pub runtime_minutes: Option<u32>,
    pub status: String,
    pub original_language: String,
    pub tagline: Option<String>,
    pub credits: Option<Credits>,
}

impl MovieDetails {
    pub fn id(&self) -> MovieId {
        self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// The genre used for discovery backfill
    pub fn primary_genre(&self) -> Option<&Genre> {
        self.genres.first()
    }
}

// =============================================================================
// Credits
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: PersonId,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: PersonId,
    pub name: String,
    pub job: String,
}

/// Cast in billing order, crew in provider order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// First crew member credited with the "Director" job
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew.iter().find(|member| member.job == "Director")
    }

    /// Top-billed cast members
    pub fn main_cast(&self, n: usize) -> &[CastMember] {
        &self.cast[..n.min(self.cast.len())]
    }
}

// =============================================================================
// Listings
// =============================================================================

/// One page of a paginated listing (popular, search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// An empty first page (used for blank search queries)
    pub fn empty() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
        }
    }

    /// Whether another page can be requested after this one
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}
