//! # Movie Data Crate
//!
//! This crate defines the movie metadata model shared by every other crate
//! and decodes the upstream provider's JSON into it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieSummary, MovieDetails, Genre, Credits, Page)
//! - **query**: Discovery query parameters (GenreQuery, SortOrder)
//! - **parser**: Decode TMDB v3 payloads into the domain types
//! - **error**: Error types for decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use movie_data::parser::parse_movie_list;
//!
//! let movies = parse_movie_list(&body)?;
//! for movie in movies.iter().filter(|m| m.has_poster()) {
//!     println!("{} ({:.1})", movie.title, movie.vote_average);
//! }
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod query;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{ParseError, Result};
pub use query::{GenreQuery, SortOrder};
pub use types::{
    // Type aliases
    GenreId,
    MovieId,
    PersonId,
    // Core types
    CastMember,
    Credits,
    CrewMember,
    Genre,
    MovieDetails,
    MovieSummary,
    Page,
};
