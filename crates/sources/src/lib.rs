//! # Sources Crate
//!
//! This crate defines where recommendation candidates come from.
//!
//! ## Components
//!
//! ### MovieSource (trait)
//! The three upstream capabilities the recommendation engine composes:
//! - recommendations for a movie
//! - similar movies
//! - discovery by genre
//!
//! ### TmdbSource
//! The production implementation over `tmdb_client::TmdbClient`. Every client
//! failure (network, timeout, non-2xx status, undecodable body) surfaces as a
//! `TransportError`.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{MovieSource, TmdbSource};
//! use tmdb_client::TmdbClient;
//!
//! let source = TmdbSource::new(TmdbClient::from_env()?);
//! let movies = source.fetch_recommendations(603).await?;
//! ```

// Public modules
pub mod tmdb;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use tmdb::TmdbSource;
pub use traits::MovieSource;
pub use types::{SourceKind, TransportError};
