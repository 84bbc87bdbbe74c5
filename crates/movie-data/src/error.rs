//! Error types for the movie-data crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - `#[from]` to wrap an underlying library error

use thiserror::Error;

/// Errors that can occur while decoding provider payloads
#[derive(Error, Debug)]
pub enum ParseError {
    /// The body was not valid JSON, or did not have the expected shape
    #[error("Malformed {payload} payload: {source}")]
    Json {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A date field was present but not in YYYY-MM-DD form
    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ParseError>;
