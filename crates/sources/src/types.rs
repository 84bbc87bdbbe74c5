//! Shared types for movie sources.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Which upstream capability produced a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Recommendations for a specific movie (highest confidence)
    Recommendations,
    /// Popular titles sharing the movie's primary genre
    GenreDiscovery,
    /// Titles the provider considers similar (last resort)
    Similar,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Recommendations => "recommendations",
            SourceKind::GenreDiscovery => "genre-discovery",
            SourceKind::Similar => "similar",
        };
        f.write_str(name)
    }
}

/// Any failure to get a usable list from an upstream source.
///
/// `Clone` so test doubles can hand the same failure out repeatedly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::Recommendations.to_string(), "recommendations");
        assert_eq!(SourceKind::GenreDiscovery.to_string(), "genre-discovery");
        assert_eq!(SourceKind::Similar.to_string(), "similar");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "timed out after 5s");
        assert_eq!(
            TransportError::Status(503).to_string(),
            "upstream returned status 503"
        );
    }
}
