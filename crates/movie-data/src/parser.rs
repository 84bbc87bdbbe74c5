//! Parser for TMDB v3 JSON payloads.
//!
//! The provider's wire format is decoded into private `Raw*` structs first and
//! then converted into the domain types. This keeps provider quirks in one place:
//! - `release_date` is `""` when unknown
//! - `tagline` and `overview` are `""` rather than absent
//! - list endpoints wrap results in a `{ page, total_pages, total_results, results }` envelope
//!
//! A badly formatted `release_date` on one movie is logged and dropped to `None`;
//! it never fails the whole listing.
//!
//! Rust concepts you'll learn here:
//! - serde derive with `#[serde(default)]` and `#[serde(flatten)]`
//! - Converting between types with `From`
//! - Error handling with the `?` operator

use crate::error::{ParseError, Result};
use crate::types::*;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawMovie {
    id: MovieId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    vote_average: f32,
    #[serde(default)]
    vote_count: u32,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u32,
    #[serde(default)]
    results: Vec<RawMovie>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    #[serde(flatten)]
    movie: RawMovie,
    #[serde(default)]
    genres: Vec<Genre>,
    #[serde(default)]
    budget: u64,
    #[serde(default)]
    revenue: u64,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    original_language: String,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    credits: Option<RawCredits>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCredits {
    #[serde(default)]
    cast: Vec<RawCastMember>,
    #[serde(default)]
    crew: Vec<RawCrewMember>,
}

#[derive(Debug, Deserialize)]
struct RawCastMember {
    id: PersonId,
    name: String,
    #[serde(default)]
    character: Option<String>,
    #[serde(default)]
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCrewMember {
    id: PersonId,
    name: String,
    #[serde(default)]
    job: String,
}

// =============================================================================
// Conversions
// =============================================================================

/// Treat `""` the same as a missing value
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a provider date (`YYYY-MM-DD`), mapping `""` and `null` to `None`.
pub fn parse_release_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ParseError::InvalidDate {
                field: "release_date",
                value: s.to_string(),
            }),
    }
}

impl From<RawMovie> for MovieSummary {
    fn from(raw: RawMovie) -> Self {
        let release_date = parse_release_date(raw.release_date.as_deref()).unwrap_or_else(|err| {
            warn!("Ignoring release date of movie {}: {}", raw.id, err);
            None
        });
        MovieSummary {
            id: raw.id,
            title: raw.title,
            poster_path: non_empty(raw.poster_path),
            vote_average: raw.vote_average,
            vote_count: raw.vote_count,
            release_date,
            overview: non_empty(raw.overview),
        }
    }
}

impl From<RawCredits> for Credits {
    fn from(raw: RawCredits) -> Self {
        Credits {
            cast: raw
                .cast
                .into_iter()
                .map(|c| CastMember {
                    id: c.id,
                    name: c.name,
                    character: c.character.unwrap_or_default(),
                    profile_path: non_empty(c.profile_path),
                })
                .collect(),
            crew: raw
                .crew
                .into_iter()
                .map(|c| CrewMember {
                    id: c.id,
                    name: c.name,
                    job: c.job,
                })
                .collect(),
        }
    }
}

fn decode<'a, T: Deserialize<'a>>(payload: &'static str, body: &'a str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| ParseError::Json { payload, source })
}

fn convert_movies(raw: Vec<RawMovie>) -> Vec<MovieSummary> {
    raw.into_iter().map(MovieSummary::from).collect()
}

// =============================================================================
// Public Entry Points
// =============================================================================

/// Parse a paginated movie listing (popular, search, discover, recommendations, similar)
pub fn parse_movie_page(body: &str) -> Result<Page<MovieSummary>> {
    let raw: RawPage = decode("movie list", body)?;
    Ok(Page {
        page: raw.page,
        total_pages: raw.total_pages,
        total_results: raw.total_results,
        results: convert_movies(raw.results),
    })
}

/// Parse a listing and keep only its results, in provider order
pub fn parse_movie_list(body: &str) -> Result<Vec<MovieSummary>> {
    parse_movie_page(body).map(|page| page.results)
}

/// Parse `/movie/{id}`, with or without `append_to_response=credits`
pub fn parse_movie_details(body: &str) -> Result<MovieDetails> {
    let raw: RawDetails = decode("movie details", body)?;
    Ok(MovieDetails {
        summary: MovieSummary::from(raw.movie),
        genres: raw.genres,
        budget: raw.budget,
        revenue: raw.revenue,
        runtime_minutes: raw.runtime.filter(|&minutes| minutes > 0),
        status: raw.status,
        original_language: raw.original_language,
        tagline: non_empty(raw.tagline),
        credits: raw.credits.map(Credits::from),
    })
}

/// Parse `/movie/{id}/credits`
pub fn parse_credits(body: &str) -> Result<Credits> {
    let raw: RawCredits = decode("credits", body)?;
    Ok(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOMMENDATIONS: &str = r#"{
        "page": 1,
        "total_pages": 2,
        "total_results": 40,
        "results": [
            {
                "id": 604,
                "title": "The Matrix Reloaded",
                "poster_path": "/9TGHDvWrqKBzwDxDodHYXEmOE6J.jpg",
                "vote_average": 7.0,
                "vote_count": 11000,
                "release_date": "2003-05-15",
                "overview": "Six months after the events depicted in The Matrix...",
                "popularity": 55.1,
                "adult": false
            },
            {
                "id": 999999,
                "title": "Unreleased Thing",
                "poster_path": null,
                "vote_average": 0,
                "vote_count": 0,
                "release_date": "",
                "overview": ""
            }
        ]
    }"#;

    #[test]
    fn test_parse_movie_page() {
        let page = parse_movie_page(RECOMMENDATIONS).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_results, 40);
        assert_eq!(page.results.len(), 2);

        let first = &page.results[0];
        assert_eq!(first.id, 604);
        assert_eq!(first.title, "The Matrix Reloaded");
        assert_eq!(first.vote_count, 11000);
        assert_eq!(first.release_year(), Some(2003));
        assert!(first.has_poster());
    }

    #[test]
    fn test_empty_strings_become_none() {
        let movies = parse_movie_list(RECOMMENDATIONS).unwrap();
        let unreleased = &movies[1];
        assert_eq!(unreleased.poster_path, None);
        assert_eq!(unreleased.release_date, None);
        assert_eq!(unreleased.overview, None);
        assert_eq!(unreleased.vote_average, 0.0);
    }

    #[test]
    fn test_missing_results_is_empty_list() {
        let movies = parse_movie_list(r#"{"page": 1}"#).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_malformed_body() {
        let err = parse_movie_list("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ParseError::Json { payload: "movie list", .. }));

        // Right JSON, wrong shape
        let err = parse_movie_list(r#"{"results": [{"title": "no id"}]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json { .. }));
    }

    #[test]
    fn test_invalid_release_date_only_affects_that_movie() {
        let body = r#"{"results": [
            {"id": 1, "title": "X", "release_date": "31/03/1999", "vote_average": 7.1, "vote_count": 300},
            {"id": 2, "title": "Y", "release_date": "1999-03-31"}
        ]}"#;
        let movies = parse_movie_list(body).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[0].release_date, None);
        assert_eq!(movies[0].vote_count, 300);
        assert_eq!(movies[1].release_year(), Some(1999));
    }

    #[test]
    fn test_parse_release_date_is_strict() {
        assert_eq!(parse_release_date(None).unwrap(), None);
        assert_eq!(parse_release_date(Some("")).unwrap(), None);
        assert!(parse_release_date(Some("1999-03-31")).unwrap().is_some());
        let err = parse_release_date(Some("31/03/1999")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { field: "release_date", .. }));
    }

    #[test]
    fn test_parse_movie_details_with_credits() {
        let body = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            "vote_average": 8.2,
            "vote_count": 25000,
            "release_date": "1999-03-31",
            "overview": "Set in the 22nd century...",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "budget": 63000000,
            "revenue": 463517383,
            "runtime": 136,
            "status": "Released",
            "original_language": "en",
            "tagline": "Welcome to the Real World.",
            "credits": {
                "cast": [
                    {"id": 6384, "name": "Keanu Reeves", "character": "Neo", "profile_path": "/k.jpg"}
                ],
                "crew": [
                    {"id": 9339, "name": "Lilly Wachowski", "job": "Director"}
                ]
            }
        }"#;

        let details = parse_movie_details(body).unwrap();
        assert_eq!(details.id(), 603);
        assert_eq!(details.title(), "The Matrix");
        assert_eq!(details.primary_genre().map(|g| g.id), Some(28));
        assert_eq!(details.budget, 63_000_000);
        assert_eq!(details.revenue, 463_517_383);
        assert_eq!(details.runtime_minutes, Some(136));
        assert_eq!(details.tagline.as_deref(), Some("Welcome to the Real World."));

        let credits = details.credits.expect("credits were appended");
        assert_eq!(credits.cast[0].character, "Neo");
        assert_eq!(credits.director().map(|d| d.name.as_str()), Some("Lilly Wachowski"));
    }

    #[test]
    fn test_parse_movie_details_minimal() {
        let body = r#"{"id": 1, "title": "Bare", "tagline": "", "runtime": 0}"#;
        let details = parse_movie_details(body).unwrap();
        assert!(details.genres.is_empty());
        assert_eq!(details.tagline, None);
        assert_eq!(details.runtime_minutes, None);
        assert!(details.credits.is_none());
    }

    #[test]
    fn test_parse_credits() {
        let body = r#"{"id": 603, "cast": [{"id": 1, "name": "A", "character": null}], "crew": []}"#;
        let credits = parse_credits(body).unwrap();
        assert_eq!(credits.cast.len(), 1);
        assert_eq!(credits.cast[0].character, "");
        assert!(credits.crew.is_empty());
    }
}
