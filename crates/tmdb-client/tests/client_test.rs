//! Integration tests for the TMDB client against a mock HTTP server.

use std::time::Duration;

use movie_data::GenreQuery;
use serde_json::json;
use tmdb_client::{TmdbClient, TmdbConfig, TmdbError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TmdbClient {
    let config = TmdbConfig::new("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(2));
    TmdbClient::new(config).expect("valid config")
}

fn movie_list() -> serde_json::Value {
    json!({
        "page": 1,
        "total_pages": 3,
        "total_results": 60,
        "results": [
            {"id": 550, "title": "Fight Club", "poster_path": "/fc.jpg",
             "vote_average": 8.4, "vote_count": 27000, "release_date": "1999-10-15"},
            {"id": 680, "title": "Pulp Fiction", "poster_path": "/pf.jpg",
             "vote_average": 8.5, "vote_count": 26000, "release_date": "1994-09-10"}
        ]
    })
}

#[tokio::test]
async fn test_popular_movies_sends_key_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_list()))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).popular_movies(2).await.unwrap();

    assert_eq!(page.total_results, 60);
    assert!(page.has_more());
    assert_eq!(page.results[0].title, "Fight Club");
}

#[tokio::test]
async fn test_search_movies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "pulp fiction"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_list()))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .search_movies("  pulp fiction ", 1)
        .await
        .unwrap();
    assert_eq!(page.results.len(), 2);
}

#[tokio::test]
async fn test_blank_search_skips_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_list()))
        .expect(0)
        .mount(&server)
        .await;

    let page = client_for(&server).search_movies("   ", 1).await.unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.total_results, 0);
}

#[tokio::test]
async fn test_movie_details_appends_credits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("append_to_response", "credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/m.jpg",
            "vote_average": 8.2,
            "vote_count": 25000,
            "release_date": "1999-03-31",
            "genres": [{"id": 28, "name": "Action"}],
            "budget": 63000000,
            "revenue": 463517383,
            "runtime": 136,
            "status": "Released",
            "original_language": "en",
            "tagline": "Welcome to the Real World.",
            "credits": {
                "cast": [{"id": 6384, "name": "Keanu Reeves", "character": "Neo"}],
                "crew": [{"id": 9340, "name": "Lana Wachowski", "job": "Director"}]
            }
        })))
        .mount(&server)
        .await;

    let details = client_for(&server).movie_details(603).await.unwrap();
    assert_eq!(details.title(), "The Matrix");
    assert_eq!(details.genres.len(), 1);
    let credits = details.credits.unwrap();
    assert_eq!(credits.director().unwrap().name, "Lana Wachowski");
}

#[tokio::test]
async fn test_movie_credits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "cast": [{"id": 1, "name": "Carrie-Anne Moss", "character": "Trinity"}],
            "crew": []
        })))
        .mount(&server)
        .await;

    let credits = client_for(&server).movie_credits(603).await.unwrap();
    assert_eq!(credits.cast[0].character, "Trinity");
}

#[tokio::test]
async fn test_recommendations_and_similar_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_list()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/603/similar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1, "results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let recommended = client.recommendations(603).await.unwrap();
    let similar = client.similar_movies(603).await.unwrap();

    let ids: Vec<_> = recommended.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![550, 680]);
    assert!(similar.is_empty());
}

#[tokio::test]
async fn test_discover_by_genre_query_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("with_genres", "878"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("vote_average.gte", "6"))
        .and(query_param("vote_count.gte", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_list()))
        .expect(1)
        .mount(&server)
        .await;

    let movies = client_for(&server)
        .discover_by_genre(&GenreQuery::popular_in(878), 1)
        .await
        .unwrap();
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1/recommendations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_code": 7,
            "status_message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).recommendations(1).await.unwrap_err();
    match err {
        TmdbError::Status { status, path } => {
            assert_eq!(status, 401);
            assert_eq!(path, "/movie/1/recommendations");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1/similar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).similar_movies(1).await.unwrap_err();
    assert!(matches!(err, TmdbError::Malformed(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(movie_list())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = TmdbConfig::new("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = TmdbClient::new(config).unwrap();

    let err = client.popular_movies(1).await.unwrap_err();
    assert!(matches!(err, TmdbError::Timeout { .. }));
}
