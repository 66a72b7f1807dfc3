use std::time::Duration;

use cinebusca::catalog::{
    CatalogError, GatewayConfig, GatewayError, MovieCatalog, OmdbCatalog,
    POSTER_PLACEHOLDER_URL,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn catalog_for(server: &MockServer) -> OmdbCatalog {
    let config = GatewayConfig {
        base_url: server.uri(),
        ..GatewayConfig::new("test-key")
    };
    OmdbCatalog::new(config).unwrap()
}

fn marvel_body() -> serde_json::Value {
    serde_json::json!({
        "Search": [
            {
                "Title": "Iron Man",
                "Year": "2008",
                "imdbID": "tt0371746",
                "Type": "movie",
                "Poster": "https://m.media-amazon.com/images/iron-man.jpg"
            },
            {
                "Title": "Marvel One-Shot: Item 47",
                "Year": "2012",
                "imdbID": "tt2247732",
                "Type": "movie",
                "Poster": "N/A"
            }
        ],
        "totalResults": "2",
        "Response": "True"
    })
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_sends_key_term_and_movie_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("s", "marvel"))
        .and(query_param("type", "movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(marvel_body()))
        .expect(1)
        .mount(&server)
        .await;

    let movies = assert_ok!(catalog_for(&server).search_movies("marvel").await);
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn test_search_maps_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(marvel_body()))
        .mount(&server)
        .await;

    let movies = catalog_for(&server).search_movies("marvel").await.unwrap();

    assert_eq!(movies[0].id, "tt0371746");
    assert_eq!(movies[0].title, "Iron Man");
    assert_eq!(movies[0].year, "2008");
    assert_eq!(
        movies[0].poster_url.as_deref(),
        Some("https://m.media-amazon.com/images/iron-man.jpg")
    );

    // "N/A" poster means no image, shown as the placeholder
    assert_eq!(movies[1].poster_url, None);
    assert_eq!(movies[1].poster_or_placeholder(), POSTER_PLACEHOLDER_URL);
}

#[tokio::test]
async fn test_search_not_found_carries_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    let err = assert_err!(catalog_for(&server).search_movies("zzzzqqqxx").await);

    assert_eq!(err, CatalogError::Search("Movie not found!".to_string()));
    assert_eq!(err.user_message(), "Movie not found!");
}

#[tokio::test]
async fn test_search_failure_without_message_uses_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"Response": "False"})),
        )
        .mount(&server)
        .await;

    let err = catalog_for(&server).search_movies("x").await.unwrap_err();
    assert_eq!(err.user_message(), "Nenhum filme encontrado");
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = catalog_for(&server).search_movies("marvel").await.unwrap_err();

    assert_eq!(err, CatalogError::Gateway(GatewayError::Server { status: 500 }));
    assert_eq!(
        err.user_message(),
        "Erro no servidor. Tente novamente mais tarde."
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = catalog_for(&server).search_movies("marvel").await.unwrap_err();
    assert!(matches!(err, CatalogError::Gateway(GatewayError::Decode(_))));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(marvel_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = GatewayConfig {
        base_url: server.uri(),
        timeout: Duration::from_millis(200),
        ..GatewayConfig::new("test-key")
    };
    let catalog = OmdbCatalog::new(config).unwrap();

    let err = catalog.search_movies("marvel").await.unwrap_err();

    assert_eq!(err, CatalogError::Gateway(GatewayError::Timeout));
    assert_eq!(err.user_message(), "Erro de conexão. Verifique sua internet.");
}

#[tokio::test]
async fn test_unreachable_provider_is_connectivity_error() {
    // Grab a free port, then release it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = GatewayConfig {
        base_url: format!("http://127.0.0.1:{port}/"),
        ..GatewayConfig::new("test-key")
    };
    let catalog = OmdbCatalog::new(config).unwrap();

    let err = assert_err!(catalog.search_movies("marvel").await);

    assert_eq!(err, CatalogError::Gateway(GatewayError::Connectivity));
    assert_eq!(err.user_message(), "Erro de conexão. Verifique sua internet.");
}

// ============================================================================
// Detail Tests
// ============================================================================

#[tokio::test]
async fn test_detail_requests_full_plot_and_maps_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("i", "tt0371746"))
        .and(query_param("plot", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Title": "Iron Man",
            "Year": "2008",
            "Rated": "PG-13",
            "Runtime": "126 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Jon Favreau",
            "Actors": "Robert Downey Jr., Gwyneth Paltrow, Terrence Howard",
            "Plot": "After being held captive in an Afghan cave, Tony Stark builds a suit of armor.",
            "Poster": "N/A",
            "imdbRating": "7.9",
            "imdbID": "tt0371746",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let detail = assert_ok!(catalog_for(&server).movie_details("tt0371746").await);

    assert_eq!(detail.id(), "tt0371746");
    assert_eq!(detail.title(), "Iron Man");
    assert_eq!(detail.rating, "7.9");
    assert_eq!(detail.rating_value(), Some(7.9));
    assert_eq!(detail.runtime, "126 min");
    assert_eq!(detail.rated, "PG-13");
    assert_eq!(detail.director, "Jon Favreau");
    assert_eq!(detail.summary.poster_url, None);
}

#[tokio::test]
async fn test_detail_failure_with_and_without_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("i", "tt_bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID."
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("i", "tt_silent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"Response": "False"})),
        )
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);

    let err = catalog.movie_details("tt_bad").await.unwrap_err();
    assert_eq!(err, CatalogError::Detail("Incorrect IMDb ID.".to_string()));

    let err = catalog.movie_details("tt_silent").await.unwrap_err();
    assert_eq!(err.user_message(), "Detalhes do filme não encontrados");
}
