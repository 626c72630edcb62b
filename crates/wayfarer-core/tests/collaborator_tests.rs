use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use jiff::civil::date;
use serde_json::json;
use wayfarer_core::{
    collaborators::{
        BookingSearch, FlightQuery, Geocoder, HotelQuery, HttpBookingSearch, NominatimGeocoder,
        SearchConfig, TokenConfig,
    },
    PlannerError,
};

fn flight_query() -> FlightQuery {
    FlightQuery {
        origin: "SFO".to_string(),
        destination: "CDG".to_string(),
        departure: date(2024, 6, 1),
    }
}

#[tokio::test]
async fn test_search_flights_sends_api_key_and_returns_payload() {
    let server = MockServer::start_async().await;
    let flights = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/routes/SFO/CDG/2024-06-01")
                .header("api-key", "test-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"quotes": [{"price": 512}]}));
        })
        .await;

    let search = HttpBookingSearch::new(SearchConfig::new(
        server.url("/routes"),
        server.url("/hotels"),
        "test-key",
    ))
    .unwrap();

    let payload = search.search_flights(&flight_query()).await.unwrap();

    assert_eq!(payload["quotes"][0]["price"], json!(512));
    flights.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_search_hotels_uses_query_parameters() {
    let server = MockServer::start_async().await;
    let hotels = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/search")
                .query_param("location", "Paris")
                .query_param("check_in", "2024-06-01")
                .query_param("check_out", "2024-06-03")
                .header("api-key", "test-key");
            then.status(200).json_body(json!({"hotels": []}));
        })
        .await;

    let search = HttpBookingSearch::new(SearchConfig::new(
        server.url("/flights"),
        server.url("/v1/search"),
        "test-key",
    ))
    .unwrap();

    let payload = search
        .search_hotels(&HotelQuery {
            location: "Paris".to_string(),
            check_in: date(2024, 6, 1),
            check_out: date(2024, 6, 3),
        })
        .await
        .unwrap();

    assert_eq!(payload, json!({"hotels": []}));
    hotels.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_bearer_token_is_fetched_once_and_reused() {
    let server = MockServer::start_async().await;
    let token = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/oauth/token")
                .body("grant_type=client_credentials");
            then.status(200)
                .json_body(json!({"access_token": "tok-123", "expires_in": 3600}));
        })
        .await;
    let flights = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/routes/SFO/CDG/2024-06-01")
                .header("api-key", "test-key")
                .header("authorization", "Bearer tok-123");
            then.status(200).json_body(json!({"quotes": []}));
        })
        .await;

    let config = SearchConfig::new(server.url("/routes"), server.url("/hotels"), "test-key")
        .with_token(TokenConfig {
            token_url: server.url("/oauth/token"),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
        });
    let search = HttpBookingSearch::new(config).unwrap();

    search.search_flights(&flight_query()).await.unwrap();
    search.search_flights(&flight_query()).await.unwrap();

    token.assert_calls_async(1).await;
    flights.assert_calls_async(2).await;
}

#[tokio::test]
async fn test_search_error_status_is_collaborator_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/routes/SFO/CDG/2024-06-01");
            then.status(503);
        })
        .await;

    let search = HttpBookingSearch::new(SearchConfig::new(
        server.url("/routes"),
        server.url("/hotels"),
        "test-key",
    ))
    .unwrap();

    let err = search.search_flights(&flight_query()).await.unwrap_err();
    assert!(matches!(err, PlannerError::Collaborator { .. }));
}

#[tokio::test]
async fn test_geocoder_parses_first_result() {
    let server = MockServer::start_async().await;
    let search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("format", "json")
                .query_param("limit", "1")
                .query_param("q", "Eiffel Tower");
            then.status(200).json_body(json!([{
                "lat": "48.8582599",
                "lon": "2.2945006",
                "display_name": "Tour Eiffel, Paris"
            }]));
        })
        .await;

    let geocoder = NominatimGeocoder::new(server.base_url()).unwrap();
    let coordinates = geocoder
        .geocode("Eiffel Tower")
        .await
        .unwrap()
        .expect("address should resolve");

    assert!((coordinates.latitude - 48.8582599).abs() < 1e-9);
    assert!((coordinates.longitude - 2.2945006).abs() < 1e-9);
    assert_eq!(coordinates.display_name.as_deref(), Some("Tour Eiffel, Paris"));
    search.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_geocoder_maps_empty_result_to_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(json!([]));
        })
        .await;

    let geocoder = NominatimGeocoder::new(server.base_url()).unwrap();
    assert!(geocoder.geocode("Nowhere at all").await.unwrap().is_none());
}
