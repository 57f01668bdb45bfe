//! Integration tests for the geocoding client (wiremock-based)

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{
    AddressPart, GeocodeStatus, GeocodingClient, GeocodingConfig, GeocodingError,
    GoogleGeocodingClient, NameForm,
};

fn config_for_mock(base_url: &str) -> GeocodingConfig {
    GeocodingConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..GeocodingConfig::with_api_key("test-key")
    }
}

fn sample_geocode_json() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "address_components": [
                { "long_name": "1600", "short_name": "1600", "types": ["street_number"] },
                { "long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"] },
                { "long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"] },
                { "long_name": "Santa Clara County", "short_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"] },
                { "long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "United States", "short_name": "US", "types": ["country", "political"] },
                { "long_name": "94043", "short_name": "94043", "types": ["postal_code"] }
            ],
            "formatted_address": "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA",
            "geometry": {
                "location": { "lat": 37.4224764, "lng": -122.0842499 },
                "location_type": "ROOFTOP",
                "viewport": {
                    "northeast": { "lat": 37.4238253802915, "lng": -122.0829009197085 },
                    "southwest": { "lat": 37.4211274197085, "lng": -122.0855988802915 }
                }
            },
            "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
            "types": ["street_address"]
        }],
        "status": "OK"
    })
}

fn two_results_json() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "address_components": [
                    { "long_name": "Springfield", "short_name": "Springfield", "types": ["locality", "political"] },
                    { "long_name": "Illinois", "short_name": "IL", "types": ["administrative_area_level_1", "political"] }
                ],
                "formatted_address": "Springfield, IL, USA",
                "geometry": { "location": { "lat": 39.7817213, "lng": -89.6501481 } }
            },
            {
                "address_components": [
                    { "long_name": "Springfield", "short_name": "Springfield", "types": ["locality", "political"] },
                    { "long_name": "Missouri", "short_name": "MO", "types": ["administrative_area_level_1", "political"] }
                ],
                "formatted_address": "Springfield, MO, USA",
                "geometry": { "location": { "lat": 37.2089572, "lng": -93.2922989 } }
            }
        ],
        "status": "OK"
    })
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param("address", "1600 Amphitheatre Parkway, Mountain View"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let response = client
        .geocode("1600 Amphitheatre Parkway, Mountain View")
        .await
        .unwrap();

    assert_eq!(response.status, GeocodeStatus::Ok);
    assert_eq!(
        response.formatted_address().unwrap(),
        "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA"
    );
    assert_eq!(response.street_number_long().unwrap(), "1600");
    assert_eq!(response.street_long().unwrap(), "Amphitheatre Parkway");
    assert_eq!(response.street_short().unwrap(), "Amphitheatre Pkwy");
    assert_eq!(response.city_long().unwrap(), "Mountain View");
    assert_eq!(response.state_long().unwrap(), "California");
    assert_eq!(response.state_short().unwrap(), "CA");
    assert_eq!(response.country_short().unwrap(), "US");
    assert_eq!(response.postal_code_long().unwrap(), "94043");
    assert_eq!(
        response.coordinates().unwrap(),
        "37.4224764000, -122.0842499000"
    );
}

#[tokio::test]
async fn test_location_is_trimmed_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param("address", "Mountain View CA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let response = client.geocode("   Mountain View CA \n").await.unwrap();
    assert_eq!(
        response.name(AddressPart::City, NameForm::Short).unwrap(),
        "Mountain View"
    );
}

#[tokio::test]
async fn test_zero_results_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "results": [], "status": "ZERO_RESULTS" })),
        )
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("nowhere in particular").await.unwrap_err();

    assert_eq!(err.status(), Some(&GeocodeStatus::ZeroResults));
    assert_eq!(err.to_string(), "ZERO_RESULTS");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_request_denied_carries_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error_message": "The provided API key is invalid.",
            "results": [],
            "status": "REQUEST_DENIED"
        })))
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Berlin").await.unwrap_err();

    match err {
        GeocodingError::StatusNotOk { status, message } => {
            assert_eq!(status, GeocodeStatus::RequestDenied);
            assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
        },
        other => panic!("Expected StatusNotOk, got {other:?}"),
    }
}

#[tokio::test]
async fn test_over_query_limit_is_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "results": [], "status": "OVER_QUERY_LIMIT" })),
        )
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Berlin").await.unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_ambiguous_result_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param("address", "Springfield"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_results_json()))
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let result = client.geocode("Springfield").await;

    assert!(matches!(
        result,
        Err(GeocodingError::AmbiguousResult { count: 2 })
    ));
}

#[tokio::test]
async fn test_ambiguous_result_allowed_when_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_results_json()))
        .mount(&server)
        .await;

    let config = GeocodingConfig {
        reject_ambiguous: false,
        ..config_for_mock(&server.uri())
    };
    let client = GoogleGeocodingClient::new(&config).unwrap();
    let response = client.geocode("Springfield").await.unwrap();

    assert_eq!(response.results.len(), 2);
    // Accessors read from the best match
    assert_eq!(response.state_short().unwrap(), "IL");
}

#[tokio::test]
async fn test_missing_component_reported_per_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "address_components": [
                    { "long_name": "Paris", "short_name": "Paris", "types": ["locality", "political"] },
                    { "long_name": "France", "short_name": "FR", "types": ["country", "political"] }
                ],
                "formatted_address": "Paris, France",
                "geometry": { "location": { "lat": 48.856614, "lng": 2.3522219 } }
            }],
            "status": "OK"
        })))
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let response = client.geocode("Paris").await.unwrap();

    assert_eq!(response.city_long().unwrap(), "Paris");
    assert_eq!(response.country_short().unwrap(), "FR");
    assert!(matches!(
        response.street_number_long(),
        Err(GeocodingError::ComponentNotFound(AddressPart::StreetNumber))
    ));
    assert_eq!(
        response.postal_code_short().unwrap_err().to_string(),
        "postal code not found"
    );
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Berlin").await.unwrap_err();

    assert!(matches!(err, GeocodingError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Berlin").await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn test_per_call_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_geocode_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .geocode_with_timeout("Berlin", Duration::from_millis(200))
        .await
        .unwrap_err();

    assert!(matches!(err, GeocodingError::Timeout { timeout_ms: 200 }));
    assert!(err.to_string().contains("200 ms"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_failure_does_not_leak_api_key() {
    // Nothing listens on port 9 locally
    let config = GeocodingConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..GeocodingConfig::with_api_key("very-secret-key")
    };
    let client = GoogleGeocodingClient::new(&config).unwrap();
    let err = client.geocode("Berlin").await.unwrap_err();

    assert!(matches!(
        err,
        GeocodingError::ConnectionFailed(_) | GeocodingError::Timeout { .. }
    ));
    assert!(!err.to_string().contains("very-secret-key"));
}

#[tokio::test]
async fn test_empty_location_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocode_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = GoogleGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("   ").await.unwrap_err();
    assert!(matches!(err, GeocodingError::InvalidLocation(_)));
}
