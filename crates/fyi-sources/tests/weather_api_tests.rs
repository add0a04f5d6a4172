//! Weather client tests against a mock provider.
//!
//! Every failure mode (transport, status, body) must come back as an error
//! value so the dashboard can blank the weather panel without crashing.

use std::time::Duration;

use fyi_core::WeatherConfig;
use fyi_sources::{BlockingWeatherSource, SourceError, WeatherApiClient, WeatherSource};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

fn config_for(server: &MockServer) -> WeatherConfig {
    WeatherConfig {
        api_base_url: format!("{}/v1", server.uri()),
        timeout_secs: 2,
        ..Default::default()
    }
}

fn springfield() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Springfield",
            "region": "Illinois",
            "country": "United States of America",
            "lat": 39.8,
            "lon": -89.64,
            "tz_id": "America/Chicago",
            "localtime_epoch": 1705329000,
            "localtime": "2024-01-15 14:30"
        },
        "current": {
            "last_updated_epoch": 1705328100,
            "last_updated": "2024-01-15 14:15",
            "temp_c": 18.0,
            "temp_f": 64.4,
            "is_day": 1,
            "condition": {
                "text": "Sunny",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png",
                "code": 1000
            },
            "wind_kph": 11.2,
            "humidity": 40
        }
    })
}

#[tokio::test]
async fn test_fetch_current_success() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/v1/current.json"))
        .and(matchers::query_param("key", "test-key"))
        .and(matchers::query_param("q", "auto:ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(springfield()))
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherApiClient::new(&config_for(&server), "test-key").unwrap();
    let sample = client.fetch_current("auto:ip").await.unwrap();

    assert_eq!(sample.location_name, "Springfield");
    assert_eq!(sample.temperature_celsius, 18.0);
    assert_eq!(sample.condition_code, 1000);
    assert!(sample.is_daytime);
}

#[tokio::test]
async fn test_invalid_key_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": 2006, "message": "API key is invalid."}
        })))
        .mount(&server)
        .await;

    let client = WeatherApiClient::new(&config_for(&server), "bad-key").unwrap();
    let err = client.fetch_current("auto:ip").await.unwrap_err();

    match err {
        SourceError::Status { status, ref body } => {
            assert_eq!(status, 401);
            assert!(body.contains("API key is invalid."));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_server_error_is_transient() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = WeatherApiClient::new(&config_for(&server), "test-key").unwrap();
    let err = client.fetch_current("auto:ip").await.unwrap_err();

    assert!(matches!(err, SourceError::Status { status: 503, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
        .mount(&server)
        .await;

    let client = WeatherApiClient::new(&config_for(&server), "test-key").unwrap();
    let err = client.fetch_current("auto:ip").await.unwrap_err();

    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn test_missing_fields_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"name": "Springfield"}
        })))
        .mount(&server)
        .await;

    let client = WeatherApiClient::new(&config_for(&server), "test-key").unwrap();
    let err = client.fetch_current("auto:ip").await.unwrap_err();

    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(springfield())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = WeatherConfig {
        timeout_secs: 1,
        ..config_for(&server)
    };
    let client = WeatherApiClient::new(&config, "test-key").unwrap();
    let err = client.fetch_current("auto:ip").await.unwrap_err();

    match err {
        SourceError::Http(ref e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    let config = WeatherConfig {
        // Port 9 (discard) on localhost is closed in test environments
        api_base_url: "http://127.0.0.1:9/v1".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let client = WeatherApiClient::new(&config, "test-key").unwrap();
    let err = client.fetch_current("auto:ip").await.unwrap_err();

    assert!(matches!(err, SourceError::Http(_)));
}

#[test]
fn test_blocking_source_from_synchronous_code() {
    let mock_runtime = tokio::runtime::Runtime::new().unwrap();
    let server = mock_runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(matchers::method("GET"))
            .and(matchers::path("/v1/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(springfield()))
            .mount(&server)
            .await;
        server
    });

    let mut source = BlockingWeatherSource::new(&config_for(&server), "test-key").unwrap();
    let sample = source.fetch_current("auto:ip").unwrap();

    assert_eq!(sample.location_name, "Springfield");
    assert_eq!(sample.condition_code, 1000);
}
