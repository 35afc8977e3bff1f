//! Weather client tests against a mock HTTP server.

use deskclock_core::{MemoryStore, WeatherClient, WeatherError, WeatherPanel};
use mockito::Matcher;

const LONDON: &str = r#"{
    "name": "London",
    "main": { "temp": 11.6, "humidity": 81 },
    "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }]
}"#;

fn client(server: &mockito::Server) -> WeatherClient {
    WeatherClient::new(Some("test-key")).with_endpoints(
        &format!("{}/data/2.5/weather", server.url()),
        &format!("{}/json", server.url()),
    )
}

#[tokio::test]
async fn fetch_city_parses_report() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "London".into()),
            Matcher::UrlEncoded("appid".into(), "test-key".into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LONDON)
        .create_async()
        .await;

    let report = client(&server).fetch_city("London").await.unwrap();
    mock.assert_async().await;
    assert_eq!(report.location, "London");
    assert_eq!(report.display_temp(), "12°C");
    assert_eq!(report.description, "broken clouds");
    assert_eq!(report.icon, "04d");
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"cod":"404","message":"city not found"}"#)
        .create_async()
        .await;

    let err = client(&server).fetch_city("Atlantis").await.unwrap_err();
    assert!(matches!(err, WeatherError::CityNotFound(ref c) if c == "Atlantis"));
    assert_eq!(err.to_string(), "City \"Atlantis\" not found.");
}

#[tokio::test]
async fn bad_key_is_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let err = client(&server).fetch_city("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::Unauthorized));
}

#[tokio::test]
async fn other_status_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = client(&server).fetch_city("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::Api { status: 503 }));
}

#[tokio::test]
async fn fetch_here_locates_then_queries_coordinates() {
    let mut server = mockito::Server::new_async().await;
    let geo = server
        .mock("GET", "/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","city":"London","lat":51.5,"lon":-0.12}"#)
        .create_async()
        .await;
    let weather = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lat".into(), "51.5".into()),
            Matcher::UrlEncoded("lon".into(), "-0.12".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LONDON)
        .create_async()
        .await;

    let report = client(&server).fetch_here().await.unwrap();
    geo.assert_async().await;
    weather.assert_async().await;
    assert_eq!(report.location, "London");
}

#[tokio::test]
async fn failed_geolocation_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"fail","message":"reserved range"}"#)
        .create_async()
        .await;

    let err = client(&server).locate().await.unwrap_err();
    assert!(matches!(err, WeatherError::Geolocation(ref m) if m == "reserved range"));
}

#[tokio::test]
async fn rejected_city_is_not_remembered() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let store = MemoryStore::new();
    let panel = WeatherPanel::new(&store);
    panel.submit_city("London").unwrap();

    let err = panel
        .lookup_city(&client(&server), " Atlantis ")
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::CityNotFound(ref c) if c == "Atlantis"));
    assert_eq!(panel.saved_city().as_deref(), Some("London"));
}

#[tokio::test]
async fn accepted_city_is_remembered() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::UrlEncoded("q".into(), "London".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LONDON)
        .create_async()
        .await;

    let store = MemoryStore::new();
    let panel = WeatherPanel::new(&store);
    let report = panel.lookup_city(&client(&server), "  London").await.unwrap();
    assert_eq!(report.location, "London");
    assert_eq!(panel.saved_city().as_deref(), Some("London"));
}

#[tokio::test]
async fn lookup_rejects_empty_city_without_request() {
    let server = mockito::Server::new_async().await;
    let store = MemoryStore::new();
    let panel = WeatherPanel::new(&store);
    let err = panel.lookup_city(&client(&server), "   ").await.unwrap_err();
    assert!(matches!(err, WeatherError::EmptyCity));
    assert!(store.is_empty());
}
