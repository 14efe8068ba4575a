use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::truncate;
use crate::{FetchError, FetchWindow, ScheduleClient};

fn window() -> FetchWindow {
    FetchWindow::starting_at(Utc.with_ymd_and_hms(2024, 1, 8, 18, 30, 0).unwrap(), 7)
}

fn starlink() -> serde_json::Value {
    json!({
        "name": "Falcon 9 / Starlink",
        "window_start": "2024-01-10T10:00Z",
        "window_end": "2024-01-10T12:00Z",
        "mission": { "description": "A batch of Starlink satellites." },
        "image": "http://x/y.png"
    })
}

async fn serve(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[test]
fn window_discards_time_of_day() {
    let w = window();
    assert_eq!(w.start, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    assert_eq!(w.end, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(w.to_string(), "[2024-01-08, 2024-01-15)");
}

#[test]
fn window_query_params() {
    let [gte, lt] = window().query_params();
    assert_eq!(gte, ("window_start__gte", "2024-01-08".to_owned()));
    assert_eq!(lt, ("window_start__lt", "2024-01-15".to_owned()));
}

#[test]
fn window_crosses_month_boundary() {
    let w = FetchWindow::starting_at(Utc.with_ymd_and_hms(2024, 2, 27, 0, 0, 0).unwrap(), 7);
    assert_eq!(w.end, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_truncate_unicode_boundary() {
    let s = "привет";
    assert!(truncate(s, 3).len() <= 3);
    assert_eq!(truncate("hello", 10), "hello");
}

#[tokio::test]
async fn fetches_and_decodes_launches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch/upcoming/"))
        .and(query_param("window_start__gte", "2024-01-08"))
        .and(query_param("window_start__lt", "2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "results": [starlink()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ScheduleClient::new(&server.uri()).unwrap();
    let launches = client.fetch_upcoming(&window()).await.unwrap();

    assert_eq!(launches.len(), 1);
    let launch = &launches[0];
    assert_eq!(launch.name, "Falcon 9 / Starlink");
    assert_eq!(launch.start, Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap());
    assert_eq!(launch.end, Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap());
    assert_eq!(launch.description, "A batch of Starlink satellites.");
    assert_eq!(launch.image_url, "http://x/y.png");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = serve(json!({ "results": [] })).await;
    let client = ScheduleClient::new(&format!("{}/", server.uri())).unwrap();
    assert_eq!(client.base_url(), server.uri());
    assert!(client.fetch_upcoming(&window()).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Request was throttled."))
        .expect(1)
        .mount(&server)
        .await;

    let client = ScheduleClient::new(&server.uri()).unwrap();
    let err = client.fetch_upcoming(&window()).await.unwrap_err();
    match &err {
        FetchError::HttpStatus { code, body } => {
            assert_eq!(*code, 429);
            assert!(body.contains("throttled"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn missing_nested_field_is_named() {
    let mut broken = starlink();
    broken["mission"] = json!({});
    let server = serve(json!({ "results": [starlink(), broken] })).await;

    let client = ScheduleClient::new(&server.uri()).unwrap();
    let err = client.fetch_upcoming(&window()).await.unwrap_err();
    match err {
        FetchError::MalformedResponse { field } => {
            assert_eq!(field, "results[1].mission.description");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn null_field_counts_as_missing() {
    let mut broken = starlink();
    broken["image"] = serde_json::Value::Null;
    let server = serve(json!({ "results": [broken] })).await;

    let client = ScheduleClient::new(&server.uri()).unwrap();
    let err = client.fetch_upcoming(&window()).await.unwrap_err();
    assert!(err.to_string().contains("results[0].image"));
}

#[tokio::test]
async fn missing_results_array_is_malformed() {
    let server = serve(json!({ "detail": "nothing here" })).await;
    let client = ScheduleClient::new(&server.uri()).unwrap();
    let err = client.fetch_upcoming(&window()).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedResponse { ref field } if field == "results"));
}

#[tokio::test]
async fn unparseable_timestamp_is_reported() {
    let mut broken = starlink();
    broken["window_end"] = json!("TBD");
    let server = serve(json!({ "results": [broken] })).await;

    let client = ScheduleClient::new(&server.uri()).unwrap();
    let err = client.fetch_upcoming(&window()).await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::InvalidTimestamp { ref field, .. } if field == "results[0].window_end"
    ));
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = ScheduleClient::new(&server.uri()).unwrap();
    let err = client.fetch_upcoming(&window()).await.unwrap_err();
    assert!(matches!(err, FetchError::JsonParse { .. }));
    assert!(!err.is_transient());
}
