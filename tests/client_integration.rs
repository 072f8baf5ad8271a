//! Integration tests for the Highlight client using wiremock

use core::time::Duration;
use green_metrics::config::{ApiKey, Config};
use green_metrics::error::RequestError;
use green_metrics::highlight::{MetricRecord, fetch_green_metrics};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_PATH: &str = "/WS2/domains/12/applications/345";

fn config_for(base_url: &str) -> Config {
    Config {
        instance: "acme".into(),
        domain_id: 12,
        application_id: 345,
        api_key: ApiKey::new("test-token"),
        base_url: Some(base_url.to_string()),
        timeout: Duration::from_secs(5),
    }
}

fn green_payload() -> serde_json::Value {
    json!({
        "id": 345,
        "name": "Billing",
        "metrics": [{
            "snapshotLabel": "latest",
            "greenDetail": [
                {
                    "technology": "Java",
                    "greenIndexDetails": [
                        {"greenRequirement": {"id": 1, "display": "Avoid nested loops"}, "greenOccurrences": 2, "greenEffort": 240},
                        {"greenRequirement": {"id": 2, "display": "Avoid unused imports"}, "greenOccurrences": 0, "greenEffort": 5}
                    ]
                },
                {
                    "technology": "JavaScript",
                    "greenIndexDetails": [
                        {"greenRequirement": {"id": 3, "display": "Avoid polling"}, "greenOccurrences": 10, "greenEffort": 480}
                    ]
                }
            ]
        }]
    })
}

#[tokio::test]
async fn test_fetch_sends_bearer_token_and_parses_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(green_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = fetch_green_metrics(&config_for(&mock_server.uri())).await.unwrap();

    assert_eq!(
        records,
        vec![
            MetricRecord::new("Avoid nested loops", "Java", 2, 240.0),
            MetricRecord::new("Avoid unused imports", "Java", 0, 5.0),
            MetricRecord::new("Avoid polling", "JavaScript", 10, 480.0),
        ]
    );
}

#[tokio::test]
async fn test_fetch_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = fetch_green_metrics(&config_for(&mock_server.uri())).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    match err {
        RequestError::Status { body, .. } => assert_eq!(body, "invalid token"),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = fetch_green_metrics(&config_for(&mock_server.uri())).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_fetch_invalid_json_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = fetch_green_metrics(&config_for(&mock_server.uri())).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_unexpected_shape_yields_no_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metrics": [{"greenDetail": "n/a"}]})))
        .mount(&mock_server)
        .await;

    let records = fetch_green_metrics(&config_for(&mock_server.uri())).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_empty_body_yields_no_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let records = fetch_green_metrics(&config_for(&mock_server.uri())).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(green_payload())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let mut config = config_for(&mock_server.uri());
    config.timeout = Duration::from_secs(1);

    let err = fetch_green_metrics(&config).await.unwrap_err();
    assert!(
        matches!(err, RequestError::Timeout { timeout_secs: 1, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_connection_failure() {
    // Bind and release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = fetch_green_metrics(&config_for(&format!("http://127.0.0.1:{port}")))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Transport { .. }), "got {err:?}");
}
