//! End-to-end tests of the `green-metrics` command against a mocked Highlight service

use core::time::Duration;
use green_metrics::Host;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test host that captures output and the requested exit code.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    let config_path = dir.join("config.json");
    let config = json!({
        "HLInstance": "acme",
        "domain_id": 12,
        "application_id": 345,
        "api_key": "test-token",
        "base_url": base_url,
        "timeout_secs": 5
    });
    fs::write(&config_path, config.to_string()).unwrap();
    config_path
}

async fn run_export(host: &mut TestHost, config: &Path, output_dir: &Path) -> green_metrics::Result<()> {
    green_metrics::run(
        host,
        [
            "green-metrics",
            "--config",
            config.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--log-level",
            "none",
        ],
    )
    .await
}

fn report_files(output_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(output_dir) else {
        return Vec::new();
    };

    let mut names: Vec<_> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

async fn mount_payload(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/WS2/domains/12/applications/345"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_export_writes_report() {
    let mock_server = MockServer::start().await;
    mount_payload(
        &mock_server,
        json!({
            "metrics": [{"greenDetail": [{"technology": "Java", "greenIndexDetails": [
                {"greenRequirement": {"display": "Avoid nested loops"}, "greenOccurrences": 2, "greenEffort": 240},
                {"greenRequirement": {"display": "Unused"}, "greenOccurrences": 0, "greenEffort": 240}
            ]}]}]
        }),
    )
    .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), &mock_server.uri());
    let output_dir = temp_dir.path().join("output");

    let mut host = TestHost::new();
    let result = run_export(&mut host, &config, &output_dir).await;
    assert!(result.is_ok(), "export should succeed: {result:?}");
    assert_eq!(host.exit_code, None);

    let files = report_files(&output_dir);
    assert_eq!(files.len(), 1, "{files:?}");
    assert!(files[0].starts_with("green_metrics_d12_a345_"), "{files:?}");
    assert!(
        Path::new(&files[0])
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
    );

    let data = fs::read(output_dir.join(&files[0])).unwrap();
    assert_eq!(&data[0..2], b"PK");

    let output = host.output_str();
    assert!(output.contains(&files[0]), "output should name the report: {output}");
    assert!(output.contains("column E"), "{output}");
}

#[tokio::test]
async fn test_export_without_occurrences_still_writes_report() {
    let mock_server = MockServer::start().await;
    mount_payload(&mock_server, json!({"metrics": []})).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), &mock_server.uri());
    let output_dir = temp_dir.path().join("output");

    let mut host = TestHost::new();
    let result = run_export(&mut host, &config, &output_dir).await;
    assert!(result.is_ok(), "empty data is not an error: {result:?}");
    assert_eq!(report_files(&output_dir).len(), 1);
}

#[tokio::test]
async fn test_export_http_error_writes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden domain"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), &mock_server.uri());
    let output_dir = temp_dir.path().join("output");

    let mut host = TestHost::new();
    let result = run_export(&mut host, &config, &output_dir).await;
    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));

    let error = host.error_str();
    assert!(error.contains("403"), "{error}");
    assert!(error.contains("forbidden domain"), "{error}");

    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_export_missing_config_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let output_dir = temp_dir.path().join("output");

    let mut host = TestHost::new();
    let result = run_export(&mut host, &temp_dir.path().join("config.json"), &output_dir).await;
    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("not found"), "{}", host.error_str());
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_export_rejects_non_integer_application_id() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    let config = json!({
        "HLInstance": "acme",
        "domain_id": 12,
        "application_id": "three-four-five",
        "api_key": "test-token",
        "base_url": mock_server.uri()
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let mut host = TestHost::new();
    let result = run_export(&mut host, &config_path, &temp_dir.path().join("output")).await;
    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("application_id"), "{}", host.error_str());
}

#[tokio::test]
async fn test_export_runs_a_second_apart_get_distinct_files() {
    let mock_server = MockServer::start().await;
    mount_payload(
        &mock_server,
        json!({
            "metrics": [{"greenDetail": [{"technology": "Go", "greenIndexDetails": [
                {"greenRequirement": {"display": "Avoid polling"}, "greenOccurrences": 1, "greenEffort": 60}
            ]}]}]
        }),
    )
    .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), &mock_server.uri());
    let output_dir = temp_dir.path().join("output");

    let mut host = TestHost::new();
    run_export(&mut host, &config, &output_dir).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    run_export(&mut host, &config, &output_dir).await.unwrap();

    let files = report_files(&output_dir);
    assert_eq!(files.len(), 2, "{files:?}");
    assert_ne!(files[0], files[1]);
}
