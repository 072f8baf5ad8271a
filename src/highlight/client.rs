//! Highlight API client
//!
//! Issues exactly one authenticated request per run; there is no retry or pagination.

use super::{MetricRecord, extract_records};
use crate::config::Config;
use crate::error::RequestError;
use core::time::Duration;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

const LOG_TARGET: &str = " highlight";

/// Highlight REST client bound to one service root and credential
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    service_root: String,
    timeout: Duration,
}

impl Client {
    /// Create a client for the service described by `config`.
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let service_root = config.service_root();
        let invalid = |message: String| RequestError::InvalidRequest {
            url: service_root.clone(),
            message,
        };

        let mut auth_val = HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose()))
            .map_err(|e| invalid(format!("api key cannot be used as a header value: {e}")))?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);

        let client = reqwest::Client::builder()
            .user_agent(concat!("green-metrics/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            service_root,
            timeout: config.timeout,
        })
    }

    /// URL of the application detail resource
    #[must_use]
    pub fn application_url(&self, domain_id: u64, application_id: u64) -> String {
        format!("{}/WS2/domains/{domain_id}/applications/{application_id}", self.service_root)
    }

    /// Fetch the Green Impact records of one application.
    ///
    /// A non-success status is an error. A success response whose JSON does not have the
    /// expected shape yields no records.
    pub async fn fetch_green_metrics(&self, domain_id: u64, application_id: u64) -> Result<Vec<MetricRecord>, RequestError> {
        let url = self.application_url(domain_id, application_id);
        log::info!(target: LOG_TARGET, "fetching green metrics from {url}");

        let resp = self.client.get(&url).send().await.map_err(|e| self.classify(&url, e))?;

        let status = resp.status();
        log::debug!(target: LOG_TARGET, "{url} answered {status}");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await.map_err(|e| self.classify(&url, e))?;
        if text.trim().is_empty() {
            log::warn!(target: LOG_TARGET, "{url} returned an empty body, treating as no data");
            return Ok(Vec::new());
        }

        let body = serde_json::from_str(&text).map_err(|source| RequestError::Decode { url, source })?;
        Ok(extract_records(body))
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> RequestError {
        if error.is_timeout() {
            RequestError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else if error.is_builder() {
            RequestError::InvalidRequest {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else {
            RequestError::Transport {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// Fetch the Green Impact records for the domain and application named in `config`.
pub async fn fetch_green_metrics(config: &Config) -> Result<Vec<MetricRecord>, RequestError> {
    Client::new(config)?
        .fetch_green_metrics(config.domain_id, config.application_id)
        .await
}
