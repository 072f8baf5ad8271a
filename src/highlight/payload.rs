//! Response model for `GET /WS2/domains/{domain}/applications/{application}`.

use super::MetricRecord;
use serde::Deserialize;
use serde_json::Value;

const LOG_TARGET: &str = " highlight";

/// Placeholder used when the service omits a name
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
struct ApplicationPayload {
    #[serde(default)]
    metrics: Option<Vec<MetricsSnapshot>>,
}

/// One analysis snapshot; the service lists the most recent first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricsSnapshot {
    #[serde(default)]
    green_detail: Option<Vec<GreenTechnology>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GreenTechnology {
    #[serde(default)]
    technology: Option<String>,
    #[serde(default)]
    green_index_details: Option<Vec<GreenIndexDetail>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GreenIndexDetail {
    #[serde(default)]
    green_requirement: Option<GreenRequirement>,
    #[serde(default)]
    green_occurrences: Option<u64>,
    #[serde(default)]
    green_effort: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GreenRequirement {
    #[serde(default)]
    display: Option<String>,
}

/// Flatten the Green Impact details of the latest snapshot into records, in response order.
///
/// The service is not trusted to always return the documented shape. Anything unexpected
/// is logged and produces no records, so the run still yields an (empty) report.
#[must_use]
pub fn extract_records(body: Value) -> Vec<MetricRecord> {
    if !body.is_object() {
        log::warn!(target: LOG_TARGET, "expected a JSON object in the response, found: {}", json_kind(&body));
        return Vec::new();
    }

    let payload: ApplicationPayload = match serde_json::from_value(body) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!(target: LOG_TARGET, "unexpected response shape, treating as no data: {e}");
            return Vec::new();
        }
    };

    let Some(snapshot) = payload.metrics.and_then(|m| m.into_iter().next()) else {
        log::warn!(target: LOG_TARGET, "no metrics data found in the response");
        return Vec::new();
    };

    let technologies = snapshot.green_detail.unwrap_or_default();
    if technologies.is_empty() {
        log::warn!(target: LOG_TARGET, "no green details found in the latest metrics snapshot");
        return Vec::new();
    }

    let records: Vec<_> = technologies
        .into_iter()
        .flat_map(|tech| {
            let technology = tech.technology.unwrap_or_else(|| NOT_AVAILABLE.to_string());
            tech.green_index_details.unwrap_or_default().into_iter().map(move |detail| {
                let rule = detail
                    .green_requirement
                    .and_then(|r| r.display)
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());

                MetricRecord::new(
                    rule,
                    technology.clone(),
                    detail.green_occurrences.unwrap_or(0),
                    detail.green_effort.unwrap_or(0.0),
                )
            })
        })
        .collect();

    log::info!(target: LOG_TARGET, "received {} green rule record(s)", records.len());
    records
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
