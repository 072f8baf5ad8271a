//! Access to the CAST Highlight REST API.
//!
//! Only one endpoint is used: the application detail resource, whose latest metrics
//! snapshot carries the Green Impact rule occurrences.

mod client;
mod metric_record;
mod payload;

pub use client::{Client, fetch_green_metrics};
pub use metric_record::MetricRecord;
pub use payload::extract_records;
