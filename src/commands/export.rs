//! The export pipeline: configuration, request, transform, spreadsheet.

use crate::config::Config;
use crate::error::ExportError;
use crate::highlight::fetch_green_metrics;
use crate::metrics::build_rows;
use crate::reports::write_report;
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "    export";

/// Fetch the metrics named by `config` and write them to a new report in `output_dir`.
///
/// Nothing is written when the request fails. An application without any rule
/// occurrences still gets a report holding only the header and a zero totals row.
pub async fn export_report(config: &Config, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let records = fetch_green_metrics(config).await?;

    let rows = build_rows(&records);
    log::info!(
        target: LOG_TARGET,
        "{} of {} rule(s) have occurrences",
        rows.len(),
        records.len()
    );
    if rows.is_empty() {
        log::warn!(target: LOG_TARGET, "no rules with occurrences found, the report will only contain totals");
    }

    Ok(write_report(&rows, config.domain_id, config.application_id, output_dir)?)
}

/// Load the configuration file and run [`export_report`].
///
/// The configuration is validated before any request is made.
pub async fn export_from_file(config_path: &Path, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let config = Config::load(config_path)?;
    export_report(&config, output_dir).await
}
