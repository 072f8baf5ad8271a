//! Export CAST Highlight Green Impact metrics to a tech-debt spreadsheet.
//!
//! # Usage
//!
//! ```bash
//! green-metrics
//! green-metrics --config config.json --output-dir output
//! ```
//!
//! All parameters come from the configuration file (default `config.json`):
//!
//! ```json
//! {
//!     "HLInstance": "acme",
//!     "domain_id": 1234,
//!     "application_id": 98765,
//!     "api_key": "<token>"
//! }
//! ```
//!
//! The report is written to `output/green_metrics_d<domain>_a<application>_<timestamp>.xlsx`.
//! Fill in column E (cost per FTE/day) and the tech-debt column recalculates.
//!
//! Exit codes:
//! - `0`: the report was written
//! - `1`: the configuration, the request, or the write failed

use green_metrics::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Host that talks to the real process streams
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
