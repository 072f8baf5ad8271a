//! Command-line interface and orchestration
//!
//! `run` parses the arguments, sets up logging, and drives the export pipeline:
//! load the configuration, fetch the application's Green Impact records, turn them
//! into report rows, and write the spreadsheet. Errors end the run with exit status 1
//! and a message on the host's error stream.

mod common;
mod export;
mod host;
mod run;

pub use common::{LogLevel, init_logging};
pub use export::{export_from_file, export_report};
pub use host::Host;
pub use run::{DEFAULT_OUTPUT_DIR, run};
