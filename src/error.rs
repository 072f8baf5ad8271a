//! Error taxonomy for the export pipeline.
//!
//! Each pipeline stage fails with its own error type so callers (and tests) can tell
//! a bad configuration apart from a failed request or an unwritable output path.
//! All of them are terminal for a run; nothing is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure of an export run
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Problems locating, reading, or validating the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read configuration file '{}': {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("unable to parse configuration file '{}': {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("configuration file '{}' is missing required key '{key}'", path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("configuration file '{}' has an invalid value for '{key}': {reason}", path.display())]
    InvalidValue {
        path: PathBuf,
        key: &'static str,
        reason: String,
    },

    #[error("unsupported configuration file extension '{extension}'")]
    UnsupportedFormat { extension: String },
}

/// Problems talking to the metrics service.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("invalid request to '{url}': {message}")]
    InvalidRequest { url: String, message: String },

    #[error("request to '{url}' timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("request to '{url}' failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("request to '{url}' returned HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("response from '{url}' is not valid JSON: {source}")]
    Decode { url: String, source: serde_json::Error },
}

impl RequestError {
    /// The HTTP status code, when the service answered with a non-success status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Problems producing the spreadsheet on disk.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("unable to create output directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("unable to build spreadsheet: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("unable to write spreadsheet data: {0}")]
    Io(#[from] io::Error),

    #[error("unable to write report '{}': {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}
