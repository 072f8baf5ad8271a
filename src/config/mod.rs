//! Run configuration: which Highlight instance to talk to, which application to report on,
//! and the credential to use.

mod api_key;
#[expect(clippy::module_inception, reason = "Config type lives in config.rs")]
mod config;

pub use api_key::ApiKey;
pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_TIMEOUT};
