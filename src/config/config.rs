use super::ApiKey;
use crate::error::ConfigError;
use core::time::Duration;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// The configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// How long to wait for the metrics service before giving up
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const LOG_TARGET: &str = "    config";

/// Settings for one export run.
///
/// Loaded once at startup and then passed by reference through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Highlight instance name, the `<instance>` in `https://<instance>.casthighlight.com`
    pub instance: String,
    pub domain_id: u64,
    pub application_id: u64,
    pub api_key: ApiKey,

    /// Replaces the `https://<instance>.casthighlight.com` service root when set
    pub base_url: Option<String>,
    pub timeout: Duration,
}

/// The on-disk shape, with every key optional so missing and mistyped values can be
/// reported by name instead of through a generic deserializer message.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "HLInstance", alias = "instance")]
    instance: Option<Value>,
    domain_id: Option<Value>,
    application_id: Option<Value>,
    api_key: Option<Value>,
    base_url: Option<Value>,
    timeout_secs: Option<Value>,
}

impl Config {
    /// Load and validate the configuration file at `path`.
    ///
    /// The format is picked from the extension: `json`, `toml`, `yml` or `yaml`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound { path: path.to_path_buf() }
            } else {
                ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config = Self::parse(path, &text)?;
        log::debug!(target: LOG_TARGET, "loaded configuration from '{}': {config:?}", path.display());
        Ok(config)
    }

    /// Parse configuration text; `path` selects the format and labels errors.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let malformed = |message: String| ConfigError::Malformed {
            path: path.to_path_buf(),
            message,
        };

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let raw: RawConfig = match extension {
            "json" => serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?,
            "toml" => toml::from_str(text).map_err(|e| malformed(e.to_string()))?,
            "yml" | "yaml" => serde_yaml::from_str(text).map_err(|e| malformed(e.to_string()))?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        let fields = FieldReader { path };

        let instance = fields.required_string("HLInstance", raw.instance)?;
        let domain_id = fields.required_id("domain_id", raw.domain_id)?;
        let application_id = fields.required_id("application_id", raw.application_id)?;
        let api_key = ApiKey::new(fields.required_string("api_key", raw.api_key)?);

        let base_url = raw
            .base_url
            .map(|v| fields.string("base_url", v))
            .transpose()?
            .map(|url| url.trim_end_matches('/').to_string());

        let timeout = match raw.timeout_secs {
            Some(v) => match v.as_u64() {
                Some(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(fields.invalid("timeout_secs", format!("expected a positive number of seconds, found {v}"))),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            instance,
            domain_id,
            application_id,
            api_key,
            base_url,
            timeout,
        })
    }

    /// Root URL of the Highlight service for this configuration
    #[must_use]
    pub fn service_root(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.casthighlight.com", self.instance))
    }
}

struct FieldReader<'a> {
    path: &'a Path,
}

impl FieldReader<'_> {
    fn missing(&self, key: &'static str) -> ConfigError {
        ConfigError::MissingKey {
            path: self.path.to_path_buf(),
            key,
        }
    }

    fn invalid(&self, key: &'static str, reason: String) -> ConfigError {
        ConfigError::InvalidValue {
            path: self.path.to_path_buf(),
            key,
            reason,
        }
    }

    fn string(&self, key: &'static str, value: Value) -> Result<String, ConfigError> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Value::String(_) => Err(self.invalid(key, "value is empty".to_string())),
            other => Err(self.invalid(key, format!("expected a string, found {other}"))),
        }
    }

    fn required_string(&self, key: &'static str, value: Option<Value>) -> Result<String, ConfigError> {
        value.map_or_else(|| Err(self.missing(key)), |v| self.string(key, v))
    }

    fn required_id(&self, key: &'static str, value: Option<Value>) -> Result<u64, ConfigError> {
        let value = value.ok_or_else(|| self.missing(key))?;
        value
            .as_u64()
            .ok_or_else(|| self.invalid(key, format!("expected a non-negative integer, found {value}")))
    }
}
