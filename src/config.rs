//! Client configuration
//!
//! Settings for reaching the ODB endpoint, loaded from an optional YAML file
//! and overridden from the environment:
//!
//! ```yaml
//! region: us-east-1
//! timeout_secs: 30
//! max_retries: 3
//! backoff:
//!   type: exponential
//!   initial_ms: 100
//!   max_ms: 20000
//! rate_limit:
//!   requests_per_second: 10
//!   burst_size: 10
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::odb::HttpOdbClient;
use crate::types::BackoffType;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "ODB_ENDPOINT";

/// Environment variable overriding the region
pub const ENV_REGION: &str = "AWS_REGION";

// ============================================================================
// Client Config
// ============================================================================

/// How to reach the ODB API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Endpoint URL; derived from the region when unset
    pub endpoint: Option<String>,

    /// AWS region
    pub region: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum number of retries per request
    pub max_retries: u32,

    /// Retry backoff
    pub backoff: BackoffConfig,

    /// Client-side rate limit; `null` disables it
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: default_region(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffConfig::default(),
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    20_000
}

// ============================================================================
// Loading
// ============================================================================

impl ClientConfig {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Load the effective configuration: file (if any), then environment, then validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_env(|key| std::env::var(key).ok());
        config.validate()?;
        debug!(endpoint = %config.endpoint()?, region = %config.region, "client config loaded");
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(region) = lookup(ENV_REGION).filter(|v| !v.is_empty()) {
            self.region = region;
        }
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(Error::invalid_value("region", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if self.backoff.initial_ms > self.backoff.max_ms {
            return Err(Error::invalid_value(
                "backoff",
                format!(
                    "initial_ms ({}) exceeds max_ms ({})",
                    self.backoff.initial_ms, self.backoff.max_ms
                ),
            ));
        }
        self.endpoint()?;
        Ok(())
    }

    /// The endpoint URL, derived from the region when not configured
    pub fn endpoint(&self) -> Result<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://odb.{}.api.aws", self.region),
        };
        let url = Url::parse(&raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(url)
    }

    // ========================================================================
    // Client Construction
    // ========================================================================

    /// HTTP client settings for this configuration
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.endpoint()?.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff.backoff_type,
                Duration::from_millis(self.backoff.initial_ms),
                Duration::from_millis(self.backoff.max_ms),
            );

        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }

        Ok(builder.build())
    }

    /// Build the ODB client for this configuration
    pub fn build_client(&self) -> Result<HttpOdbClient> {
        let http = HttpClient::with_config(self.http_config()?)?;
        Ok(HttpOdbClient::new(http))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::default()));
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://odb.us-east-1.api.aws/"
        );
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
endpoint: http://localhost:4566
region: eu-west-1
timeout_secs: 5
max_retries: 1
backoff:
  type: linear
  initial_ms: 50
  max_ms: 500
rate_limit:
  requests_per_second: 2
  burst_size: 4
user_agent: inventory-test/1.0
"#;
        let config = ClientConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.backoff.backoff_type, BackoffType::Linear);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 4)));

        let http = config.http_config().unwrap();
        assert_eq!(http.base_url.as_deref(), Some("http://localhost:4566/"));
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.max_retries, 1);
        assert_eq!(http.initial_backoff, Duration::from_millis(50));
        assert_eq!(http.user_agent, "inventory-test/1.0");
    }

    #[test]
    fn test_null_rate_limit_disables_limiter() {
        let config = ClientConfig::from_yaml("rate_limit: null").unwrap();
        assert_eq!(config.rate_limit, None);
        assert!(config.http_config().unwrap().rate_limit.is_none());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ClientConfig::from_yaml("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ClientConfig::from_yaml("regoin: us-west-2").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::default().with_env(env(&[
            ("AWS_REGION", "ap-southeast-2"),
            ("ODB_ENDPOINT", ""),
        ]));
        assert_eq!(config.region, "ap-southeast-2");
        assert_eq!(config.endpoint, None);
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://odb.ap-southeast-2.api.aws/"
        );

        let config = config.with_env(env(&[("ODB_ENDPOINT", "http://127.0.0.1:9000")]));
        assert_eq!(config.endpoint().unwrap().as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let config = ClientConfig {
            endpoint: Some("ftp://odb.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));

        let config = ClientConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            backoff: BackoffConfig {
                initial_ms: 1_000,
                max_ms: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "region: us-west-2\nmax_retries: 7").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.max_retries, 7);
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/odb.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_build_client() {
        let config = ClientConfig {
            endpoint: Some("http://localhost:4566".to_string()),
            rate_limit: None,
            ..Default::default()
        };
        let client = config.build_client().unwrap();
        assert!(format!("{:?}", client.http()).contains("has_rate_limiter: false"));
    }
}
