//! Application configuration.
//!
//! Configuration is stored in `config.yaml` (see [`crate::paths::config_path`]) and includes:
//! - The catalog API endpoint
//! - The shared secret used to derive the `X-Auth` header
//! - Browser tuning (filter debounce, request timeout)
//!
//! `CATALOG_API_URL` and `CATALOG_SECRET` override the file when set.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, Result};
use crate::paths;

pub const API_URL_ENV: &str = "CATALOG_API_URL";
pub const SECRET_ENV: &str = "CATALOG_SECRET";

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &[
    "api_url",
    "secret",
    "filter_debounce_ms",
    "request_timeout_secs",
];

/// Main configuration structure
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Shared secret for the auth header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Quiet period before brand/price filter input is applied (default: 1000)
    #[serde(default = "default_filter_debounce_ms")]
    pub filter_debounce_ms: u64,

    /// Total request timeout in seconds (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_filter_debounce_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            secret: None,
            filter_debounce_ms: default_filter_debounce_ms(),
            request_timeout_secs: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("filter_debounce_ms", &self.filter_debounce_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Connection settings resolved from config and environment
#[derive(Clone)]
pub struct Endpoint {
    pub url: Url,
    pub secret: String,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url.as_str())
            .field("secret", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Parse and validate an API URL (absolute, http or https)
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url =
        Url::parse(raw).map_err(|e| CatalogError::InvalidUrl(raw.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::InvalidUrl(
            raw.to_string(),
            format!("unsupported scheme '{other}', expected http or https"),
        )),
    }
}

fn env_value(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            CatalogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                CatalogError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            CatalogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // The file holds the shared secret: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions)?;
        }

        Ok(())
    }

    /// Get the API URL from environment variable or config
    pub fn api_url(&self) -> Option<String> {
        env_value(API_URL_ENV).or_else(|| self.api_url.clone())
    }

    /// Get the shared secret from environment variable or config
    pub fn secret(&self) -> Option<String> {
        env_value(SECRET_ENV).or_else(|| self.secret.clone())
    }

    /// The shared secret, or a configuration error naming where to set it
    pub fn require_secret(&self) -> Result<String> {
        self.secret().ok_or_else(|| {
            CatalogError::Config(format!(
                "secret not configured. Set {SECRET_ENV} or run: catalog config set secret <value>"
            ))
        })
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Resolve everything the catalog client needs, or explain what is missing
    pub fn endpoint(&self) -> Result<Endpoint> {
        let raw_url = self.api_url().ok_or_else(|| {
            CatalogError::Config(format!(
                "API URL not configured. Set {API_URL_ENV} or run: catalog config set api_url <url>"
            ))
        })?;
        let secret = self.require_secret()?;

        Ok(Endpoint {
            url: parse_api_url(&raw_url)?,
            secret,
            timeout: self.request_timeout(),
        })
    }

    /// Set a value by key, validating it first
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                parse_api_url(value)?;
                self.api_url = Some(value.to_string());
            }
            "secret" => {
                if value.is_empty() {
                    return Err(CatalogError::Config("secret cannot be empty".to_string()));
                }
                self.secret = Some(value.to_string());
            }
            "filter_debounce_ms" => {
                self.filter_debounce_ms = value.parse().map_err(|_| {
                    CatalogError::Config(format!(
                        "invalid value '{value}' for filter_debounce_ms, expected milliseconds"
                    ))
                })?;
            }
            "request_timeout_secs" => {
                let secs: u64 = value.parse().map_err(|_| {
                    CatalogError::Config(format!(
                        "invalid value '{value}' for request_timeout_secs, expected seconds"
                    ))
                })?;
                self.request_timeout_secs = if secs == 0 { None } else { Some(secs) };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Get the stored value for a key (the file value, not environment overrides)
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "secret" => Ok(self.secret.clone()),
            "filter_debounce_ms" => Ok(Some(self.filter_debounce_ms.to_string())),
            "request_timeout_secs" => Ok(self.request_timeout_secs.map(|s| s.to_string())),
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> CatalogError {
    CatalogError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.secret.is_none());
        assert_eq!(config.filter_debounce_ms, 1000);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_value("api_url", "http://api.example.com/").unwrap();
        config.set_value("secret", "s3cret").unwrap();
        config.set_value("request_timeout_secs", "20").unwrap();

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.api_url.as_deref(), Some("http://api.example.com/"));
        assert_eq!(parsed.secret.as_deref(), Some("s3cret"));
        assert_eq!(parsed.request_timeout(), Some(Duration::from_secs(20)));
        assert_eq!(parsed.filter_debounce_ms, 1000);
    }

    #[test]
    fn test_config_missing_debounce_uses_default() {
        let config: Config = serde_yaml_ng::from_str("api_url: http://x.test/\n").unwrap();
        assert_eq!(config.filter_debounce(), Duration::from_millis(1000));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let mut config = Config::default();
        config.secret = Some("hunter2".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set_value("api_url", "not a url").is_err());
        assert!(config.set_value("api_url", "ftp://x.test/").is_err());
        assert!(config.set_value("filter_debounce_ms", "soon").is_err());
        assert!(config.set_value("secret", "").is_err());
        assert!(config.set_value("colour", "blue").is_err());
        assert!(config.get_value("colour").is_err());
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let mut config = Config::default();
        config.set_value("request_timeout_secs", "0").unwrap();
        assert!(config.request_timeout().is_none());
    }

    #[test]
    #[serial]
    fn test_endpoint_env_overrides_file() {
        let mut config = Config::default();
        config.api_url = Some("http://file.test/".to_string());
        config.secret = Some("file-secret".to_string());

        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe {
            std::env::set_var(API_URL_ENV, "https://env.test/api");
            std::env::set_var(SECRET_ENV, "env-secret");
        }
        let endpoint = config.endpoint().unwrap();
        unsafe {
            std::env::remove_var(API_URL_ENV);
            std::env::remove_var(SECRET_ENV);
        }

        assert_eq!(endpoint.url.as_str(), "https://env.test/api");
        assert_eq!(endpoint.secret, "env-secret");
    }

    #[test]
    #[serial]
    fn test_endpoint_requires_url_and_secret() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe {
            std::env::remove_var(API_URL_ENV);
            std::env::remove_var(SECRET_ENV);
        }
        let mut config = Config::default();
        let err = config.endpoint().unwrap_err().to_string();
        assert!(err.contains(API_URL_ENV), "got: {err}");

        config.api_url = Some("http://file.test/".to_string());
        let err = config.endpoint().unwrap_err().to_string();
        assert!(err.contains(SECRET_ENV), "got: {err}");
    }
}
