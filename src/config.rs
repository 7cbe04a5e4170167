//! Client configuration.
//!
//! Values come from [`ClientConfig::default`], the environment or a YAML file,
//! and can be overridden per field on the [`VkClientBuilder`](crate::VkClientBuilder).
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `VK_API_BASE_URL` | `base_url` | `https://api.vk.com/method/` |
//! | `VK_API_VERSION` | `api_version` | `5.131` (empty disables the `v` field) |
//! | `VK_HTTP_TIMEOUT_SECS` | `timeout_secs` | `30` |
//! | `VK_PROXY_URL` | `proxy_url` | none |
//! | `VK_USER_AGENT` | `user_agent` | none |

use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.vk.com/method/";
pub const DEFAULT_API_VERSION: &str = "5.131";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Value of the `v` field sent with every call; `None` leaves it out.
    pub api_version: Option<String>,
    pub timeout_secs: u64,
    pub proxy_url: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: Some(DEFAULT_API_VERSION.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy_url: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the `VK_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_lookup(|key| env::var(key).ok())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid client configuration: {}", e),
                ErrorContext::new().with_source("client_config"),
            )
        })?;
        Ok(config.normalized())
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to read configuration: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("client_config"),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("VK_API_BASE_URL").filter(|s| !s.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(version) = lookup("VK_API_VERSION") {
            self.api_version = Some(version);
        }
        if let Some(secs) = lookup("VK_HTTP_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            self.timeout_secs = secs;
        }
        if let Some(proxy) = lookup("VK_PROXY_URL") {
            self.proxy_url = Some(proxy);
        }
        if let Some(agent) = lookup("VK_USER_AGENT") {
            self.user_agent = Some(agent);
        }
        self.normalized()
    }

    /// Blank optional strings mean "unset".
    fn normalized(mut self) -> Self {
        fn blank_to_none(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        self.api_version = blank_to_none(self.api_version);
        self.proxy_url = blank_to_none(self.proxy_url);
        self.user_agent = blank_to_none(self.user_agent);
        self
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("Unsupported URL scheme: {}", parsed.scheme()),
                ErrorContext::new().with_field_path("base_url"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_yaml_file() {
        let path = std::env::temp_dir().join(format!("vk-ads-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "base_url: http://127.0.0.1:8080/method/\n\
             api_version: \"5.199\"\n\
             timeout_secs: 7\n\
             user_agent: ads-bot/1.0\n",
        )
        .unwrap();

        let cfg = ClientConfig::from_yaml_file(&path);
        std::fs::remove_file(&path).ok();
        let cfg = cfg.unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080/method/");
        assert_eq!(cfg.api_version.as_deref(), Some("5.199"));
        assert_eq!(cfg.timeout_secs, 7);
        assert_eq!(cfg.user_agent.as_deref(), Some("ads-bot/1.0"));
        assert_eq!(cfg.proxy_url, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_missing_yaml_file() {
        let name = format!("vk-ads-missing-{}.yaml", uuid::Uuid::new_v4());
        let path = std::env::temp_dir().join(name);
        let err = ClientConfig::from_yaml_file(&path).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_defaults() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.api_version.as_deref(), Some(DEFAULT_API_VERSION));
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VK_API_BASE_URL", "http://localhost:8080/method/"),
            ("VK_API_VERSION", ""),
            ("VK_HTTP_TIMEOUT_SECS", "5"),
            ("VK_USER_AGENT", "ads-bot/1.0"),
        ]
        .into_iter()
        .collect();
        let cfg = ClientConfig::default().with_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.base_url, "http://localhost:8080/method/");
        assert_eq!(cfg.api_version, None);
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.user_agent.as_deref(), Some("ads-bot/1.0"));
        assert_eq!(cfg.proxy_url, None);
    }

    #[test]
    fn test_bad_timeout_is_ignored() {
        let cfg = ClientConfig::default()
            .with_lookup(|k| (k == "VK_HTTP_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_yaml_partial_config() {
        let yaml = "base_url: https://example.test/method/\ntimeout_secs: 10\n";
        let cfg = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.base_url, "https://example.test/method/");
        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.api_version.as_deref(), Some(DEFAULT_API_VERSION));
    }

    #[test]
    fn test_yaml_type_error() {
        let err = ClientConfig::from_yaml_str("timeout_secs: [1, 2]").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Invalid client configuration"));
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let cfg = ClientConfig {
            base_url: "method/".into(),
            ..ClientConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("base_url")
        );
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        let cfg = ClientConfig {
            base_url: "ftp://example.test/".into(),
            ..ClientConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
