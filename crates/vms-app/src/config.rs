//! Application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file,
//! then `VMS_*` environment variables. Call [`AppConfig::validate`] after
//! merging.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vms_core::VmsError;

/// Default backend origin.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default quiet period for search inputs.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection settings
    pub api: ApiConfig,
    /// Search input settings
    pub search: SearchConfig,
    /// Session persistence settings
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Search input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed search term triggers a fetch
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

/// Session persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File holding the persisted `token`/`role` pair; `None` keeps the
    /// session in memory only
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Configuration for tests: in-memory session, short timeouts.
    pub fn testing() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://vms.test".to_string(),
                timeout_ms: 1_000,
            },
            search: SearchConfig::default(),
            session: SessionConfig { path: None },
        }
    }

    /// Load from a TOML file. Missing keys keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, VmsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VmsError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, VmsError> {
        toml::from_str(content).map_err(|e| VmsError::config(format!("Invalid TOML: {e}")))
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, VmsError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply `VMS_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<(), VmsError> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply `VMS_*` overrides from an explicit variable list.
    pub fn merge_with_vars(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), VmsError> {
        for (key, value) in vars {
            match key.as_str() {
                "VMS_API_URL" => self.api.base_url = value,
                "VMS_TIMEOUT_MS" => self.api.timeout_ms = parse_ms(&key, &value)?,
                "VMS_SEARCH_DEBOUNCE_MS" => self.search.debounce_ms = parse_ms(&key, &value)?,
                "VMS_SESSION_PATH" => self.session.path = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Validate configuration settings.
    pub fn validate(&self) -> Result<(), VmsError> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(VmsError::config("api.base_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(VmsError::config(format!(
                "api.base_url must be an http(s) origin, got {url}"
            )));
        }
        if self.api.timeout_ms == 0 {
            return Err(VmsError::config("api.timeout_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Backend origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

fn parse_ms(key: &str, value: &str) -> Result<u64, VmsError> {
    value
        .trim()
        .parse()
        .map_err(|_| VmsError::config(format!("{key} must be a number of milliseconds, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://vms.example.org/"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://vms.example.org");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.search.debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .merge_with_vars(vec![
                ("VMS_API_URL".to_string(), "http://10.0.0.2:8080".to_string()),
                ("VMS_SEARCH_DEBOUNCE_MS".to_string(), "150".to_string()),
                ("UNRELATED".to_string(), "x".to_string()),
            ])
            .unwrap();
        assert_eq!(config.base_url(), "http://10.0.0.2:8080");
        assert_eq!(config.search.debounce_ms, 150);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = AppConfig::default();
        let err = config
            .merge_with_vars(vec![("VMS_TIMEOUT_MS".to_string(), "soon".to_string())])
            .unwrap_err();
        assert!(matches!(err, VmsError::Config { .. }));
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::testing();
        assert!(config.validate().is_ok());

        config.api.base_url = "localhost:8080".into();
        assert!(config.validate().is_err());

        config.api.base_url = "http://localhost:8080".into();
        config.api.timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
