//! Configuration management for the dashboard

use crate::error::{DashboardError, Result};

/// Default API origin of the BizHealth Flask service
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Origin of the metrics API, without trailing slash
    pub api_base: String,

    /// Periodic refresh in seconds (0 = refresh only on load and after submit)
    pub refresh_interval_secs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            refresh_interval_secs: 0,
        }
    }
}

impl Config {
    /// Configuration pointing at a specific API origin, defaults elsewhere
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::default().with_api_base(api_base)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_refresh_interval(mut self, secs: u32) -> Self {
        self.refresh_interval_secs = secs;
        self
    }

    /// Load configuration from a key lookup.
    ///
    /// In the browser the lookup reads `data-*` attributes of `<body>`
    /// (`data-api-base`, `data-log-level`, ...). Missing or unparsable
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            environment: lookup("environment").unwrap_or(defaults.environment),

            log_level: lookup("logLevel")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),

            refresh_interval_secs: lookup("refreshInterval")
                .map(|v| v.trim().parse().unwrap_or(0))
                .unwrap_or(defaults.refresh_interval_secs),

            ..defaults
        };

        let config = match lookup("apiBase") {
            Some(base) => config.with_api_base(base),
            None => config,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(DashboardError::Config("api_base must not be empty".into()));
        }
        let url = reqwest::Url::parse(&self.api_base)
            .map_err(|e| DashboardError::Config(format!("invalid api_base {:?}: {e}", self.api_base)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DashboardError::Config(format!(
                "api_base must be http(s), got {}",
                url.scheme()
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(DashboardError::Config(format!("unknown log level {}", self.log_level)));
        }
        Ok(())
    }

    /// Absolute URL for an API path such as `/summary`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint("/summary"), "http://127.0.0.1:5000/summary");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("apiBase", "https://metrics.example.com/"),
            ("logLevel", "DEBUG"),
            ("refreshInterval", "30"),
            ("environment", "staging"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "https://metrics.example.com");
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_bad_interval_disables_polling() {
        let config = Config::from_lookup(lookup_from(&[("refreshInterval", "soon")])).unwrap();
        assert_eq!(config.refresh_interval_secs, 0);
    }

    #[test]
    fn test_validation_rejects_bad_base() {
        assert!(Config::new("").validate().is_err());
        assert!(Config::new("not a url").validate().is_err());
        assert!(Config::new("ftp://example.com").validate().is_err());
        assert!(Config::new("http://localhost:8080").validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let err = Config::from_lookup(lookup_from(&[("logLevel", "loud")])).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
