//! Configuration loading for google-search-mcp
//!
//! Configuration comes from the environment only and is read once at startup:
//! 1. `GOOGLE_API_KEY` (required)
//! 2. `GOOGLE_SEARCH_ENGINE_ID` (required)
//! 3. `GOOGLE_SEARCH_ENDPOINT` (optional, defaults to the public Custom Search API)

use std::fmt;

use url::Url;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const SEARCH_ENGINE_ID_VAR: &str = "GOOGLE_SEARCH_ENGINE_ID";
pub const ENDPOINT_VAR: &str = "GOOGLE_SEARCH_ENDPOINT";

/// Custom Search JSON API list endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more required variables are unset or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// The endpoint override is not an absolute URL
    #[error("Invalid GOOGLE_SEARCH_ENDPOINT '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Frozen credentials and endpoint for the Google backend
#[derive(Clone)]
pub struct Config {
    api_key: String,
    search_engine_id: String,
    endpoint: Url,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Reports every missing required variable at once rather than stopping
    /// at the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key = required(API_KEY_VAR);
        let search_engine_id = required(SEARCH_ENGINE_ID_VAR);

        let (api_key, search_engine_id) = match (api_key, search_engine_id) {
            (Some(key), Some(cx)) => (key, cx),
            (key, cx) => {
                let mut missing = Vec::new();
                if key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                if cx.is_none() {
                    missing.push(SEARCH_ENGINE_ID_VAR);
                }
                return Err(ConfigError::Missing(missing));
            }
        };

        let endpoint = required(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            value: endpoint.clone(),
            source,
        })?;

        Ok(Self {
            api_key,
            search_engine_id,
            endpoint,
        })
    }

    /// Point the backend at a different endpoint (proxies, mock servers)
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn search_engine_id(&self) -> &str {
        &self.search_engine_id
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("search_engine_id", &self.search_engine_id)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    fn missing(result: Result<Config, ConfigError>) -> Vec<&'static str> {
        match result {
            Err(ConfigError::Missing(names)) => names,
            other => panic!("expected Missing error, got {:?}", other),
        }
    }

    #[test]
    fn test_both_present() {
        let config = load(&[(API_KEY_VAR, "key-123"), (SEARCH_ENGINE_ID_VAR, "cx-456")]).unwrap();
        assert_eq!(config.api_key(), "key-123");
        assert_eq!(config.search_engine_id(), "cx-456");
        assert_eq!(config.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_missing_api_key() {
        let names = missing(load(&[(SEARCH_ENGINE_ID_VAR, "cx-456")]));
        assert_eq!(names, vec![API_KEY_VAR]);
    }

    #[test]
    fn test_missing_search_engine_id() {
        let names = missing(load(&[(API_KEY_VAR, "key-123")]));
        assert_eq!(names, vec![SEARCH_ENGINE_ID_VAR]);
    }

    #[test]
    fn test_missing_both_reports_both() {
        let err = load(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: GOOGLE_API_KEY, GOOGLE_SEARCH_ENGINE_ID"
        );
    }

    #[test]
    fn test_empty_values_are_missing() {
        let names = missing(load(&[(API_KEY_VAR, ""), (SEARCH_ENGINE_ID_VAR, "")]));
        assert_eq!(names, vec![API_KEY_VAR, SEARCH_ENGINE_ID_VAR]);

        let names = missing(load(&[(API_KEY_VAR, "key-123"), (SEARCH_ENGINE_ID_VAR, "")]));
        assert_eq!(names, vec![SEARCH_ENGINE_ID_VAR]);
    }

    #[test]
    fn test_endpoint_override() {
        let config = load(&[
            (API_KEY_VAR, "k"),
            (SEARCH_ENGINE_ID_VAR, "cx"),
            (ENDPOINT_VAR, "http://127.0.0.1:9000/customsearch/v1"),
        ])
        .unwrap();
        assert_eq!(
            config.endpoint().as_str(),
            "http://127.0.0.1:9000/customsearch/v1"
        );
    }

    #[test]
    fn test_empty_endpoint_uses_default() {
        let config = load(&[(API_KEY_VAR, "k"), (SEARCH_ENGINE_ID_VAR, "cx"), (ENDPOINT_VAR, "")]).unwrap();
        assert_eq!(config.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = load(&[
            (API_KEY_VAR, "k"),
            (SEARCH_ENGINE_ID_VAR, "cx"),
            (ENDPOINT_VAR, "not a url"),
        ]);
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = load(&[(API_KEY_VAR, "super-secret"), (SEARCH_ENGINE_ID_VAR, "cx")]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
