//! Runtime settings of the static host, read from the environment (and a
//! `.env` file when present).

use std::env;
use std::num::ParseIntError;

use common::config::{FrontendConfig, DEFAULT_BACKEND_API_URI};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PADDLER_PORT must be a port number, got {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },

    #[error("PADDLER_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backend_api_uri: String,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source; unset or blank
    /// variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PADDLER_PORT") {
            Some(value) => match value.trim().parse() {
                Ok(port) => port,
                Err(source) => return Err(ConfigError::InvalidPort { value, source }),
            },
            None => DEFAULT_PORT,
        };

        let open_browser = match var("PADDLER_OPEN_BROWSER") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(value)),
            },
            None => true,
        };

        Ok(Self {
            host: var("PADDLER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            backend_api_uri: var("BACKEND_API_URI")
                .unwrap_or_else(|| DEFAULT_BACKEND_API_URI.to_string()),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// What the frontend receives from `/config.json`.
    pub fn frontend(&self) -> FrontendConfig {
        FrontendConfig::new(&self.backend_api_uri)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.backend_api_uri, DEFAULT_BACKEND_API_URI);
        assert!(config.open_browser);
    }

    #[test]
    fn variables_override_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PADDLER_HOST", "0.0.0.0"),
            ("PADDLER_PORT", "3000"),
            ("BACKEND_API_URI", "https://api.paddler.test/"),
            ("PADDLER_OPEN_BROWSER", "false"),
        ]))
        .unwrap();

        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(!config.open_browser);
        assert_eq!(config.frontend().backend_api_uri, "https://api.paddler.test");
    }

    #[test]
    fn bad_port_is_reported() {
        let err = ServerConfig::from_lookup(lookup(&[("PADDLER_PORT", "80a")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "80a"));
    }

    #[test]
    fn bad_flag_is_reported() {
        let err =
            ServerConfig::from_lookup(lookup(&[("PADDLER_OPEN_BROWSER", "maybe")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidFlag(_)));
    }
}
