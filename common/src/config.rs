//! Runtime configuration shared by the static host and the browser app.
//!
//! The host serves this document at [`CONFIG_PATH`]; the app fetches it once
//! at startup to learn where the backend REST API lives.

use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "/config.json";

/// Backend location used when neither the host nor the build provide one.
pub const DEFAULT_BACKEND_API_URI: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(rename = "BACKEND_API_URI")]
    pub backend_api_uri: String,
}

impl FrontendConfig {
    pub fn new(backend_api_uri: impl Into<String>) -> Self {
        Self {
            backend_api_uri: backend_api_uri.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_API_URI)
    }
}
