use async_trait::async_trait;
use common::api::{ApiRequest, ApiResponse, Backend, ClientError, Method};
use common::config::{FrontendConfig, CONFIG_PATH, DEFAULT_BACKEND_API_URI};
use gloo_net::http::{Request, RequestBuilder};

/// Sends [`ApiRequest`]s with `fetch`, relative to the backend base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackend {
    base_uri: String,
}

impl HttpBackend {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            base_uri: config.backend_api_uri.clone(),
        }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = request.url(&self.base_uri);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        builder.query(request.query.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let response = self
            .builder(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Reads the runtime configuration served next to the app. Without it the
/// build-time `PADDLER_API_URI` (or the local default) is used.
pub async fn load_config() -> FrontendConfig {
    let fallback = || {
        FrontendConfig::new(option_env!("PADDLER_API_URI").unwrap_or(DEFAULT_BACKEND_API_URI))
    };

    match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => match response.json::<FrontendConfig>().await {
            Ok(config) => FrontendConfig::new(config.backend_api_uri),
            Err(e) => {
                log::warn!("{} is not valid: {}", CONFIG_PATH, e);
                fallback()
            }
        },
        Ok(response) => {
            log::warn!("{} answered {}, using defaults", CONFIG_PATH, response.status());
            fallback()
        }
        Err(e) => {
            log::warn!("could not fetch {}: {}", CONFIG_PATH, e);
            fallback()
        }
    }
}
