//! Generic executor shared by every Maps tool

use crate::error::{ErrorEnvelope, MapsError};
use crate::maps::endpoint::{Endpoint, ResponseMode};
use crate::maps::output::{ImagePayload, ToolOutput};
use crate::maps::request::{prepare, PreparedRequest};
use crate::maps::Api;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn, Instrument};

/// Explicit configuration handed to [`MapsClient::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsSettings {
    pub api_key: String,
    /// Per-API base URL overrides; unset APIs use their production host
    pub base_urls: BTreeMap<Api, String>,
}

impl MapsSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_urls: BTreeMap::new(),
        }
    }

    pub fn with_base_url(mut self, api: Api, base_url: impl Into<String>) -> Self {
        self.base_urls.insert(api, base_url.into());
        self
    }

    /// Route every API to one host, e.g. a local mock server
    pub fn with_base_url_for_all(mut self, base_url: &str) -> Self {
        for api in Api::ALL {
            self.base_urls.insert(api, base_url.to_string());
        }
        self
    }

    pub fn base_url(&self, api: Api) -> &str {
        self.base_urls
            .get(&api)
            .map(String::as_str)
            .unwrap_or_else(|| api.default_base_url())
    }
}

/// Executes endpoints against the configured hosts. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MapsClient {
    settings: Arc<MapsSettings>,
    http: reqwest::Client,
}

impl MapsClient {
    pub fn new(settings: MapsSettings) -> Result<Self, MapsError> {
        for (api, base_url) in &settings.base_urls {
            url::Url::parse(base_url)
                .map_err(|e| MapsError::InvalidBaseUrl(format!("{api} = {base_url}: {e}")))?;
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("maps-tools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MapsError::transport)?;

        Ok(Self {
            settings: Arc::new(settings),
            http,
        })
    }

    pub fn settings(&self) -> &MapsSettings {
        &self.settings
    }

    /// Build the upstream request without sending it
    pub fn prepare(&self, endpoint: &Endpoint, args: &Value) -> Result<PreparedRequest, MapsError> {
        prepare(
            endpoint,
            self.settings.base_url(endpoint.api),
            &self.settings.api_key,
            args,
        )
    }

    /// Issue exactly one upstream call for `endpoint`. Every failure comes
    /// back as [`ToolOutput::Failed`].
    pub async fn call(&self, endpoint: &Endpoint, args: &Value) -> ToolOutput {
        let span = crate::tool_span!(tool = endpoint.name, api = %endpoint.api);

        async move {
            match self.try_call(endpoint, args).await {
                Ok(output) => output,
                Err(error) => {
                    let envelope =
                        ErrorEnvelope::new(endpoint.context, &error, &self.settings.api_key);
                    warn!(
                        tool = endpoint.name,
                        status = error.status(),
                        error = %envelope.error,
                        "Maps tool call failed"
                    );
                    ToolOutput::Failed(envelope)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_call(&self, endpoint: &Endpoint, args: &Value) -> Result<ToolOutput, MapsError> {
        if self.settings.api_key.is_empty() {
            return Err(MapsError::InvalidSettings(
                "API key is not configured".to_string(),
            ));
        }

        let request = self.prepare(endpoint, args)?;
        debug!(
            method = %request.method,
            host = request.url.host_str().unwrap_or_default(),
            path = request.url.path(),
            "Sending Maps request"
        );

        let response = self
            .build(request)
            .send()
            .await
            .map_err(MapsError::transport)?;

        match endpoint.response {
            ResponseMode::Json => decode_json(response).await,
            ResponseMode::Image => decode_image(response).await,
        }
    }

    fn build(&self, request: PreparedRequest) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder
    }
}

async fn decode_json(response: reqwest::Response) -> Result<ToolOutput, MapsError> {
    let status = response.status();
    let text = response.text().await.map_err(MapsError::transport)?;

    if !status.is_success() {
        return Err(MapsError::upstream(status, &text));
    }

    // Some feedback endpoints answer 2xx with no body at all
    if text.trim().is_empty() {
        return Ok(ToolOutput::Json(Value::Object(Map::new())));
    }

    serde_json::from_str(&text)
        .map(ToolOutput::Json)
        .map_err(|e| MapsError::Malformed(e.to_string()))
}

async fn decode_image(response: reqwest::Response) -> Result<ToolOutput, MapsError> {
    let status = response.status();
    if !status.is_success() {
        return Err(MapsError::status_only(status));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = response.bytes().await.map_err(MapsError::transport)?;

    Ok(ToolOutput::Image(ImagePayload {
        content_type,
        bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_fall_back_to_production_hosts() {
        let settings = MapsSettings::new("k").with_base_url(Api::Routes, "http://localhost:9000");

        assert_eq!(settings.base_url(Api::Routes), "http://localhost:9000");
        assert_eq!(settings.base_url(Api::Maps), "https://maps.googleapis.com");
    }

    #[test]
    fn test_with_base_url_for_all() {
        let settings = MapsSettings::new("k").with_base_url_for_all("http://127.0.0.1:1");
        for api in Api::ALL {
            assert_eq!(settings.base_url(api), "http://127.0.0.1:1");
        }
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let result = MapsClient::new(MapsSettings::new("k").with_base_url(Api::Solar, "::nope"));
        assert!(matches!(result, Err(MapsError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_prepare_uses_override_host() {
        let client = MapsClient::new(
            MapsSettings::new("k").with_base_url(Api::Maps, "http://127.0.0.1:8080"),
        )
        .unwrap();
        let endpoint = Endpoint::get(Api::Maps, "/maps/api/elevation/json");
        let request = client.prepare(&endpoint, &json!({})).unwrap();

        assert_eq!(
            request.url.as_str(),
            "http://127.0.0.1:8080/maps/api/elevation/json?key=k"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_is_an_envelope() {
        let client = MapsClient::new(MapsSettings::new("")).unwrap();
        let endpoint = Endpoint::get(Api::Maps, "/maps/api/elevation/json")
            .context("Failed to get elevation");

        let output = client.call(&endpoint, &json!({})).await;

        assert_eq!(
            output.error(),
            Some("Failed to get elevation: Invalid settings: API key is not configured")
        );
    }
}
