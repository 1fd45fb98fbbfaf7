//! A Maps endpoint bound to a client, exposed through the [`Tool`] trait

use crate::maps::{Endpoint, MapsClient, ToolOutput};
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::Value;

pub struct MapsTool {
    endpoint: Endpoint,
    maps: MapsClient,
}

impl MapsTool {
    pub fn new(endpoint: Endpoint, maps: MapsClient) -> Self {
        Self { endpoint, maps }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Typed invocation; failures come back as [`ToolOutput::Failed`]
    pub async fn invoke(&self, parameters: &Value) -> ToolOutput {
        self.maps.call(&self.endpoint, parameters).await
    }
}

#[async_trait]
impl Tool for MapsTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: self.endpoint.name.to_string(),
            description: self.endpoint.description.to_string(),
            parameters: self.endpoint.parameters.clone(),
        }
    }

    async fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError> {
        let Some(config) = config else {
            return Ok(());
        };

        if let Some(mask) = config.get("field_mask") {
            let mask = mask.as_str().filter(|m| !m.is_empty()).ok_or_else(|| {
                ToolError::InitializationError("field_mask must be a non-empty string".to_string())
            })?;
            if !self.endpoint.set_field_mask(mask) {
                return Err(ToolError::InitializationError(format!(
                    "{} does not send a field mask",
                    self.endpoint.name
                )));
            }
        }

        Ok(())
    }

    /// Always `Ok`: upstream failures are `{ "error": ... }` values
    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        Ok(self.invoke(parameters).await.into_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::{Api, MapsSettings};
    use crate::tools::builtin;
    use serde_json::json;

    fn tool(name: &str) -> MapsTool {
        let maps = MapsClient::new(MapsSettings::new("test-key")).unwrap();
        MapsTool::new(builtin::endpoint(name).unwrap(), maps)
    }

    #[test]
    fn test_describe_mirrors_endpoint() {
        let tool = tool("get_directions");
        let description = tool.describe();

        assert_eq!(description.name, "get_directions");
        assert_eq!(description.description, tool.endpoint().description);
        assert_eq!(description.parameters, tool.endpoint().parameters);
    }

    #[tokio::test]
    async fn test_field_mask_override() {
        let mut tool = tool("get_route");
        tool.initialize(Some(&json!({"field_mask": "routes.duration,routes.distanceMeters"})))
            .await
            .unwrap();

        assert_eq!(
            tool.endpoint().current_field_mask(),
            Some("routes.duration,routes.distanceMeters")
        );
    }

    #[tokio::test]
    async fn test_field_mask_rejected_for_endpoint_without_mask() {
        let mut tool = tool("geocode_address");
        let result = tool.initialize(Some(&json!({"field_mask": "*"}))).await;

        assert!(matches!(result, Err(ToolError::InitializationError(_))));
    }

    #[tokio::test]
    async fn test_field_mask_must_be_string() {
        let mut tool = tool("text_search");
        let result = tool.initialize(Some(&json!({"field_mask": 3}))).await;

        assert!(matches!(result, Err(ToolError::InitializationError(_))));
    }

    #[tokio::test]
    async fn test_execute_never_errors_on_upstream_failure() {
        // Port 9 (discard) on localhost is not serving HTTP
        let maps = MapsClient::new(
            MapsSettings::new("test-key").with_base_url(Api::Maps, "http://127.0.0.1:9"),
        )
        .unwrap();
        let tool = MapsTool::new(builtin::endpoint("get_elevation").unwrap(), maps);

        let result = tool
            .execute(&json!({"locations": [{"latitude": 1.0, "longitude": 2.0}]}))
            .await
            .unwrap();

        let message = result["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to get elevation data: Request failed"));
        assert!(!message.contains("test-key"));
    }
}
