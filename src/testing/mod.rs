//! Testing utilities
//!
//! Helpers for building requests and clients against mock servers without
//! touching the environment or the production hosts.

use crate::error::MapsError;
use crate::maps::{prepare, Endpoint, MapsClient, MapsSettings, PreparedRequest};
use crate::tools::{builtin, MapsTool, ToolError};
use serde_json::Value;

pub const TEST_API_KEY: &str = "test-api-key";

/// Prepare `endpoint` against its production host with [`TEST_API_KEY`]
pub fn prepare_request(endpoint: &Endpoint, args: &Value) -> Result<PreparedRequest, MapsError> {
    prepare(endpoint, endpoint.api.default_base_url(), TEST_API_KEY, args)
}

/// Settings routing every API to `base_url`
pub fn mock_settings(base_url: &str) -> MapsSettings {
    MapsSettings::new(TEST_API_KEY).with_base_url_for_all(base_url)
}

pub fn mock_client(base_url: &str) -> Result<MapsClient, MapsError> {
    MapsClient::new(mock_settings(base_url))
}

/// Builtin tool whose every API points at `base_url`
pub fn mock_tool(name: &str, base_url: &str) -> Result<MapsTool, ToolError> {
    let maps = mock_client(base_url).map_err(|e| ToolError::InitializationError(e.to_string()))?;
    builtin::create_builtin_tool(name, maps)
}
