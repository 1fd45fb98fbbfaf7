//! Configuration for the maps tool system
//!
//! A TOML file names the environment variable holding the API key, optional
//! per-API base URL overrides, and which tools to enable. The key itself is
//! never stored in the file.

use crate::maps::{Api, MapsSettings};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Default environment variable for the Google Maps Platform key
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MapsToolsConfig {
    #[serde(default)]
    pub maps: MapsSection,
    /// Enabled tools; empty means every builtin tool
    #[serde(default)]
    pub tools: HashMap<String, ToolConfig>,
}

/// `[maps]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapsSection {
    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Base URL overrides keyed by API name, e.g. `routes` or `air_quality`
    #[serde(default)]
    pub base_urls: BTreeMap<String, String>,
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for MapsSection {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            base_urls: BTreeMap::new(),
        }
    }
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolConfig {
    /// Simple form: tool_name = "identifier"
    Simple(String),
    /// Complex form: tool_name = { impl = "identifier", config = { ... } }
    Complex {
        #[serde(rename = "impl")]
        implementation: String,
        #[serde(default)]
        config: HashMap<String, serde_json::Value>,
    },
}

impl ToolConfig {
    pub fn implementation(&self) -> &str {
        match self {
            ToolConfig::Simple(implementation) => implementation,
            ToolConfig::Complex { implementation, .. } => implementation,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MapsToolsConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: MapsToolsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maps.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "maps.api_key_env must not be empty".to_string(),
            ));
        }

        for (api, base_url) in &self.maps.base_urls {
            if Api::from_name(api).is_none() {
                return Err(ConfigError::InvalidConfig(format!(
                    "maps.base_urls.{api}: unknown API"
                )));
            }
            let url = Url::parse(base_url).map_err(|e| {
                ConfigError::InvalidConfig(format!("maps.base_urls.{api} '{base_url}': {e}"))
            })?;
            if url.cannot_be_a_base() {
                return Err(ConfigError::InvalidConfig(format!(
                    "maps.base_urls.{api} '{base_url}' cannot be used as a base URL"
                )));
            }
        }

        Ok(())
    }

    /// Get the API key from its environment variable
    pub fn get_api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.maps.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::EnvVarNotFound(self.maps.api_key_env.clone()))
    }

    /// Settings for [`crate::maps::MapsClient`], with the key resolved
    pub fn maps_settings(&self) -> Result<MapsSettings, ConfigError> {
        let api_key = self.get_api_key()?;
        Ok(self.settings_with_key(api_key))
    }

    /// Settings using an explicitly supplied key. Unknown API names were
    /// rejected by [`MapsToolsConfig::validate`].
    pub fn settings_with_key(&self, api_key: impl Into<String>) -> MapsSettings {
        self.maps
            .base_urls
            .iter()
            .filter_map(|(name, url)| Api::from_name(name).map(|api| (api, url)))
            .fold(MapsSettings::new(api_key), |settings, (api, url)| {
                settings.with_base_url(api, url.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[maps]
api_key_env = "MY_MAPS_KEY"

[maps.base_urls]
routes = "http://localhost:9000"
air_quality = "http://localhost:9001/prefix"

[tools]
geocode_address = "builtin"
get_route = { impl = "builtin", config = { field_mask = "routes.duration" } }
"#;

        let config = MapsToolsConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.maps.api_key_env, "MY_MAPS_KEY");
        assert_eq!(
            config.maps.base_urls.get("routes").map(String::as_str),
            Some("http://localhost:9000")
        );
        assert_eq!(config.tools.len(), 2);
        assert_eq!(config.tools["geocode_address"].implementation(), "builtin");

        match &config.tools["get_route"] {
            ToolConfig::Complex {
                implementation,
                config,
            } => {
                assert_eq!(implementation, "builtin");
                assert_eq!(config["field_mask"], "routes.duration");
            }
            other => panic!("expected complex tool config, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MapsToolsConfig::from_toml("").unwrap();
        assert_eq!(config.maps.api_key_env, DEFAULT_API_KEY_ENV);
        assert!(config.maps.base_urls.is_empty());
        assert!(config.tools.is_empty());
    }

    #[test]
    fn test_unknown_api_in_base_urls_is_rejected() {
        let result = MapsToolsConfig::from_toml(
            r#"
[maps.base_urls]
teleport = "http://localhost:1"
"#,
        );
        match result {
            Err(ConfigError::InvalidConfig(message)) => assert!(message.contains("teleport")),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let result = MapsToolsConfig::from_toml(
            r#"
[maps.base_urls]
places = "not a url"
"#,
        );
        match result {
            Err(ConfigError::InvalidConfig(message)) => assert!(message.contains("places")),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_api_key_env() {
        let result = MapsToolsConfig::from_toml(
            r#"
[maps]
api_key_env = ""
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_api_key_env_var() {
        let config = MapsToolsConfig::from_toml(
            r#"
[maps]
api_key_env = "MAPS_TOOLS_TEST_KEY_THAT_IS_NEVER_SET"
"#,
        )
        .unwrap();

        match config.maps_settings() {
            Err(ConfigError::EnvVarNotFound(name)) => {
                assert_eq!(name, "MAPS_TOOLS_TEST_KEY_THAT_IS_NEVER_SET")
            }
            other => panic!("expected missing env var, got {other:?}"),
        }
    }

    #[test]
    fn test_settings_with_key_applies_overrides() {
        let config = MapsToolsConfig::from_toml(
            r#"
[maps.base_urls]
weather = "http://127.0.0.1:8080"
"#,
        )
        .unwrap();

        let settings = config.settings_with_key("abc");
        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.base_url(Api::Weather), "http://127.0.0.1:8080");
        assert_eq!(settings.base_url(Api::Maps), Api::Maps.default_base_url());
    }
}
