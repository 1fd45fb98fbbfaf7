//! Configuration loading and validation tests
//!
//! Tests focus on BEHAVIOR of configuration loading, validation, and error handling.

use maps_tools::config::{ConfigError, MapsToolsConfig, ToolConfig, DEFAULT_API_KEY_ENV};
use maps_tools::maps::{Api, MapsClient};
use maps_tools::tools::ToolSystem;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{content}").unwrap();
    temp_file
}

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let temp_file = write_config(
        r#"
[maps]
api_key_env = "MAPS_KEY_FOR_LOADING_TEST"

[maps.base_urls]
routes = "http://localhost:9000"
places = "http://localhost:9001"

[tools]
get_route = { impl = "builtin", config = { field_mask = "routes.duration" } }
text_search = "builtin"
"#,
    );

    let config = MapsToolsConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.maps.api_key_env, "MAPS_KEY_FOR_LOADING_TEST");
    assert_eq!(config.maps.base_urls.len(), 2);
    assert_eq!(config.tools.len(), 2);
    assert_eq!(
        config.tools["text_search"],
        ToolConfig::Simple("builtin".to_string())
    );
}

#[test]
fn test_missing_sections_use_defaults() {
    let temp_file = write_config("# nothing configured\n");

    let config = MapsToolsConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.maps.api_key_env, DEFAULT_API_KEY_ENV);
    assert!(config.maps.base_urls.is_empty());
    assert!(config.tools.is_empty());
}

#[test]
fn test_missing_file_is_file_read_error() {
    let result = MapsToolsConfig::load_from_file(std::path::Path::new(
        "/nonexistent/maps-tools.toml",
    ));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let temp_file = write_config("[maps\napi_key_env = ");

    let result = MapsToolsConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let temp_file = write_config(
        r#"
[maps]
api_key_env = 42
"#,
    );

    let result = MapsToolsConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let temp_file = write_config(
        r#"
[maps.base_urls]
weather = "weather.local"
"#,
    );

    let result = MapsToolsConfig::load_from_file(temp_file.path());
    match result {
        Err(ConfigError::InvalidConfig(message)) => assert!(message.contains("weather")),
        other => panic!("expected invalid config, got {other:?}"),
    }
}

#[test]
fn test_unknown_api_name_is_rejected() {
    let temp_file = write_config(
        r#"
[maps.base_urls]
street_view = "http://localhost:9000"
"#,
    );

    let result = MapsToolsConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_api_key_resolved_from_environment() {
    let env_name = "MAPS_TOOLS_CONFIG_TEST_KEY";
    std::env::set_var(env_name, "from-env");

    let temp_file = write_config(&format!(
        r#"
[maps]
api_key_env = "{env_name}"

[maps.base_urls]
solar = "http://127.0.0.1:7000"
"#
    ));

    let config = MapsToolsConfig::load_from_file(temp_file.path()).unwrap();
    let settings = config.maps_settings().unwrap();
    std::env::remove_var(env_name);

    assert_eq!(settings.api_key, "from-env");
    assert_eq!(settings.base_url(Api::Solar), "http://127.0.0.1:7000");
    assert_eq!(settings.base_url(Api::Pollen), Api::Pollen.default_base_url());
}

#[test]
fn test_empty_api_key_is_treated_as_missing() {
    let env_name = "MAPS_TOOLS_CONFIG_TEST_EMPTY_KEY";
    std::env::set_var(env_name, "");

    let config =
        MapsToolsConfig::from_toml(&format!("[maps]\napi_key_env = \"{env_name}\"\n")).unwrap();
    let result = config.get_api_key();
    std::env::remove_var(env_name);

    assert!(matches!(result, Err(ConfigError::EnvVarNotFound(name)) if name == env_name));
}

#[tokio::test]
async fn test_configured_tools_initialize_tool_system() {
    let config = MapsToolsConfig::from_toml(
        r#"
[tools]
get_route = { impl = "builtin", config = { field_mask = "routes.duration" } }
geocode_address = "builtin"
"#,
    )
    .unwrap();

    let maps = MapsClient::new(config.settings_with_key("k")).unwrap();
    let mut tool_system = ToolSystem::new(maps);
    tool_system.initialize(&config.tools).await.unwrap();

    assert_eq!(
        tool_system.list_tools(),
        vec!["geocode_address".to_string(), "get_route".to_string()]
    );
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = MapsToolsConfig::from_toml(
        r#"
[maps]
api_key_env = "KEY"

[maps.base_urls]
air_quality = "http://localhost:1234"

[tools]
get_air_quality = "builtin"
"#,
    )
    .unwrap();

    let rendered = toml::to_string_pretty(&config).unwrap();
    let reparsed = MapsToolsConfig::from_toml(&rendered).unwrap();
    assert_eq!(config, reparsed);
}
