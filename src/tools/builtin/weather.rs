//! Weather API tools

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::{json, Value};

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_weather_history(), get_current_weather(), get_daily_forecast()]
}

fn location_bindings(endpoint: Endpoint) -> Endpoint {
    endpoint
        .bind(Binding::query_as("latitude", "location.latitude"))
        .bind(Binding::query_as("longitude", "location.longitude"))
}

fn parameters(extra: Value) -> Value {
    let mut properties = json!({
        "latitude": schema::latitude(),
        "longitude": schema::longitude(),
        "unitsSystem": schema::units_system(),
        "languageCode": schema::language("en")
    });
    if let (Some(target), Value::Object(extra)) = (properties.as_object_mut(), extra) {
        target.extend(extra);
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": ["latitude", "longitude"],
        "additionalProperties": false
    })
}

pub fn get_weather_history() -> Endpoint {
    let endpoint = Endpoint::get(Api::Weather, "/v1/history/hours:lookup")
        .named(
            "get_weather_history",
            "Get hourly historical weather conditions for a location, up to the last 24 hours",
        )
        .parameters(parameters(json!({
            "hours": {
                "type": "integer",
                "minimum": 1,
                "maximum": 24,
                "description": "Number of past hours to return",
                "default": 24
            },
            "pageSize": schema::page_size(24),
            "pageToken": schema::page_token()
        })));

    location_bindings(endpoint)
        .bind(Binding::query("hours").or(24))
        .bind(Binding::query("unitsSystem"))
        .bind(Binding::query("languageCode").or("en"))
        .bind(Binding::query("pageSize"))
        .bind(Binding::query("pageToken"))
        .context("Failed to get weather history")
}

pub fn get_current_weather() -> Endpoint {
    let endpoint = Endpoint::get(Api::Weather, "/v1/currentConditions:lookup")
        .named(
            "get_current_weather",
            "Get current weather conditions for a location: temperature, precipitation, wind, humidity",
        )
        .parameters(parameters(json!({})));

    location_bindings(endpoint)
        .bind(Binding::query("unitsSystem"))
        .bind(Binding::query("languageCode").or("en"))
        .context("Failed to get current weather")
}

pub fn get_daily_forecast() -> Endpoint {
    let endpoint = Endpoint::get(Api::Weather, "/v1/forecast/days:lookup")
        .named(
            "get_daily_forecast",
            "Get a daily weather forecast for a location, up to 10 days",
        )
        .parameters(parameters(json!({
            "days": {
                "type": "integer",
                "minimum": 1,
                "maximum": 10,
                "description": "Number of forecast days",
                "default": 5
            },
            "pageSize": schema::page_size(10),
            "pageToken": schema::page_token()
        })));

    location_bindings(endpoint)
        .bind(Binding::query("days").or(5))
        .bind(Binding::query("unitsSystem"))
        .bind(Binding::query("languageCode").or("en"))
        .bind(Binding::query("pageSize"))
        .bind(Binding::query("pageToken"))
        .context("Failed to get daily forecast")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::prepare_request;

    #[test]
    fn test_history_defaults() {
        let request = prepare_request(
            &get_weather_history(),
            &json!({"latitude": 37.4220, "longitude": -122.0841}),
        )
        .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://weather.googleapis.com/v1/history/hours:lookup?location.latitude=37.422&location.longitude=-122.0841&hours=24&languageCode=en&key=test-api-key"
        );
    }

    #[test]
    fn test_history_pagination_pass_through() {
        let request = prepare_request(
            &get_weather_history(),
            &json!({
                "latitude": 37.4220,
                "longitude": -122.0841,
                "hours": 6,
                "unitsSystem": "IMPERIAL",
                "pageSize": 3,
                "pageToken": "next-page"
            }),
        )
        .unwrap();

        assert_eq!(request.query_value("hours").as_deref(), Some("6"));
        assert_eq!(request.query_value("unitsSystem").as_deref(), Some("IMPERIAL"));
        assert_eq!(request.query_value("pageSize").as_deref(), Some("3"));
        assert_eq!(request.query_value("pageToken").as_deref(), Some("next-page"));
    }

    #[test]
    fn test_current_conditions_has_no_paging() {
        let endpoint = get_current_weather();
        let properties = endpoint.parameters["properties"].as_object().unwrap();

        assert!(!properties.contains_key("pageToken"));
        assert!(!properties.contains_key("hours"));

        let request =
            prepare_request(&endpoint, &json!({"latitude": 51.5, "longitude": -0.12})).unwrap();
        assert_eq!(request.url.path(), "/v1/currentConditions:lookup");
        assert_eq!(request.query_value("languageCode").as_deref(), Some("en"));
    }

    #[test]
    fn test_daily_forecast_days_default() {
        let request = prepare_request(
            &get_daily_forecast(),
            &json!({"latitude": 51.5, "longitude": -0.12}),
        )
        .unwrap();

        assert_eq!(request.url.path(), "/v1/forecast/days:lookup");
        assert_eq!(request.query_value("days").as_deref(), Some("5"));
    }
}
