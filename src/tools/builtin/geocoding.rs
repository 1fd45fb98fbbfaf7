//! Geocoding and Time Zone tools (Maps web services, `key=` in the query)

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![geocode_address(), reverse_geocode(), get_timezone()]
}

pub fn geocode_address() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/geocode/json")
        .named(
            "geocode_address",
            "Convert a street address into geographic coordinates and a formatted address",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "Street address or place name to geocode"
                },
                "language": schema::language("en"),
                "region": {
                    "type": "string",
                    "description": "Region bias as a ccTLD code",
                    "default": "en"
                },
                "components": {
                    "type": "string",
                    "description": "Component filter, e.g. \"country:DE|postal_code:10115\""
                }
            },
            "required": ["address"],
            "additionalProperties": false
        }))
        .bind(Binding::query("address"))
        .bind(Binding::query("language").or("en"))
        .bind(Binding::query("region").or("en"))
        .bind(Binding::query("components"))
        .context("Failed to geocode address")
}

pub fn reverse_geocode() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/geocode/json")
        .named(
            "reverse_geocode",
            "Convert geographic coordinates into the nearest human-readable addresses",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "language": schema::language("en"),
                "result_type": {
                    "type": "string",
                    "description": "Address types to keep, separated by |, e.g. \"street_address|route\""
                },
                "location_type": {
                    "type": "string",
                    "description": "Location types to keep, e.g. \"ROOFTOP\""
                }
            },
            "required": ["latitude", "longitude"],
            "additionalProperties": false
        }))
        .bind(Binding::coordinates("latlng", "latitude", "longitude"))
        .bind(Binding::query("language").or("en"))
        .bind(Binding::query("result_type"))
        .bind(Binding::query("location_type"))
        .context("Failed to reverse geocode")
}

pub fn get_timezone() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/timezone/json")
        .named(
            "get_timezone",
            "Get the time zone and UTC/daylight offsets for a location at a given time",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "timestamp": {
                    "type": "integer",
                    "description": "Seconds since the Unix epoch; determines daylight saving"
                },
                "language": schema::language("en")
            },
            "required": ["latitude", "longitude", "timestamp"],
            "additionalProperties": false
        }))
        .bind(Binding::coordinates("location", "latitude", "longitude"))
        .bind(Binding::query("timestamp"))
        .bind(Binding::query("language").or("en"))
        .context("Failed to get time zone")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::prepare_request;

    #[test]
    fn test_geocode_with_only_address() {
        let request = prepare_request(
            &geocode_address(),
            &json!({"address": "1600 Amphitheatre Pkwy"}),
        )
        .unwrap();

        assert_eq!(request.url.host_str(), Some("maps.googleapis.com"));
        assert_eq!(request.url.path(), "/maps/api/geocode/json");
        assert_eq!(
            request.url.query(),
            Some("address=1600+Amphitheatre+Pkwy&language=en&region=en&key=test-api-key")
        );
    }

    #[test]
    fn test_geocode_overrides_defaults() {
        let request = prepare_request(
            &geocode_address(),
            &json!({"address": "Unter den Linden", "language": "de", "region": "de", "components": "country:DE"}),
        )
        .unwrap();

        assert_eq!(request.query_value("language").as_deref(), Some("de"));
        assert_eq!(request.query_value("region").as_deref(), Some("de"));
        assert_eq!(request.query_value("components").as_deref(), Some("country:DE"));
    }

    #[test]
    fn test_reverse_geocode_latlng() {
        let request = prepare_request(
            &reverse_geocode(),
            &json!({"latitude": 40.714224, "longitude": -73.961452}),
        )
        .unwrap();

        assert_eq!(
            request.query_pairs(),
            vec![
                ("latlng".to_string(), "40.714224,-73.961452".to_string()),
                ("language".to_string(), "en".to_string()),
                ("key".to_string(), "test-api-key".to_string()),
            ]
        );
    }

    #[test]
    fn test_timezone_request() {
        let request = prepare_request(
            &get_timezone(),
            &json!({"latitude": 39.6034810, "longitude": -119.6822510, "timestamp": 1331161200}),
        )
        .unwrap();

        assert_eq!(request.url.path(), "/maps/api/timezone/json");
        assert_eq!(
            request.query_value("location").as_deref(),
            Some("39.603481,-119.682251")
        );
        assert_eq!(request.query_value("timestamp").as_deref(), Some("1331161200"));
    }
}
