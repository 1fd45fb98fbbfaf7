//! Parameter schema fragments shared across tools

use serde_json::{json, Value};

pub fn latitude() -> Value {
    json!({
        "type": "number",
        "minimum": -90,
        "maximum": 90,
        "description": "Latitude in decimal degrees"
    })
}

pub fn longitude() -> Value {
    json!({
        "type": "number",
        "minimum": -180,
        "maximum": 180,
        "description": "Longitude in decimal degrees"
    })
}

/// `{latitude, longitude}` object
pub fn lat_lng() -> Value {
    json!({
        "type": "object",
        "properties": {
            "latitude": latitude(),
            "longitude": longitude()
        },
        "required": ["latitude", "longitude"]
    })
}

/// Language code with a documented default
pub fn language(default: &str) -> Value {
    json!({
        "type": "string",
        "description": "Language code for the results, e.g. \"en\" or \"de\"",
        "default": default
    })
}

pub fn units_system() -> Value {
    json!({
        "type": "string",
        "enum": ["METRIC", "IMPERIAL"],
        "description": "Unit system for returned values"
    })
}

pub fn page_size(maximum: u32) -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "maximum": maximum,
        "description": "Maximum number of records per page"
    })
}

pub fn page_token() -> Value {
    json!({
        "type": "string",
        "description": "Page token from a previous response's nextPageToken"
    })
}

/// Routes API waypoint: `{address}`, `{placeId}` or `{location: {latLng}}`
pub fn waypoint(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "properties": {
            "address": { "type": "string" },
            "placeId": { "type": "string" },
            "location": {
                "type": "object",
                "properties": {
                    "latLng": lat_lng(),
                    "heading": { "type": "integer" }
                }
            },
            "via": { "type": "boolean" },
            "vehicleStopover": { "type": "boolean" },
            "sideOfRoad": { "type": "boolean" }
        }
    })
}

pub fn travel_mode() -> Value {
    json!({
        "type": "string",
        "enum": ["DRIVE", "BICYCLE", "WALK", "TWO_WHEELER", "TRANSIT"],
        "description": "Mode of transportation"
    })
}

pub fn routing_preference() -> Value {
    json!({
        "type": "string",
        "enum": ["TRAFFIC_UNAWARE", "TRAFFIC_AWARE", "TRAFFIC_AWARE_OPTIMAL"],
        "description": "How traffic is taken into account"
    })
}

/// Solar API imagery quality
pub fn imagery_quality() -> Value {
    json!({
        "type": "string",
        "enum": ["HIGH", "MEDIUM", "LOW", "BASE"],
        "description": "Minimum imagery quality accepted"
    })
}
