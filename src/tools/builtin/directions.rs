//! Directions, Distance Matrix and Elevation tools (Maps web services)

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_directions(), get_distance_matrix(), get_elevation()]
}

fn travel_mode() -> serde_json::Value {
    json!({
        "type": "string",
        "enum": ["driving", "walking", "bicycling", "transit"],
        "description": "Mode of transportation",
        "default": "driving"
    })
}

fn avoid() -> serde_json::Value {
    json!({
        "type": "array",
        "items": { "type": "string", "enum": ["tolls", "highways", "ferries", "indoor"] },
        "description": "Route features to avoid"
    })
}

fn units() -> serde_json::Value {
    json!({
        "type": "string",
        "enum": ["metric", "imperial"],
        "description": "Unit system for distances in text fields",
        "default": "metric"
    })
}

pub fn get_directions() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/directions/json")
        .named(
            "get_directions",
            "Get step-by-step directions between two places, optionally via waypoints",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "Address, place ID (\"place_id:...\") or \"lat,lng\" to start from"
                },
                "destination": {
                    "type": "string",
                    "description": "Address, place ID or \"lat,lng\" to travel to"
                },
                "mode": travel_mode(),
                "waypoints": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Intermediate locations; prefix with \"via:\" to pass through without stopping"
                },
                "alternatives": {
                    "type": "boolean",
                    "description": "Return more than one route when available"
                },
                "avoid": avoid(),
                "units": units(),
                "language": schema::language("en"),
                "departure_time": {
                    "type": ["integer", "string"],
                    "description": "Seconds since the Unix epoch, or \"now\""
                },
                "arrival_time": {
                    "type": "integer",
                    "description": "Desired arrival in seconds since the Unix epoch (transit only)"
                }
            },
            "required": ["origin", "destination"],
            "additionalProperties": false
        }))
        .bind(Binding::query("origin"))
        .bind(Binding::query("destination"))
        .bind(Binding::query("mode").or("driving"))
        .bind(Binding::query("waypoints").joined("|"))
        .bind(Binding::query("alternatives"))
        .bind(Binding::query("avoid").joined("|"))
        .bind(Binding::query("units").or("metric"))
        .bind(Binding::query("language").or("en"))
        .bind(Binding::query("departure_time"))
        .bind(Binding::query("arrival_time"))
        .context("Failed to get directions")
}

pub fn get_distance_matrix() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/distancematrix/json")
        .named(
            "get_distance_matrix",
            "Get travel distance and time for a matrix of origins and destinations",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "origins": {
                    "type": "array",
                    "minItems": 1,
                    "items": { "type": "string" },
                    "description": "Addresses, place IDs or \"lat,lng\" strings to start from"
                },
                "destinations": {
                    "type": "array",
                    "minItems": 1,
                    "items": { "type": "string" },
                    "description": "Addresses, place IDs or \"lat,lng\" strings to travel to"
                },
                "mode": travel_mode(),
                "units": units(),
                "language": schema::language("en"),
                "avoid": avoid(),
                "departure_time": {
                    "type": ["integer", "string"],
                    "description": "Seconds since the Unix epoch, or \"now\""
                }
            },
            "required": ["origins", "destinations"],
            "additionalProperties": false
        }))
        .bind(Binding::query("origins").joined("|"))
        .bind(Binding::query("destinations").joined("|"))
        .bind(Binding::query("mode").or("driving"))
        .bind(Binding::query("units").or("metric"))
        .bind(Binding::query("language").or("en"))
        .bind(Binding::query("avoid").joined("|"))
        .bind(Binding::query("departure_time"))
        .context("Failed to get distance matrix")
}

pub fn get_elevation() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/elevation/json")
        .named(
            "get_elevation",
            "Get the elevation above sea level for one or more locations",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "locations": {
                    "type": "array",
                    "minItems": 1,
                    "items": schema::lat_lng(),
                    "description": "Points to sample, each {\"latitude\": .., \"longitude\": ..}"
                }
            },
            "required": ["locations"],
            "additionalProperties": false
        }))
        .bind(Binding::query("locations").coordinate_list())
        .context("Failed to get elevation data")
}
