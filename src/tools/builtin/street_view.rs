//! Street View Static API tools

use crate::maps::{Api, Binding, Endpoint};
use serde_json::{json, Value};

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_street_view(), get_street_view_metadata()]
}

/// Either a location or a panorama ID identifies the imagery
fn location_or_pano() -> Value {
    json!([
        { "required": ["location"] },
        { "required": ["pano"] }
    ])
}

fn location() -> Value {
    json!({
        "type": "string",
        "description": "Address or \"lat,lng\" to look at"
    })
}

fn pano() -> Value {
    json!({
        "type": "string",
        "description": "Specific panorama ID"
    })
}

fn radius() -> Value {
    json!({
        "type": "integer",
        "minimum": 0,
        "description": "Search radius in meters for the nearest panorama",
        "default": 50
    })
}

fn source() -> Value {
    json!({
        "type": "string",
        "enum": ["default", "outdoor"],
        "description": "Limit the search to outdoor panoramas"
    })
}

pub fn get_street_view() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/streetview")
        .named(
            "get_street_view",
            "Get a Street View photo of a location as an image",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "location": location(),
                "pano": pano(),
                "size": {
                    "type": "string",
                    "pattern": "^[0-9]+x[0-9]+$",
                    "description": "Image size as {width}x{height}, at most 640x640",
                    "default": "600x400"
                },
                "heading": {
                    "type": "number",
                    "minimum": 0,
                    "maximum": 360,
                    "description": "Compass heading of the camera"
                },
                "pitch": {
                    "type": "number",
                    "minimum": -90,
                    "maximum": 90,
                    "description": "Up or down angle of the camera"
                },
                "fov": {
                    "type": "number",
                    "minimum": 10,
                    "maximum": 120,
                    "description": "Horizontal field of view in degrees",
                    "default": 90
                },
                "radius": radius(),
                "source": source()
            },
            "anyOf": location_or_pano(),
            "additionalProperties": false
        }))
        .bind(Binding::query("location"))
        .bind(Binding::query("pano"))
        .bind(Binding::query("size").or("600x400"))
        .bind(Binding::query("heading"))
        .bind(Binding::query("pitch"))
        .bind(Binding::query("fov").or(90))
        .bind(Binding::query("radius").or(50))
        .bind(Binding::query("source"))
        .image()
        .context("Failed to get Street View image")
}

pub fn get_street_view_metadata() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/streetview/metadata")
        .named(
            "get_street_view_metadata",
            "Check whether Street View imagery exists for a location and get its panorama ID and date",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "location": location(),
                "pano": pano(),
                "radius": radius(),
                "source": source()
            },
            "anyOf": location_or_pano(),
            "additionalProperties": false
        }))
        .bind(Binding::query("location"))
        .bind(Binding::query("pano"))
        .bind(Binding::query("radius").or(50))
        .bind(Binding::query("source"))
        .context("Failed to get Street View metadata")
}
