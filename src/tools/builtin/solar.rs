//! Solar API tools

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_building_insights(), get_solar_data_layers()]
}

pub fn get_building_insights() -> Endpoint {
    Endpoint::get(Api::Solar, "/v1/buildingInsights:findClosest")
        .named(
            "get_building_insights",
            "Get rooftop solar potential for the building closest to a point: panel capacity, sunshine hours, savings",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "requiredQuality": schema::imagery_quality(),
                "experiments": {
                    "type": "array",
                    "items": { "type": "string", "enum": ["EXPANDED_COVERAGE"] }
                }
            },
            "required": ["latitude", "longitude"],
            "additionalProperties": false
        }))
        .bind(Binding::query_as("latitude", "location.latitude"))
        .bind(Binding::query_as("longitude", "location.longitude"))
        .bind(Binding::query("requiredQuality"))
        .bind(Binding::query("experiments").joined(","))
        .context("Failed to get building insights")
}

pub fn get_solar_data_layers() -> Endpoint {
    Endpoint::get(Api::Solar, "/v1/dataLayers:get")
        .named(
            "get_solar_data_layers",
            "Get URLs of solar data layers (DSM, RGB, annual and monthly flux, shade) around a point",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "radiusMeters": {
                    "type": "number",
                    "exclusiveMinimum": 0,
                    "maximum": 175,
                    "description": "Radius of the region to cover"
                },
                "view": {
                    "type": "string",
                    "enum": ["DSM_LAYER", "IMAGERY_LAYERS", "IMAGERY_AND_ANNUAL_FLUX_LAYERS", "IMAGERY_AND_ALL_FLUX_LAYERS", "FULL_LAYERS"]
                },
                "requiredQuality": schema::imagery_quality(),
                "pixelSizeMeters": {
                    "type": "number",
                    "enum": [0.1, 0.25, 0.5, 1.0]
                },
                "exactQualityRequired": { "type": "boolean" }
            },
            "required": ["latitude", "longitude", "radiusMeters"],
            "additionalProperties": false
        }))
        .bind(Binding::query_as("latitude", "location.latitude"))
        .bind(Binding::query_as("longitude", "location.longitude"))
        .bind(Binding::query("radiusMeters"))
        .bind(Binding::query("view"))
        .bind(Binding::query("requiredQuality"))
        .bind(Binding::query("pixelSizeMeters"))
        .bind(Binding::query("exactQualityRequired"))
        .context("Failed to get solar data layers")
}
