//! Pollen API tools

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_pollen_forecast(), get_pollen_heatmap_tile()]
}

pub fn get_pollen_forecast() -> Endpoint {
    Endpoint::get(Api::Pollen, "/v1/forecast:lookup")
        .named(
            "get_pollen_forecast",
            "Get a daily pollen forecast (grass, tree, weed indices and plant details) for up to 5 days",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "days": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 5,
                    "description": "Number of forecast days",
                    "default": 5
                },
                "languageCode": schema::language("en"),
                "plantsDescription": {
                    "type": "boolean",
                    "description": "Include general information about plants and their allergenicity"
                },
                "pageSize": schema::page_size(5),
                "pageToken": schema::page_token()
            },
            "required": ["latitude", "longitude"],
            "additionalProperties": false
        }))
        .bind(Binding::query_as("latitude", "location.latitude"))
        .bind(Binding::query_as("longitude", "location.longitude"))
        .bind(Binding::query("days").or(5))
        .bind(Binding::query("languageCode").or("en"))
        .bind(Binding::query("plantsDescription"))
        .bind(Binding::query("pageSize"))
        .bind(Binding::query("pageToken"))
        .context("Failed to get pollen forecast")
}

pub fn get_pollen_heatmap_tile() -> Endpoint {
    Endpoint::get(Api::Pollen, "/v1/mapTypes/{mapType}/heatmapTiles/{zoom}/{x}/{y}")
        .named(
            "get_pollen_heatmap_tile",
            "Get a 256x256 PNG heatmap tile of pollen levels for a map tile coordinate",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "mapType": {
                    "type": "string",
                    "enum": ["TREE_UPI", "GRASS_UPI", "WEED_UPI"],
                    "description": "Pollen type shown on the tile"
                },
                "zoom": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 16,
                    "description": "Map zoom level"
                },
                "x": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Tile column"
                },
                "y": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Tile row"
                }
            },
            "required": ["mapType", "zoom", "x", "y"],
            "additionalProperties": false
        }))
        .bind(Binding::path("mapType"))
        .bind(Binding::path("zoom"))
        .bind(Binding::path("x"))
        .bind(Binding::path("y"))
        .image()
        .context("Failed to get pollen heatmap tile")
}
