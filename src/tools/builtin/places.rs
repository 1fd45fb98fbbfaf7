//! Places tools
//!
//! Autocomplete uses the Maps web service (`key=` in the query). Text search,
//! nearby search and place details use Places API (New), which takes the key
//! and a field mask as headers. Place photos come back as raw image bytes.

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        place_autocomplete(),
        query_autocomplete(),
        text_search(),
        search_nearby(),
        get_place_details(),
        get_place_photo(),
    ]
}

pub fn place_autocomplete() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/place/autocomplete/json")
        .named(
            "place_autocomplete",
            "Suggest places matching a partial text input as the user types",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "input": { "type": "string", "description": "Text typed so far" },
                "language": schema::language("en"),
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "radius": {
                    "type": "number",
                    "description": "Bias radius in meters around latitude/longitude"
                },
                "types": {
                    "type": "string",
                    "description": "Place type filter, e.g. \"geocode\" or \"establishment\""
                },
                "components": {
                    "type": "string",
                    "description": "Country restriction, e.g. \"country:fr|country:be\""
                },
                "sessiontoken": {
                    "type": "string",
                    "description": "Session token grouping autocomplete and details calls"
                }
            },
            "required": ["input"],
            "additionalProperties": false
        }))
        .bind(Binding::query("input"))
        .bind(Binding::query("language").or("en"))
        .bind(Binding::coordinates("location", "latitude", "longitude"))
        .bind(Binding::query("radius"))
        .bind(Binding::query("types"))
        .bind(Binding::query("components"))
        .bind(Binding::query("sessiontoken"))
        .context("Failed to get place autocomplete")
}

pub fn query_autocomplete() -> Endpoint {
    Endpoint::get(Api::Maps, "/maps/api/place/queryautocomplete/json")
        .named(
            "query_autocomplete",
            "Suggest search queries for a partial text input, e.g. \"pizza near par\"",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "input": { "type": "string", "description": "Text typed so far" },
                "language": schema::language("en"),
                "offset": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Character position of the cursor within input"
                },
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "radius": {
                    "type": "number",
                    "description": "Bias radius in meters around latitude/longitude"
                }
            },
            "required": ["input"],
            "additionalProperties": false
        }))
        .bind(Binding::query("input"))
        .bind(Binding::query("language").or("en"))
        .bind(Binding::query("offset"))
        .bind(Binding::coordinates("location", "latitude", "longitude"))
        .bind(Binding::query("radius"))
        .context("Failed to get query autocomplete")
}

pub fn text_search() -> Endpoint {
    Endpoint::post(Api::Places, "/v1/places:searchText")
        .named(
            "text_search",
            "Search for places with a free-text query such as \"vegan restaurants in Sydney\"",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "textQuery": { "type": "string", "description": "Free-text search query" },
                "languageCode": { "type": "string", "description": "Language for results" },
                "regionCode": { "type": "string", "description": "CLDR region code" },
                "includedType": { "type": "string", "description": "Restrict to one place type" },
                "openNow": { "type": "boolean", "description": "Only places open now" },
                "minRating": {
                    "type": "number",
                    "minimum": 0,
                    "maximum": 5,
                    "description": "Minimum average user rating"
                },
                "priceLevels": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "enum": [
                            "PRICE_LEVEL_INEXPENSIVE",
                            "PRICE_LEVEL_MODERATE",
                            "PRICE_LEVEL_EXPENSIVE",
                            "PRICE_LEVEL_VERY_EXPENSIVE"
                        ]
                    }
                },
                "locationBias": {
                    "type": "object",
                    "description": "{\"circle\": {...}} or {\"rectangle\": {...}} to prefer"
                },
                "locationRestriction": {
                    "type": "object",
                    "description": "{\"rectangle\": {...}} results must fall inside"
                },
                "pageSize": schema::page_size(20),
                "pageToken": schema::page_token()
            },
            "required": ["textQuery"],
            "additionalProperties": false
        }))
        .bind(Binding::body("textQuery"))
        .bind(Binding::body("languageCode"))
        .bind(Binding::body("regionCode"))
        .bind(Binding::body("includedType"))
        .bind(Binding::body("openNow"))
        .bind(Binding::body("minRating"))
        .bind(Binding::body("priceLevels"))
        .bind(Binding::body("locationBias"))
        .bind(Binding::body("locationRestriction"))
        .bind(Binding::body("pageSize"))
        .bind(Binding::body("pageToken"))
        .key_in_header()
        .field_mask("*")
        .context("Failed to search places")
}

pub fn search_nearby() -> Endpoint {
    Endpoint::post(Api::Places, "/v1/places:searchNearby")
        .named(
            "search_nearby",
            "Find places of given types within a radius of a point",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "radius": {
                    "type": "number",
                    "exclusiveMinimum": 0,
                    "maximum": 50000,
                    "description": "Search radius in meters",
                    "default": 1000
                },
                "includedTypes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Place types to include, e.g. [\"restaurant\"]"
                },
                "excludedTypes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Place types to exclude"
                },
                "maxResultCount": schema::page_size(20),
                "rankPreference": { "type": "string", "enum": ["POPULARITY", "DISTANCE"] },
                "languageCode": { "type": "string", "description": "Language for results" }
            },
            "required": ["latitude", "longitude"],
            "additionalProperties": false
        }))
        .bind(Binding::body_at(
            "latitude",
            "locationRestriction.circle.center.latitude",
        ))
        .bind(Binding::body_at(
            "longitude",
            "locationRestriction.circle.center.longitude",
        ))
        .bind(Binding::body_at("radius", "locationRestriction.circle.radius").or(1000.0))
        .bind(Binding::body("includedTypes"))
        .bind(Binding::body("excludedTypes"))
        .bind(Binding::body("maxResultCount"))
        .bind(Binding::body("rankPreference"))
        .bind(Binding::body("languageCode"))
        .key_in_header()
        .field_mask("*")
        .context("Failed to search nearby places")
}

pub fn get_place_details() -> Endpoint {
    Endpoint::get(Api::Places, "/v1/places/{placeId}")
        .named(
            "get_place_details",
            "Get full details for a place: address, opening hours, ratings, reviews, photos",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "placeId": { "type": "string", "description": "Place ID, e.g. \"ChIJj61dQgK6j4AR4GeTYWZsKWw\"" },
                "languageCode": { "type": "string", "description": "Language for results" },
                "regionCode": { "type": "string", "description": "CLDR region code" },
                "sessionToken": {
                    "type": "string",
                    "description": "Autocomplete session token to close out"
                }
            },
            "required": ["placeId"],
            "additionalProperties": false
        }))
        .bind(Binding::path("placeId"))
        .bind(Binding::query("languageCode"))
        .bind(Binding::query("regionCode"))
        .bind(Binding::query("sessionToken"))
        .key_in_header()
        .field_mask("*")
        .context("Failed to get place details")
}

pub fn get_place_photo() -> Endpoint {
    Endpoint::get(Api::Places, "/v1/{+photoName}/media")
        .named(
            "get_place_photo",
            "Download a place photo as an image, given the photo resource name from place details",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "photoName": {
                    "type": "string",
                    "pattern": "^places/[^/]+/photos/[^/]+$",
                    "description": "Photo resource name, \"places/PLACE_ID/photos/PHOTO_REFERENCE\""
                },
                "maxWidthPx": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 4800,
                    "default": 400
                },
                "maxHeightPx": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 4800
                }
            },
            "required": ["photoName"],
            "additionalProperties": false
        }))
        .bind(Binding::path("photoName"))
        .bind(Binding::query("maxWidthPx").or(400))
        .bind(Binding::query("maxHeightPx"))
        .image()
        .context("Failed to get place photo")
}
