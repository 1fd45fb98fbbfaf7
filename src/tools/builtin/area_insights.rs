//! Places Aggregate (area insights) API tool

use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![compute_area_insights()]
}

pub fn compute_area_insights() -> Endpoint {
    Endpoint::post(Api::AreaInsights, "/v1:computeInsights")
        .named(
            "compute_area_insights",
            "Count or list places in an area that match type, rating, price and opening filters",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "insights": {
                    "type": "array",
                    "items": { "type": "string", "enum": ["INSIGHT_COUNT", "INSIGHT_PLACES"] },
                    "minItems": 1,
                    "description": "Which insights to compute"
                },
                "filter": {
                    "type": "object",
                    "description": "Area filter: locationFilter (circle, region or customArea), typeFilter, operatingStatus, priceLevels, ratingFilter"
                }
            },
            "required": ["insights", "filter"],
            "additionalProperties": false
        }))
        .bind(Binding::body("insights"))
        .bind(Binding::body("filter"))
        .key_in_header()
        .context("Failed to compute area insights")
}
