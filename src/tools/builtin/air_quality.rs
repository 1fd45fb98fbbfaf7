//! Air Quality API tool

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_air_quality()]
}

pub fn get_air_quality() -> Endpoint {
    Endpoint::post(Api::AirQuality, "/v1/currentConditions:lookup")
        .named(
            "get_air_quality",
            "Get current air quality indexes, dominant pollutant and health recommendations for a location",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "latitude": schema::latitude(),
                "longitude": schema::longitude(),
                "universalAqi": {
                    "type": "boolean",
                    "description": "Include the Universal Air Quality Index"
                },
                "languageCode": schema::language("en"),
                "extraComputations": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "enum": [
                            "HEALTH_RECOMMENDATIONS",
                            "DOMINANT_POLLUTANT_CONCENTRATION",
                            "POLLUTANT_CONCENTRATION",
                            "LOCAL_AQI",
                            "POLLUTANT_ADDITIONAL_INFO"
                        ]
                    },
                    "description": "Additional data to compute"
                }
            },
            "required": ["latitude", "longitude"],
            "additionalProperties": false
        }))
        .bind(Binding::body_at("latitude", "location.latitude"))
        .bind(Binding::body_at("longitude", "location.longitude"))
        .bind(Binding::body("universalAqi"))
        .bind(Binding::body("languageCode").or("en"))
        .bind(Binding::body("extraComputations"))
        .context("Failed to get air quality")
}
