//! Geolocation API tool

use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![geolocate()]
}

pub fn geolocate() -> Endpoint {
    Endpoint::post(Api::Geolocation, "/geolocation/v1/geolocate")
        .named(
            "geolocate",
            "Estimate a device location from nearby cell towers and WiFi access points, or from the caller's IP",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "considerIp": {
                    "type": "boolean",
                    "description": "Fall back to IP geolocation when signals are insufficient"
                },
                "homeMobileCountryCode": { "type": "integer" },
                "homeMobileNetworkCode": { "type": "integer" },
                "radioType": { "type": "string", "enum": ["lte", "gsm", "cdma", "wcdma", "nr"] },
                "carrier": { "type": "string" },
                "cellTowers": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "cellId": { "type": "integer" },
                            "locationAreaCode": { "type": "integer" },
                            "mobileCountryCode": { "type": "integer" },
                            "mobileNetworkCode": { "type": "integer" },
                            "signalStrength": { "type": "integer" }
                        }
                    }
                },
                "wifiAccessPoints": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "macAddress": { "type": "string" },
                            "signalStrength": { "type": "integer" },
                            "channel": { "type": "integer" }
                        },
                        "required": ["macAddress"]
                    }
                }
            },
            "additionalProperties": false
        }))
        .bind(Binding::body("considerIp"))
        .bind(Binding::body("homeMobileCountryCode"))
        .bind(Binding::body("homeMobileNetworkCode"))
        .bind(Binding::body("radioType"))
        .bind(Binding::body("carrier"))
        .bind(Binding::body("cellTowers"))
        .bind(Binding::body("wifiAccessPoints"))
        .context("Failed to geolocate")
}
