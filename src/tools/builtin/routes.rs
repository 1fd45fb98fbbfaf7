//! Routes API tools
//!
//! Both tools POST a JSON body that mirrors the Routes API request verbatim,
//! authenticate with `X-Goog-Api-Key` and ask for every field with
//! `X-Goog-FieldMask: *`.

use super::schema;
use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![get_route(), compute_route_matrix()]
}

pub fn get_route() -> Endpoint {
    Endpoint::post(Api::Routes, "/directions/v2:computeRoutes")
        .named(
            "get_route",
            "Compute a route between an origin and a destination, with optional intermediate stops, travel mode and traffic awareness",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "origin": schema::waypoint("Starting point, e.g. {\"address\": \"Berlin\"}"),
                "destination": schema::waypoint("End point, e.g. {\"address\": \"Hamburg\"}"),
                "intermediates": {
                    "type": "array",
                    "items": schema::waypoint("Stop along the route"),
                    "description": "Intermediate waypoints"
                },
                "travelMode": schema::travel_mode(),
                "routingPreference": schema::routing_preference(),
                "computeAlternativeRoutes": {
                    "type": "boolean",
                    "description": "Also return alternative routes"
                },
                "routeModifiers": {
                    "type": "object",
                    "description": "Conditions such as avoidTolls, avoidHighways, avoidFerries",
                    "properties": {
                        "avoidTolls": { "type": "boolean" },
                        "avoidHighways": { "type": "boolean" },
                        "avoidFerries": { "type": "boolean" },
                        "avoidIndoor": { "type": "boolean" }
                    }
                },
                "departureTime": {
                    "type": "string",
                    "description": "RFC 3339 departure timestamp"
                },
                "languageCode": { "type": "string", "description": "BCP-47 language code" },
                "units": schema::units_system()
            },
            "required": ["origin", "destination"],
            "additionalProperties": false
        }))
        .bind(Binding::body("origin"))
        .bind(Binding::body("destination"))
        .bind(Binding::body("intermediates"))
        .bind(Binding::body("travelMode"))
        .bind(Binding::body("routingPreference"))
        .bind(Binding::body("computeAlternativeRoutes"))
        .bind(Binding::body("routeModifiers"))
        .bind(Binding::body("departureTime"))
        .bind(Binding::body("languageCode"))
        .bind(Binding::body("units"))
        .key_in_header()
        .field_mask("*")
        .context("Failed to compute route")
}

pub fn compute_route_matrix() -> Endpoint {
    Endpoint::post(Api::Routes, "/distanceMatrix/v2:computeRouteMatrix")
        .named(
            "compute_route_matrix",
            "Compute travel distance and duration for every origin/destination pair",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "origins": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": { "waypoint": schema::waypoint("Origin waypoint") },
                        "required": ["waypoint"]
                    },
                    "description": "Origins, each as {\"waypoint\": {...}}"
                },
                "destinations": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": { "waypoint": schema::waypoint("Destination waypoint") },
                        "required": ["waypoint"]
                    },
                    "description": "Destinations, each as {\"waypoint\": {...}}"
                },
                "travelMode": schema::travel_mode(),
                "routingPreference": schema::routing_preference(),
                "departureTime": {
                    "type": "string",
                    "description": "RFC 3339 departure timestamp"
                },
                "languageCode": { "type": "string", "description": "BCP-47 language code" },
                "units": schema::units_system()
            },
            "required": ["origins", "destinations"],
            "additionalProperties": false
        }))
        .bind(Binding::body("origins"))
        .bind(Binding::body("destinations"))
        .bind(Binding::body("travelMode"))
        .bind(Binding::body("routingPreference"))
        .bind(Binding::body("departureTime"))
        .bind(Binding::body("languageCode"))
        .bind(Binding::body("units"))
        .key_in_header()
        .field_mask("*")
        .context("Failed to compute route matrix")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{prepare_request, TEST_API_KEY};
    use reqwest::Method;

    #[test]
    fn test_get_route_minimal_request() {
        let request = prepare_request(
            &get_route(),
            &json!({"origin": {"address": "A"}, "destination": {"address": "B"}}),
        )
        .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://routes.googleapis.com/directions/v2:computeRoutes"
        );
        assert_eq!(
            request.body,
            Some(json!({"origin": {"address": "A"}, "destination": {"address": "B"}}))
        );
        assert_eq!(request.header("X-Goog-FieldMask"), Some("*"));
        assert_eq!(request.header("X-Goog-Api-Key"), Some(TEST_API_KEY));
    }

    #[test]
    fn test_get_route_passes_optional_fields_verbatim() {
        let request = prepare_request(
            &get_route(),
            &json!({
                "origin": {"location": {"latLng": {"latitude": 52.5, "longitude": 13.4}}},
                "destination": {"placeId": "ChIJ"},
                "travelMode": "BICYCLE",
                "computeAlternativeRoutes": true,
                "routeModifiers": {"avoidFerries": true}
            }),
        )
        .unwrap();

        let body = request.body.unwrap();
        assert_eq!(body["origin"]["location"]["latLng"]["latitude"], 52.5);
        assert_eq!(body["destination"]["placeId"], "ChIJ");
        assert_eq!(body["travelMode"], "BICYCLE");
        assert_eq!(body["computeAlternativeRoutes"], true);
        assert_eq!(body["routeModifiers"], json!({"avoidFerries": true}));
        assert!(body.get("units").is_none());
        assert!(body.get("intermediates").is_none());
    }

    #[test]
    fn test_route_matrix_request() {
        let request = prepare_request(
            &compute_route_matrix(),
            &json!({
                "origins": [{"waypoint": {"address": "A"}}],
                "destinations": [{"waypoint": {"address": "B"}}, {"waypoint": {"address": "C"}}]
            }),
        )
        .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://routes.googleapis.com/distanceMatrix/v2:computeRouteMatrix"
        );
        assert_eq!(request.header("X-Goog-FieldMask"), Some("*"));
        let body = request.body.unwrap();
        assert_eq!(body["destinations"].as_array().unwrap().len(), 2);
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
