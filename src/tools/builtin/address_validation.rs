//! Address Validation API tools

use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![validate_address(), provide_validation_feedback()]
}

pub fn validate_address() -> Endpoint {
    Endpoint::post(Api::AddressValidation, "/v1:validateAddress")
        .named(
            "validate_address",
            "Validate a postal address, standardize it and report which components were confirmed, inferred or corrected",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "object",
                    "description": "Postal address, e.g. {\"regionCode\": \"US\", \"addressLines\": [\"1600 Amphitheatre Pkwy\", \"Mountain View, CA\"]}",
                    "properties": {
                        "regionCode": { "type": "string" },
                        "languageCode": { "type": "string" },
                        "postalCode": { "type": "string" },
                        "administrativeArea": { "type": "string" },
                        "locality": { "type": "string" },
                        "addressLines": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["addressLines"]
                },
                "previousResponseId": {
                    "type": "string",
                    "description": "responseId of the first validation when re-validating the same address"
                },
                "enableUspsCass": {
                    "type": "boolean",
                    "description": "Enable USPS CASS processing (US and PR only)"
                },
                "languageOptions": {
                    "type": "object",
                    "properties": { "returnEnglishLatinAddress": { "type": "boolean" } }
                },
                "sessionToken": {
                    "type": "string",
                    "description": "Autocomplete session token"
                }
            },
            "required": ["address"],
            "additionalProperties": false
        }))
        .bind(Binding::body("address"))
        .bind(Binding::body("previousResponseId"))
        .bind(Binding::body("enableUspsCass"))
        .bind(Binding::body("languageOptions"))
        .bind(Binding::body("sessionToken"))
        .context("Failed to validate address")
}

pub fn provide_validation_feedback() -> Endpoint {
    Endpoint::post(Api::AddressValidation, "/v1:provideValidationFeedback")
        .named(
            "provide_validation_feedback",
            "Report which version of a validated address was finally used",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "conclusion": {
                    "type": "string",
                    "enum": [
                        "VALIDATED_VERSION_USED",
                        "USER_VERSION_USED",
                        "UNVALIDATED_VERSION_USED",
                        "UNUSED"
                    ],
                    "description": "Outcome of the validation sequence"
                },
                "responseId": {
                    "type": "string",
                    "description": "responseId of the first validate_address call in the sequence"
                }
            },
            "required": ["conclusion", "responseId"],
            "additionalProperties": false
        }))
        .bind(Binding::body("conclusion"))
        .bind(Binding::body("responseId"))
        .context("Failed to provide validation feedback")
}
