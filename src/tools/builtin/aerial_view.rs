//! Aerial View API tools

use crate::maps::{Api, Binding, Endpoint};
use serde_json::json;

pub fn endpoints() -> Vec<Endpoint> {
    vec![render_aerial_video(), lookup_aerial_video()]
}

pub fn render_aerial_video() -> Endpoint {
    Endpoint::post(Api::AerialView, "/v1/videos:renderVideo")
        .named(
            "render_aerial_video",
            "Request rendering of a cinematic aerial video orbiting a US postal address",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "US postal address to render"
                }
            },
            "required": ["address"],
            "additionalProperties": false
        }))
        .bind(Binding::body("address"))
        .context("Failed to render aerial video")
}

pub fn lookup_aerial_video() -> Endpoint {
    Endpoint::get(Api::AerialView, "/v1/videos:lookupVideo")
        .named(
            "lookup_aerial_video",
            "Look up an aerial video by video ID or address and get its state and playback URIs",
        )
        .parameters(json!({
            "type": "object",
            "properties": {
                "videoId": {
                    "type": "string",
                    "description": "ID returned by render_aerial_video"
                },
                "address": {
                    "type": "string",
                    "description": "Address the video was rendered for"
                }
            },
            "anyOf": [
                { "required": ["videoId"] },
                { "required": ["address"] }
            ],
            "additionalProperties": false
        }))
        .bind(Binding::query("videoId"))
        .bind(Binding::query("address"))
        .context("Failed to look up aerial video")
}
