//! Builtin Google Maps Platform tools
//!
//! Each module declares its tools as [`Endpoint`] values; the catalog below
//! is the single list the tool system instantiates from.

pub mod address_validation;
pub mod aerial_view;
pub mod air_quality;
pub mod area_insights;
pub mod directions;
pub mod geocoding;
pub mod geolocation;
pub mod places;
pub mod pollen;
pub mod routes;
pub mod schema;
pub mod solar;
pub mod street_view;
pub mod weather;

use crate::maps::{Endpoint, MapsClient};
use crate::tools::{MapsTool, ToolError};

/// Every builtin tool, in declaration order
pub fn catalog() -> Vec<Endpoint> {
    let mut endpoints = Vec::new();
    endpoints.extend(routes::endpoints());
    endpoints.extend(geocoding::endpoints());
    endpoints.extend(directions::endpoints());
    endpoints.extend(places::endpoints());
    endpoints.extend(street_view::endpoints());
    endpoints.extend(address_validation::endpoints());
    endpoints.extend(geolocation::endpoints());
    endpoints.extend(solar::endpoints());
    endpoints.extend(aerial_view::endpoints());
    endpoints.extend(pollen::endpoints());
    endpoints.extend(weather::endpoints());
    endpoints.extend(air_quality::endpoints());
    endpoints.extend(area_insights::endpoints());
    endpoints
}

/// Builtin tool names, in declaration order
pub fn names() -> Vec<&'static str> {
    catalog().iter().map(|endpoint| endpoint.name).collect()
}

pub fn endpoint(name: &str) -> Option<Endpoint> {
    catalog().into_iter().find(|endpoint| endpoint.name == name)
}

/// Create builtin tool instance
pub fn create_builtin_tool(tool_name: &str, maps: MapsClient) -> Result<MapsTool, ToolError> {
    endpoint(tool_name)
        .map(|endpoint| MapsTool::new(endpoint, maps))
        .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))
}
