//! Upstream Google Maps Platform APIs and their default hosts

use serde::{Deserialize, Serialize};
use std::fmt;

/// One upstream API family. Each family lives on its own host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Api {
    /// Legacy Maps web services (geocoding, directions, street view, ...)
    Maps,
    Routes,
    Places,
    AddressValidation,
    Geolocation,
    Solar,
    AerialView,
    Pollen,
    Weather,
    AirQuality,
    AreaInsights,
}

impl Api {
    pub const ALL: [Api; 11] = [
        Api::Maps,
        Api::Routes,
        Api::Places,
        Api::AddressValidation,
        Api::Geolocation,
        Api::Solar,
        Api::AerialView,
        Api::Pollen,
        Api::Weather,
        Api::AirQuality,
        Api::AreaInsights,
    ];

    /// Production base URL for this API
    pub fn default_base_url(self) -> &'static str {
        match self {
            Api::Maps => "https://maps.googleapis.com",
            Api::Routes => "https://routes.googleapis.com",
            Api::Places => "https://places.googleapis.com",
            Api::AddressValidation => "https://addressvalidation.googleapis.com",
            Api::Geolocation => "https://www.googleapis.com",
            Api::Solar => "https://solar.googleapis.com",
            Api::AerialView => "https://aerialview.googleapis.com",
            Api::Pollen => "https://pollen.googleapis.com",
            Api::Weather => "https://weather.googleapis.com",
            Api::AirQuality => "https://airquality.googleapis.com",
            Api::AreaInsights => "https://areainsights.googleapis.com",
        }
    }

    /// Configuration key, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            Api::Maps => "maps",
            Api::Routes => "routes",
            Api::Places => "places",
            Api::AddressValidation => "address_validation",
            Api::Geolocation => "geolocation",
            Api::Solar => "solar",
            Api::AerialView => "aerial_view",
            Api::Pollen => "pollen",
            Api::Weather => "weather",
            Api::AirQuality => "air_quality",
            Api::AreaInsights => "area_insights",
        }
    }

    /// Look up an API by its configuration key
    pub fn from_name(name: &str) -> Option<Api> {
        Api::ALL.into_iter().find(|api| api.as_str() == name)
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_urls_are_https() {
        for api in Api::ALL {
            let url = url::Url::parse(api.default_base_url()).unwrap();
            assert_eq!(url.scheme(), "https", "{api} should use https");
        }
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for api in Api::ALL {
            let serialized = serde_json::to_value(api).unwrap();
            assert_eq!(serialized, api.as_str());
            assert_eq!(Api::from_name(api.as_str()), Some(api));
        }
        assert_eq!(Api::from_name("teleport"), None);
    }
}
