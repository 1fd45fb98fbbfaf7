//! Request preparation
//!
//! Turns an [`Endpoint`] and caller arguments into a fully resolved
//! [`PreparedRequest`]. Everything here is pure: no I/O, no clock, no
//! environment, so the exact upstream request is testable without a server.

use crate::error::MapsError;
use crate::maps::endpoint::{
    Binding, Encoding, Endpoint, KeyPlacement, Source, Target, API_KEY_HEADER, API_KEY_QUERY_PARAM,
};
use reqwest::Method;
use serde_json::{json, Map, Value};
use url::Url;

/// Fully resolved upstream request
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl PreparedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decoded query pairs in request order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// First decoded value of a query parameter
    pub fn query_value(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Build the upstream request for `endpoint` against `base_url`
pub fn prepare(
    endpoint: &Endpoint,
    base_url: &str,
    api_key: &str,
    args: &Value,
) -> Result<PreparedRequest, MapsError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| MapsError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    push_path(&mut url, endpoint, args)?;

    let mut query: Vec<(String, String)> = Vec::new();
    let mut body = Map::new();

    for binding in &endpoint.bindings {
        let Some(value) = resolve(binding, args) else {
            continue;
        };
        match binding.target {
            Target::Query(key) => {
                if let Some(text) = query_text(&value, binding.encoding) {
                    query.push((key.to_string(), text));
                }
            }
            Target::Body(path) => insert_at(&mut body, path, value),
            Target::Path(_) => {}
        }
    }

    let mut headers: Vec<(String, String)> = endpoint
        .headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();

    match endpoint.key {
        KeyPlacement::Query => query.push((API_KEY_QUERY_PARAM.to_string(), api_key.to_string())),
        KeyPlacement::Header => headers.push((API_KEY_HEADER.to_string(), api_key.to_string())),
    }

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }

    let body = (endpoint.method == Method::POST).then_some(Value::Object(body));

    Ok(PreparedRequest {
        method: endpoint.method.clone(),
        url,
        headers,
        body,
    })
}

/// Absent, null, empty strings and empty arrays are not sent upstream
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn argument<'a>(args: &'a Value, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|value| is_present(value))
}

/// Value for a binding: the supplied argument, else its literal default
fn resolve(binding: &Binding, args: &Value) -> Option<Value> {
    let supplied = match binding.source {
        Source::Arg(name) => argument(args, name).cloned(),
        Source::Pair {
            latitude,
            longitude,
        } => match (argument(args, latitude), argument(args, longitude)) {
            (Some(lat), Some(lng)) => Some(json!({ "latitude": lat, "longitude": lng })),
            _ => None,
        },
    };
    supplied.or_else(|| binding.default.clone())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn coordinate_text(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            let lat = map.get("latitude").or_else(|| map.get("lat"))?;
            let lng = map.get("longitude").or_else(|| map.get("lng"))?;
            Some(format!("{},{}", scalar_text(lat)?, scalar_text(lng)?))
        }
        other => scalar_text(other),
    }
}

fn query_text(value: &Value, encoding: Encoding) -> Option<String> {
    match (encoding, value) {
        (Encoding::Joined(separator), Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join(separator),
        ),
        (Encoding::Coordinates, value) => coordinate_text(value),
        (Encoding::CoordinateList, Value::Array(items)) => items
            .iter()
            .map(coordinate_text)
            .collect::<Option<Vec<_>>>()
            .map(|points| points.join("|")),
        (Encoding::CoordinateList, value) => coordinate_text(value),
        (_, value) => scalar_text(value),
    }
}

fn insert_at(target: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            target.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = target
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(map) = child {
                insert_at(map, rest, value);
            }
        }
    }
}

/// Text substituted for a path placeholder
fn path_value(endpoint: &Endpoint, name: &str, args: &Value) -> Result<String, MapsError> {
    let binding = endpoint
        .bindings
        .iter()
        .find(|binding| {
            matches!(binding.target, Target::Path(placeholder) if placeholder == name)
        });

    let value = match binding {
        Some(binding) => resolve(binding, args),
        None => argument(args, name).cloned(),
    };

    value
        .as_ref()
        .and_then(scalar_text)
        .ok_or_else(|| MapsError::MissingArgument(name.to_string()))
}

fn push_path(url: &mut Url, endpoint: &Endpoint, args: &Value) -> Result<(), MapsError> {
    let base = url.to_string();
    let mut segments = url
        .path_segments_mut()
        .map_err(|_| MapsError::InvalidBaseUrl(format!("{base}: cannot be a base")))?;
    segments.pop_if_empty();

    for segment in endpoint.path.split('/').filter(|s| !s.is_empty()) {
        if let Some(name) = segment.strip_prefix("{+").and_then(|s| s.strip_suffix('}')) {
            // Resource names such as `places/ID/photos/REF` keep their slashes
            let value = path_value(endpoint, name, args)?;
            segments.extend(value.split('/').filter(|s| !s.is_empty()));
        } else if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            segments.push(&path_value(endpoint, name, args)?);
        } else {
            segments.push(segment);
        }
    }

    Ok(())
}
