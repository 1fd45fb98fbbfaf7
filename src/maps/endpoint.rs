//! Declarative description of one upstream call
//!
//! Every Maps tool is an [`Endpoint`] value: which host and path to hit, which
//! HTTP method to use, how each caller argument reaches the request, where the
//! API key goes and how the response is decoded. The executor in
//! [`crate::maps::client`] is the only code that acts on these values.

use crate::maps::Api;
use reqwest::Method;
use serde_json::Value;

/// Header carrying the API key for APIs that do not take `key=`
pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";
/// Header selecting which response fields upstream should return
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";
/// Query parameter carrying the API key
pub const API_KEY_QUERY_PARAM: &str = "key";

/// Where the API key is attached to the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPlacement {
    /// Appended as the last query pair, `key=<key>`
    Query,
    /// Sent as `X-Goog-Api-Key`
    Header,
}

/// How a successful response body is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Json,
    Image,
}

/// Where an argument lands in the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Query parameter with the given name
    Query(&'static str),
    /// JSON body field; dotted paths create nested objects
    Body(&'static str),
    /// Path template placeholder with the given name
    Path(&'static str),
}

/// How a value is rendered into query text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Plain,
    /// Arrays joined by the separator
    Joined(&'static str),
    /// `{latitude, longitude}` rendered as `lat,lng`
    Coordinates,
    /// List of coordinates rendered as `lat,lng|lat,lng`
    CoordinateList,
}

/// Which caller argument(s) feed a binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Arg(&'static str),
    /// Two arguments combined into one `{latitude, longitude}` value; only
    /// present when both are
    Pair {
        latitude: &'static str,
        longitude: &'static str,
    },
}

/// Mapping of one argument to one request location
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub source: Source,
    pub target: Target,
    pub encoding: Encoding,
    /// Literal used when the argument is absent
    pub default: Option<Value>,
}

impl Binding {
    fn new(source: Source, target: Target) -> Self {
        Self {
            source,
            target,
            encoding: Encoding::Plain,
            default: None,
        }
    }

    /// Argument `name` sent as query parameter `name`
    pub fn query(name: &'static str) -> Self {
        Self::new(Source::Arg(name), Target::Query(name))
    }

    /// Argument `arg` sent as query parameter `key`
    pub fn query_as(arg: &'static str, key: &'static str) -> Self {
        Self::new(Source::Arg(arg), Target::Query(key))
    }

    /// Argument `name` sent as top-level body field `name`
    pub fn body(name: &'static str) -> Self {
        Self::new(Source::Arg(name), Target::Body(name))
    }

    /// Argument `arg` sent at dotted body path `path`
    pub fn body_at(arg: &'static str, path: &'static str) -> Self {
        Self::new(Source::Arg(arg), Target::Body(path))
    }

    /// Argument `name` substituted into the `{name}` / `{+name}` placeholder
    pub fn path(name: &'static str) -> Self {
        Self::new(Source::Arg(name), Target::Path(name))
    }

    /// Latitude/longitude arguments combined into query parameter `key`
    pub fn coordinates(key: &'static str, latitude: &'static str, longitude: &'static str) -> Self {
        Self {
            encoding: Encoding::Coordinates,
            ..Self::new(Source::Pair { latitude, longitude }, Target::Query(key))
        }
    }

    pub fn joined(mut self, separator: &'static str) -> Self {
        self.encoding = Encoding::Joined(separator);
        self
    }

    pub fn coordinate_list(mut self) -> Self {
        self.encoding = Encoding::CoordinateList;
        self
    }

    /// Literal default applied when the argument is absent
    pub fn or(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Argument names this binding reads
    pub fn arguments(&self) -> Vec<&'static str> {
        match self.source {
            Source::Arg(name) => vec![name],
            Source::Pair {
                latitude,
                longitude,
            } => vec![latitude, longitude],
        }
    }
}

/// A Maps tool as plain data
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema for the invocation arguments
    pub parameters: Value,
    pub api: Api,
    pub method: Method,
    /// Path template, e.g. `/v1/places/{placeId}`
    pub path: &'static str,
    pub bindings: Vec<Binding>,
    /// Fixed headers sent with every call
    pub headers: Vec<(&'static str, String)>,
    pub key: KeyPlacement,
    pub response: ResponseMode,
    /// Prefix of every error message, e.g. `Failed to geocode address`
    pub context: &'static str,
}

impl Endpoint {
    fn new(api: Api, method: Method, path: &'static str) -> Self {
        Self {
            name: "",
            description: "",
            parameters: serde_json::json!({ "type": "object", "properties": {} }),
            api,
            method,
            path,
            bindings: Vec::new(),
            headers: Vec::new(),
            key: KeyPlacement::Query,
            response: ResponseMode::Json,
            context: "Maps request failed",
        }
    }

    pub fn get(api: Api, path: &'static str) -> Self {
        Self::new(api, Method::GET, path)
    }

    pub fn post(api: Api, path: &'static str) -> Self {
        Self::new(api, Method::POST, path)
    }

    pub fn named(mut self, name: &'static str, description: &'static str) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    pub fn parameters(mut self, schema: Value) -> Self {
        self.parameters = schema;
        self
    }

    pub fn bind(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn field_mask(self, mask: &str) -> Self {
        self.header(FIELD_MASK_HEADER, mask)
    }

    pub fn key_in_header(mut self) -> Self {
        self.key = KeyPlacement::Header;
        self
    }

    pub fn image(mut self) -> Self {
        self.response = ResponseMode::Image;
        self
    }

    pub fn context(mut self, context: &'static str) -> Self {
        self.context = context;
        self
    }

    /// Current field mask, if this endpoint sends one
    pub fn current_field_mask(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| *name == FIELD_MASK_HEADER)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the field mask. Returns false when the endpoint sends none.
    pub fn set_field_mask(&mut self, mask: &str) -> bool {
        match self
            .headers
            .iter_mut()
            .find(|(name, _)| *name == FIELD_MASK_HEADER)
        {
            Some((_, value)) => {
                *value = mask.to_string();
                true
            }
            None => false,
        }
    }

    /// Names of the `{placeholder}`s in the path template
    pub fn path_placeholders(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| {
                segment
                    .strip_prefix("{+")
                    .or_else(|| segment.strip_prefix('{'))
                    .and_then(|rest| rest.strip_suffix('}'))
            })
            .collect()
    }

    pub fn is_image(&self) -> bool {
        self.response == ResponseMode::Image
    }
}
