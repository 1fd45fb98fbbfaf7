//! Google Maps Platform plumbing shared by every tool
//!
//! An [`Endpoint`] describes one upstream call as data. [`prepare`] turns it
//! and the caller's arguments into a [`PreparedRequest`]; the [`MapsClient`]
//! sends it and folds the outcome into a [`ToolOutput`].

pub mod api;
pub mod client;
pub mod endpoint;
pub mod output;
pub mod request;

pub use api::Api;
pub use client::{MapsClient, MapsSettings};
pub use endpoint::{
    Binding, Encoding, Endpoint, KeyPlacement, ResponseMode, Source, Target, API_KEY_HEADER,
    API_KEY_QUERY_PARAM, FIELD_MASK_HEADER,
};
pub use output::{ImagePayload, ToolOutput};
pub use request::{prepare, PreparedRequest};
