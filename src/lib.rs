//! Maps Tools - Google Maps Platform adapters for tool-calling agents
//!
//! Each tool wraps one Google Maps Platform REST endpoint behind a JSON
//! Schema function declaration. Calling a tool issues exactly one upstream
//! request and returns either the upstream JSON verbatim, a base64 image
//! payload, or a uniform `{ "error": "..." }` envelope.
//!
//! # Overview
//!
//! - [`maps`]: declarative endpoints, request preparation and the shared executor
//! - [`tools`]: the `Tool` trait, the builtin catalog and the validating registry
//! - [`config`]: TOML configuration and API key resolution
//! - [`observability`]: structured logging
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use maps_tools::maps::{MapsClient, MapsSettings};
//! use maps_tools::tools::ToolSystem;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let maps = MapsClient::new(MapsSettings::new("my-api-key"))?;
//! let tools = ToolSystem::with_builtin_tools(maps).await?;
//!
//! let result = tools
//!     .execute_tool("geocode_address", &json!({"address": "1600 Amphitheatre Pkwy"}))
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod maps;
pub mod observability;
pub mod testing;
pub mod tools;

pub use config::{ConfigError, MapsToolsConfig, ToolConfig};
pub use error::{ErrorEnvelope, MapsError};
pub use maps::{Api, Endpoint, ImagePayload, MapsClient, MapsSettings, ToolOutput};
pub use tools::{MapsTool, Tool, ToolDescription, ToolError, ToolSystem};
