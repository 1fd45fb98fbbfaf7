//! Tool system for tool-calling agents
//!
//! Tools describe themselves with a JSON Schema and execute against validated
//! parameters. Parameters are validated here, at the framework boundary, so
//! individual tools carry no validation logic of their own.

use crate::config::ToolConfig;
use crate::maps::MapsClient;
use async_trait::async_trait;
use jsonschema::Validator;
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

pub mod builtin;
pub mod maps_tool;

pub use maps_tool::MapsTool;

/// Tool interface consumed by the agent framework
#[async_trait]
pub trait Tool: Send + Sync {
    /// JSON-serializable structure conforming to a JSON Schema Draft 2020-12 subset
    fn describe(&self) -> ToolDescription;

    /// Receives the tool's configuration table, called once at startup
    async fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError>;

    /// Receives parameters matching the schema from describe()
    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError>;

    /// Performs cleanup (close connections, release resources)
    async fn shutdown(&mut self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Tool name, description and parameter schema
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDescription {
    /// Function declaration in the shape tool-calling models expect
    pub fn declaration(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

/// A tool with its parameter schema compiled once at registration
struct RegisteredTool {
    tool: Box<dyn Tool>,
    validator: Validator,
}

/// Registry of configured tools
pub struct ToolSystem {
    maps: MapsClient,
    tools: HashMap<String, RegisteredTool>,
}

impl ToolSystem {
    pub fn new(maps: MapsClient) -> Self {
        Self {
            maps,
            tools: HashMap::new(),
        }
    }

    /// Tool system with every builtin Maps tool registered
    pub async fn with_builtin_tools(maps: MapsClient) -> Result<Self, ToolError> {
        let mut system = Self::new(maps);
        system.initialize(&HashMap::new()).await?;
        Ok(system)
    }

    /// Initialize from the `[tools]` table. An empty table enables every
    /// builtin tool with default settings.
    pub async fn initialize(
        &mut self,
        tool_configs: &HashMap<String, ToolConfig>,
    ) -> Result<(), ToolError> {
        if tool_configs.is_empty() {
            for endpoint in builtin::catalog() {
                let mut tool = MapsTool::new(endpoint, self.maps.clone());
                tool.initialize(None).await?;
                self.register(Box::new(tool))?;
            }
            info!(count = self.tools.len(), "Registered all builtin tools");
            return Ok(());
        }

        for (tool_name, tool_config) in tool_configs {
            let mut tool = self.create_tool(tool_name, tool_config)?;

            let config = match tool_config {
                ToolConfig::Simple(_) => None,
                ToolConfig::Complex { config, .. } => Some(
                    serde_json::to_value(config)
                        .map_err(|e| ToolError::InitializationError(e.to_string()))?,
                ),
            };

            tool.initialize(config.as_ref()).await?;
            debug!(tool = %tool_name, "Tool initialized");

            self.insert(tool_name.clone(), tool)?;
        }

        info!(count = self.tools.len(), "Registered configured tools");
        Ok(())
    }

    /// Create tool instance based on configuration
    fn create_tool(
        &self,
        tool_name: &str,
        config: &ToolConfig,
    ) -> Result<Box<dyn Tool>, ToolError> {
        match config.implementation() {
            "builtin" => Ok(Box::new(builtin::create_builtin_tool(
                tool_name,
                self.maps.clone(),
            )?)),
            other => Err(ToolError::UnknownImplementation(other.to_string())),
        }
    }

    /// Add a tool under its described name, replacing any previous one.
    /// Fails if the tool's parameter schema does not compile.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), ToolError> {
        let name = tool.describe().name;
        self.insert(name, tool)
    }

    fn insert(&mut self, name: String, tool: Box<dyn Tool>) -> Result<(), ToolError> {
        let validator = jsonschema::validator_for(&tool.describe().parameters).map_err(|e| {
            ToolError::SchemaError(format!("Schema compilation error for {name}: {e}"))
        })?;
        self.tools.insert(name, RegisteredTool { tool, validator });
        Ok(())
    }

    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|entry| entry.tool.describe())
    }

    /// Execute tool with validated parameters
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        parameters: &Value,
    ) -> Result<Value, ToolError> {
        let entry = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        validate(&entry.validator, parameters)?;

        entry.tool.execute(parameters).await
    }

    /// Validate parameters against the tool's declared schema
    pub fn validate_parameters(&self, tool_name: &str, parameters: &Value) -> Result<(), ToolError> {
        let entry = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        validate(&entry.validator, parameters)
    }

    /// Sorted list of available tools
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Function declarations for every tool, sorted by name
    pub fn declarations(&self) -> Vec<Value> {
        self.list_tools()
            .iter()
            .filter_map(|name| self.describe_tool(name))
            .map(|description| description.declaration())
            .collect()
    }

    /// Shutdown all tools
    pub async fn shutdown(&mut self) -> Result<(), ToolError> {
        for entry in self.tools.values_mut() {
            entry.tool.shutdown().await?;
        }
        Ok(())
    }
}

fn validate(validator: &Validator, parameters: &Value) -> Result<(), ToolError> {
    validator.validate(parameters).map_err(|errors| {
        let error_messages: Vec<String> = errors
            .map(|e| format!("At '{}': {}", e.instance_path, e))
            .collect();
        ToolError::ValidationError(error_messages.join("; "))
    })
}

/// Tool system errors. Upstream failures are not errors here: Maps tools
/// report them as `{ "error": ... }` values.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Unknown tool implementation: {0}")]
    UnknownImplementation(String),
    #[error("Tool initialization failed: {0}")]
    InitializationError(String),
    #[error("Parameter validation failed: {0}")]
    ValidationError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
}
