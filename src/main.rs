//! Maps Tools command line entry point
//!
//! Lists, describes and invokes the configured Google Maps Platform tools.

use clap::{Parser, Subcommand};
use maps_tools::config::MapsToolsConfig;
use maps_tools::error::ErrorEnvelope;
use maps_tools::maps::{ImagePayload, MapsClient, MapsSettings};
use maps_tools::observability::{init_logging, parse_flag, parse_level, LogFormat};
use maps_tools::tools::ToolSystem;
use serde_json::{json, Value};
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info, Level};

/// Google Maps Platform tools for tool-calling agents
#[derive(Parser)]
#[command(name = "maps-tools")]
#[command(about = "Google Maps Platform tool adapters")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "MAPS_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print function declarations of the enabled tools
    List {
        /// Only print tool names
        #[arg(long)]
        names: bool,
    },
    /// Print the function declaration of one tool
    Describe {
        /// Tool name
        tool: String,
    },
    /// Invoke a tool once and print its result
    Call {
        /// Tool name
        tool: String,
        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON", default_value = "{}")]
        args: String,
        /// Write the result to FILE; image results are written as raw bytes
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["maps-tools.toml", "config/maps-tools.toml"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_cli_logging(cli.verbose);

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List { names } => list_tools(&config, names).await,
        Commands::Describe { tool } => describe_tool(&config, &tool).await,
        Commands::Call { tool, args, output } => {
            call_tool(&config, &tool, &args, output.as_deref()).await
        }
        Commands::Config { show } => handle_config_command(&config, show),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(1);
        }
    }
}

/// `-v` flags take precedence over `LOG_LEVEL`
fn init_cli_logging(verbose: u8) {
    let level = match verbose {
        0 => parse_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "WARN".to_string())),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let format = LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".into()));
    let include_spans = parse_flag(&env::var("LOG_SPANS").unwrap_or_default());

    init_logging(level, format, include_spans);
}

fn load_configuration(
    config_path: Option<&Path>,
) -> Result<MapsToolsConfig, Box<dyn std::error::Error>> {
    if let Some(path) = config_path {
        info!("Loading configuration from: {}", path.display());
        return Ok(MapsToolsConfig::load_from_file(path)?);
    }

    for path_str in DEFAULT_CONFIG_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading configuration from: {}", path.display());
            return Ok(MapsToolsConfig::load_from_file(&path)?);
        }
    }

    info!("No configuration file found, enabling every builtin tool");
    Ok(MapsToolsConfig::default())
}

/// Build the tool system; listing and describing work without a key
async fn build_tool_system(
    config: &MapsToolsConfig,
    settings: MapsSettings,
) -> Result<ToolSystem, Box<dyn std::error::Error>> {
    let maps = MapsClient::new(settings)?;
    let mut system = ToolSystem::new(maps);
    system.initialize(&config.tools).await?;
    Ok(system)
}

async fn list_tools(
    config: &MapsToolsConfig,
    names_only: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let system = build_tool_system(config, config.settings_with_key(String::new())).await?;

    if names_only {
        for name in system.list_tools() {
            println!("{name}");
        }
    } else {
        let declarations = Value::Array(system.declarations());
        println!("{}", serde_json::to_string_pretty(&declarations)?);
    }
    Ok(true)
}

async fn describe_tool(
    config: &MapsToolsConfig,
    tool: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let system = build_tool_system(config, config.settings_with_key(String::new())).await?;

    let description = system
        .describe_tool(tool)
        .ok_or_else(|| format!("Unknown tool: {tool}"))?;
    println!("{}", serde_json::to_string_pretty(&description.declaration())?);
    Ok(true)
}

/// Returns `Ok(false)` when the tool produced an error envelope
async fn call_tool(
    config: &MapsToolsConfig,
    tool: &str,
    args: &str,
    output: Option<&Path>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let arguments: Value =
        serde_json::from_str(args).map_err(|e| format!("--args is not valid JSON: {e}"))?;

    let system = build_tool_system(config, config.maps_settings()?).await?;
    let result = system.execute_tool(tool, &arguments).await?;
    let succeeded = ErrorEnvelope::from_value(&result).is_none();

    match (output, ImagePayload::from_value(&result)) {
        (Some(path), Some(image)) => {
            std::fs::write(path, &image.bytes)?;
            let summary = json!({
                "path": path.display().to_string(),
                "contentType": image.content_type,
                "bytes": image.bytes.len()
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        (Some(path), None) => {
            std::fs::write(path, serde_json::to_string_pretty(&result)?)?;
            info!("Result written to {}", path.display());
        }
        (None, _) => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(succeeded)
}

fn handle_config_command(
    config: &MapsToolsConfig,
    show: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(config)?);
    }

    match config.get_api_key() {
        Ok(_) => info!("API key found in {}", config.maps.api_key_env),
        Err(e) => error!("{}", e),
    }

    info!("Configuration validation complete");
    Ok(true)
}
