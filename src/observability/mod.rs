//! Observability: structured logging and tool execution spans

pub mod logging;

pub use logging::{init_default_logging, init_logging, parse_flag, parse_level, LogFormat};

pub use logging::tool_span;
