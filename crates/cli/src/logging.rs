//! Logging setup
//!
//! Logs go to stderr so the console report on stdout stays clean.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `mcpcheck=warn,mcp_integration_check=warn`)
//! - `MCPCHECK_LOG_FORMAT`: `json`, `pretty` or `text` (default)

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "mcpcheck=warn,mcp_integration_check=warn";

pub fn init_logging() -> Result<()> {
    let log_format = std::env::var("MCPCHECK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| anyhow!("Failed to create env filter: {}", e))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "pretty" => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
