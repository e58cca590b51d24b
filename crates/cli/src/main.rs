//! MCP Integration Check - runs `gemini mcp list` and asserts that the
//! expected MCP servers are reported as connected.
//!
//! Exit codes: 0 all lines found, 1 command failed or a line is missing,
//! 2 invalid configuration.

mod config;
mod logging;
mod reporter;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

use mcpcheck_core::application::AssertionRunner;
use mcpcheck_infra_system::SubprocessRunner;

use config::{CheckConfig, Cli};
use reporter::ConsoleReporter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const CONFIG_ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("warning: {:#}", e);
    }

    debug!("mcp-integration-check v{} starting", VERSION);

    let config = match CheckConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("error: {:#}", e);
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };

    match run(config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Wire the adapters and execute one run on a single-threaded runtime
fn run(config: CheckConfig) -> Result<u8> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let runner = AssertionRunner::new(
        config.suite_name,
        config.command,
        config.expectations,
        Arc::new(SubprocessRunner::new()),
        Arc::new(ConsoleReporter::stdout()),
    );

    let report = runtime.block_on(runner.run());
    // A timed-out child's grandchildren may still hold the output pipe open
    runtime.shutdown_background();

    debug!(outcome = %report.outcome, passed = report.passed_count(), "Exiting");

    Ok(u8::try_from(report.exit_code()).unwrap_or(1))
}
