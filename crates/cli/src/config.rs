//! Command-line configuration
//!
//! Every setting has a default matching the stock check: run `gemini mcp list`
//! and expect the gcloud and observability servers to be connected.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use mcpcheck_core::application::constants::{DEFAULT_ARGS, DEFAULT_PROGRAM, DEFAULT_SUITE_NAME};
use mcpcheck_core::domain::{Expectation, ExpectationSet};
use mcpcheck_core::port::CommandSpec;

#[derive(Parser, Debug)]
#[command(name = "mcp-integration-check")]
#[command(about = "Check that MCP servers are reported as connected", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name shown in the startup banner
    #[arg(long, env = "MCPCHECK_SUITE_NAME", default_value = DEFAULT_SUITE_NAME)]
    pub suite_name: String,

    /// Expect `LABEL: npx -y PACKAGE (stdio) - Connected` (repeatable)
    #[arg(long = "expect", value_name = "LABEL=PACKAGE")]
    pub expect: Vec<String>,

    /// Expect a literal line (repeatable)
    #[arg(long = "expect-line", value_name = "LABEL=LINE")]
    pub expect_line: Vec<String>,

    /// JSON object mapping labels to npx packages
    #[arg(long, env = "MCPCHECK_EXPECTATIONS_FILE", value_name = "PATH")]
    pub expectations_file: Option<PathBuf>,

    /// Kill the command if it runs longer than this (default: wait forever)
    #[arg(long, env = "MCPCHECK_TIMEOUT_MS", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Command to run instead of `gemini mcp list`
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Fully resolved run configuration, immutable once built
#[derive(Debug)]
pub struct CheckConfig {
    pub suite_name: String,
    pub command: CommandSpec,
    pub expectations: ExpectationSet,
}

impl CheckConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let expectations = resolve_expectations(&cli)?;

        let command = match cli.command.split_first() {
            Some((program, args)) => CommandSpec::new(program.clone(), args.to_vec()),
            None => CommandSpec::new(
                DEFAULT_PROGRAM,
                DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
            ),
        }
        .with_timeout_ms(cli.timeout_ms);

        Ok(Self {
            suite_name: cli.suite_name,
            command,
            expectations,
        })
    }
}

/// File entries first, then `--expect`, then `--expect-line`.
/// Falls back to the gemini defaults when nothing is configured.
fn resolve_expectations(cli: &Cli) -> Result<ExpectationSet> {
    if cli.expectations_file.is_none() && cli.expect.is_empty() && cli.expect_line.is_empty() {
        return Ok(ExpectationSet::gemini_defaults());
    }

    let mut set = match &cli.expectations_file {
        Some(path) => ExpectationSet::from_json_file(path)
            .with_context(|| format!("Failed to load expectations file {}", path.display()))?,
        None => ExpectationSet::new(),
    };

    for raw in &cli.expect {
        let (label, package) = split_pair(raw)?;
        set.push(Expectation::connected(label, package.trim())?)?;
    }

    for raw in &cli.expect_line {
        let (label, line) = split_pair(raw)?;
        set.push(Expectation::literal(label, line)?)?;
    }

    Ok(set)
}

/// Split `LABEL=VALUE` on the first `=`; the value is returned untrimmed
fn split_pair(raw: &str) -> Result<(&str, &str)> {
    let (label, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected LABEL=VALUE, got '{}'", raw))?;
    Ok((label.trim(), value))
}
