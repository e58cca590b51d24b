// Run constants (ADR: No magic values)

/// Program invoked when no command is configured
pub const DEFAULT_PROGRAM: &str = "gemini";

/// Arguments passed to `DEFAULT_PROGRAM`
pub const DEFAULT_ARGS: [&str; 2] = ["mcp", "list"];

/// Suite name shown in the startup banner
pub const DEFAULT_SUITE_NAME: &str = "gcloud-mcp";
