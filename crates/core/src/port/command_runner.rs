// Command Runner Port
// Abstraction for invoking the external CLI under test

use async_trait::async_trait;
use thiserror::Error;

/// Program, arguments and optional time limit of the command under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// `None` blocks until the child exits
    pub timeout_ms: Option<u64>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout_ms: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running the command to completion
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub duration_ms: i64,
    pub exit_code: Option<i32>,
    /// stdout and stderr in the order the child wrote them
    pub combined_output: String,
}

impl ExecutionResult {
    /// Human-readable reason for a non-successful status, `None` on success
    pub fn failure_reason(&self) -> Option<String> {
        match self.status {
            ExecutionStatus::Success => None,
            ExecutionStatus::Failed => Some(match self.exit_code {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            }),
        }
    }
}

/// Execution status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    Success,
    Failed,
}

/// Execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Process timeout after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Command Runner trait
///
/// Implementations:
/// - SubprocessRunner (infra-system): spawns the real process
/// - MockCommandRunner: canned results for tests
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command and capture its combined output
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the process cannot be started
    /// - ExecutionError::Timeout if `timeout_ms` elapses first
    /// - ExecutionError::IoError if reading output fails
    async fn run(&self, spec: &CommandSpec) -> Result<ExecutionResult, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Exit 0 with the given output
        Output(String),
        /// Exit with a non-zero code and the given output
        ExitCode(i32, String),
        /// Fail to spawn with message
        SpawnFail(String),
        /// Time out after N ms
        Timeout(u64),
    }

    /// Mock Command Runner for testing
    pub struct MockCommandRunner {
        behavior: MockBehavior,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockCommandRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn with_output(output: impl Into<String>) -> Self {
            Self::new(MockBehavior::Output(output.into()))
        }

        pub fn spawn_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFail(message.into()))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl CommandRunner for MockCommandRunner {
        async fn run(&self, _spec: &CommandSpec) -> Result<ExecutionResult, ExecutionError> {
            *self.call_count.lock().unwrap() += 1;

            match &self.behavior {
                MockBehavior::Output(output) => Ok(ExecutionResult {
                    status: ExecutionStatus::Success,
                    duration_ms: 10,
                    exit_code: Some(0),
                    combined_output: output.clone(),
                }),
                MockBehavior::ExitCode(code, output) => Ok(ExecutionResult {
                    status: ExecutionStatus::Failed,
                    duration_ms: 10,
                    exit_code: Some(*code),
                    combined_output: output.clone(),
                }),
                MockBehavior::SpawnFail(msg) => Err(ExecutionError::SpawnFailed(msg.clone())),
                MockBehavior::Timeout(ms) => Err(ExecutionError::Timeout(*ms)),
            }
        }
    }
}
