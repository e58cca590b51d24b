// Subprocess runner implementation
// reason: async-trait, tokio for async process management (ADR-001)
use async_trait::async_trait;
use std::io::Read;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Instant};
use tracing::info;

use mcpcheck_core::port::command_runner::{
    CommandRunner, CommandSpec, ExecutionError, ExecutionResult, ExecutionStatus,
};

type OutputReader = JoinHandle<std::io::Result<Vec<u8>>>;

/// Subprocess runner
/// Spawns the command under test with stdout and stderr sharing one pipe,
/// so the captured text keeps the order in which the child wrote it.
#[derive(Debug, Default)]
pub struct SubprocessRunner;

impl SubprocessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Spawn child process and wait for its exit status and combined output
    async fn spawn_and_wait(
        &self,
        spec: &CommandSpec,
    ) -> Result<(ExitStatus, Vec<u8>), ExecutionError> {
        let (mut reader, writer) =
            os_pipe::pipe().map_err(|e| ExecutionError::IoError(e.to_string()))?;
        let stderr_writer = writer
            .try_clone()
            .map_err(|e| ExecutionError::IoError(e.to_string()))?;

        // The builder owns the parent's write ends; it must be dropped before
        // reading or the pipe never reaches EOF.
        let mut child = {
            let mut command = Command::new(&spec.program);
            command
                .args(&spec.args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer)
                .kill_on_drop(true);
            command
                .spawn()
                .map_err(|e| ExecutionError::SpawnFailed(format!("{}: {}", spec.program, e)))?
        };

        let output_reader: OutputReader = tokio::task::spawn_blocking(move || {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).map(|_| buf)
        });

        match spec.timeout_ms {
            Some(timeout_ms) => {
                match timeout(
                    Duration::from_millis(timeout_ms),
                    wait_with_output(&mut child, output_reader),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => {
                        let _ = child.start_kill();
                        Err(ExecutionError::Timeout(timeout_ms))
                    }
                }
            }
            None => wait_with_output(&mut child, output_reader).await,
        }
    }

    /// Build execution result from process output
    fn build_result(&self, status: ExitStatus, output: &[u8], duration_ms: i64) -> ExecutionResult {
        let execution_status = if status.success() {
            ExecutionStatus::Success
        } else {
            ExecutionStatus::Failed
        };

        ExecutionResult {
            status: execution_status,
            exit_code: status.code(),
            duration_ms,
            combined_output: String::from_utf8_lossy(output).into_owned(),
        }
    }
}

/// Wait for exit, then drain the shared pipe to EOF
async fn wait_with_output(
    child: &mut Child,
    output_reader: OutputReader,
) -> Result<(ExitStatus, Vec<u8>), ExecutionError> {
    let status = child
        .wait()
        .await
        .map_err(|e| ExecutionError::IoError(e.to_string()))?;

    let output = output_reader
        .await
        .map_err(|e| ExecutionError::IoError(e.to_string()))?
        .map_err(|e| ExecutionError::IoError(e.to_string()))?;

    Ok((status, output))
}

#[async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<ExecutionResult, ExecutionError> {
        let started = Instant::now();

        info!(
            program = %spec.program,
            args = ?spec.args,
            timeout_ms = ?spec.timeout_ms,
            "Starting subprocess execution"
        );

        let (status, output) = self.spawn_and_wait(spec).await?;

        let duration_ms = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);
        let result = self.build_result(status, &output, duration_ms);

        info!(
            program = %spec.program,
            duration_ms = %duration_ms,
            exit_code = ?result.exit_code,
            status = ?result.status,
            "Subprocess execution completed"
        );

        Ok(result)
    }
}
