// Assertion Runner (run command -> check lines -> outcome)
use crate::domain::{CheckOutcome, ExpectationSet, RunOutcome, RunReport};
use crate::port::{CommandRunner, CommandSpec, Reporter};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the command under test once and checks its output against an
/// `ExpectationSet`.
///
/// Flow is strictly linear:
/// invoke -> (fail fast on invocation error) -> check_1 -> ... -> check_n
///
/// The first missing line ends the run; later expectations are never
/// evaluated or reported.
pub struct AssertionRunner {
    suite_name: String,
    command: CommandSpec,
    expectations: ExpectationSet,
    command_runner: Arc<dyn CommandRunner>,
    reporter: Arc<dyn Reporter>,
}

impl AssertionRunner {
    /// Create a new assertion runner
    ///
    /// # Arguments
    /// * `suite_name` - Name shown in the startup banner
    /// * `command` - Command under test
    /// * `expectations` - Lines that must appear in the output
    /// * `command_runner` - Process adapter
    /// * `reporter` - Progress sink
    pub fn new(
        suite_name: impl Into<String>,
        command: CommandSpec,
        expectations: ExpectationSet,
        command_runner: Arc<dyn CommandRunner>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            suite_name: suite_name.into(),
            command,
            expectations,
            command_runner,
            reporter,
        }
    }

    pub async fn run(&self) -> RunReport {
        self.reporter.banner(&self.suite_name);

        info!(
            command = %self.command,
            expectations = self.expectations.len(),
            "Running command under test"
        );

        let output = match self.command_runner.run(&self.command).await {
            Ok(result) => match result.failure_reason() {
                None => {
                    debug!(duration_ms = result.duration_ms, "Command succeeded");
                    result.combined_output
                }
                Some(reason) => {
                    return self.invocation_failed(reason, result.combined_output);
                }
            },
            Err(e) => return self.invocation_failed(e.to_string(), String::new()),
        };

        self.reporter.command_output(&output);

        let (outcome, checks) = self.check_all(&output);

        info!(outcome = %outcome, checked = checks.len(), "Run finished");

        RunReport {
            outcome,
            checks,
            output,
        }
    }

    fn check_all(&self, output: &str) -> (RunOutcome, Vec<CheckOutcome>) {
        let mut checks = Vec::with_capacity(self.expectations.len());

        for expectation in &self.expectations {
            let passed = expectation.is_satisfied_by(output);
            checks.push(CheckOutcome {
                label: expectation.label.clone(),
                expected_line: expectation.expected_line.clone(),
                passed,
            });

            if passed {
                self.reporter.check_passed(&expectation.label);
            } else {
                warn!(
                    label = %expectation.label,
                    expected = %expectation.expected_line,
                    "Expected line missing from output"
                );
                self.reporter.check_failed(&expectation.label);
                let outcome = RunOutcome::AssertionFailed {
                    label: expectation.label.clone(),
                };
                return (outcome, checks);
            }
        }

        (RunOutcome::Passed, checks)
    }

    fn invocation_failed(&self, reason: String, output: String) -> RunReport {
        warn!(command = %self.command, reason = %reason, "Command invocation failed");
        self.reporter.invocation_failed(&reason, &output);

        RunReport {
            outcome: RunOutcome::InvocationFailed { reason },
            checks: Vec::new(),
            output,
        }
    }
}
