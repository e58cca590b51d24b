// Run Report Domain Model

use super::expectation::Label;

/// Result of evaluating one expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub label: Label,
    pub expected_line: String,
    pub passed: bool,
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every expectation was found in the output
    Passed,
    /// First expectation that was missing (later ones were skipped)
    AssertionFailed { label: Label },
    /// The command could not be run or exited unsuccessfully
    InvocationFailed { reason: String },
}

impl RunOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::AssertionFailed { .. } | RunOutcome::InvocationFailed { .. } => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Passed)
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Passed => write!(f, "PASSED"),
            RunOutcome::AssertionFailed { label } => write!(f, "ASSERTION_FAILED({})", label),
            RunOutcome::InvocationFailed { reason } => write!(f, "INVOCATION_FAILED({})", reason),
        }
    }
}

/// Everything a single run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Checks in evaluation order; empty on invocation failure
    pub checks: Vec<CheckOutcome>,
    /// Combined stdout/stderr of the command
    pub output: String,
}

impl RunReport {
    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }
}
