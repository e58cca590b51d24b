// Reporter Port
// Progress sink for a run (console in the CLI, recording in tests)

/// Receives the human-facing events of a run, in order
pub trait Reporter: Send + Sync {
    /// Run is starting
    fn banner(&self, suite_name: &str);

    /// Raw combined output of a successful invocation
    fn command_output(&self, output: &str);

    /// The command could not be run or exited unsuccessfully
    fn invocation_failed(&self, reason: &str, output: &str);

    fn check_passed(&self, label: &str);

    fn check_failed(&self, label: &str);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// One recorded reporter call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ReportEvent {
        Banner(String),
        CommandOutput(String),
        InvocationFailed { reason: String, output: String },
        Passed(String),
        Failed(String),
    }

    /// Reporter that records every event for later assertions
    #[derive(Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<ReportEvent>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<ReportEvent> {
            self.events.lock().unwrap().clone()
        }

        /// Number of pass/fail lines emitted
        pub fn assertion_count(&self) -> usize {
            self.events()
                .iter()
                .filter(|e| matches!(e, ReportEvent::Passed(_) | ReportEvent::Failed(_)))
                .count()
        }

        fn record(&self, event: ReportEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl Reporter for RecordingReporter {
        fn banner(&self, suite_name: &str) {
            self.record(ReportEvent::Banner(suite_name.to_string()));
        }

        fn command_output(&self, output: &str) {
            self.record(ReportEvent::CommandOutput(output.to_string()));
        }

        fn invocation_failed(&self, reason: &str, output: &str) {
            self.record(ReportEvent::InvocationFailed {
                reason: reason.to_string(),
                output: output.to_string(),
            });
        }

        fn check_passed(&self, label: &str) {
            self.record(ReportEvent::Passed(label.to_string()));
        }

        fn check_failed(&self, label: &str) {
            self.record(ReportEvent::Failed(label.to_string()));
        }
    }
}
