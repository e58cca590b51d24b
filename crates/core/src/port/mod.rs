// Port Layer - Interfaces for external dependencies

pub mod command_runner;
pub mod reporter;

// Re-exports
pub use command_runner::{
    CommandRunner, CommandSpec, ExecutionError, ExecutionResult, ExecutionStatus,
};
pub use reporter::Reporter;
