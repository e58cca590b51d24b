// Application Layer - Use Cases

pub mod assertion_runner;
pub mod constants;

// Re-exports
pub use assertion_runner::AssertionRunner;
