// Domain Layer - Pure business logic and entities

pub mod error;
pub mod expectation;
pub mod report;

// Re-exports
pub use error::DomainError;
pub use expectation::{Expectation, ExpectationSet, Label};
pub use report::{CheckOutcome, RunOutcome, RunReport};
