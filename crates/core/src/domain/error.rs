// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid expectation: {0}")]
    InvalidExpectation(String),

    #[error("Duplicate expectation label: {0}")]
    DuplicateLabel(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
