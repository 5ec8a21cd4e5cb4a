//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("malformed contact collection: {message}")]
    MalformedCollection { message: String },

    #[error("cannot serialize contact collection: {message}")]
    Serialize { message: String },
}
