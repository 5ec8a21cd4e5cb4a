//! Infrastructure-level errors: store failures plus output plumbing

use thiserror::Error;

use crate::application::ApplicationError;

/// Errors raised while serving a command: anything the contact store
/// reported, or a failure to render or write its result.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Rendering JSON or writing to stdout failed (e.g. closed pipe).
    #[error("output failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Output failure for `context` (`"write to stdout"`, `"serialize output"`).
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for command execution below the CLI layer.
pub type InfraResult<T> = Result<T, InfraError>;
