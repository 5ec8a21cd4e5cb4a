//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::StoreInit { .. } => crate::exitcode::CANTCREAT,
                    ApplicationError::StoreRead { .. } => crate::exitcode::IOERR,
                    ApplicationError::StoreWrite { .. } => crate::exitcode::IOERR,
                    ApplicationError::CorruptStore { .. } => crate::exitcode::DATAERR,
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_missing_argument_when_mapping_exit_code_then_usage() {
        let err = CliError::InvalidArgs("--id is required".into());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_corrupt_store_when_mapping_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::CorruptStore {
            path: PathBuf::from("c.json"),
            reason: "eof".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(err.to_string(), "contact store c.json is corrupt: eof");
    }

    #[test]
    fn given_write_failure_when_mapping_exit_code_then_ioerr() {
        let err = CliError::from(ApplicationError::StoreWrite {
            path: PathBuf::from("c.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }
}
