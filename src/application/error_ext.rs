//! Error conversion helpers for store I/O
//!
//! Provides an extension trait for attaching the store path and the failed
//! step to an `io::Error`.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Which step of a store round-trip an I/O error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Init,
    Read,
    Write,
}

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Map an I/O error to the store error for `op`.
    ///
    /// # Example
    /// ```ignore
    /// self.fs.read_to_string(&path)
    ///     .with_store_context(StoreOp::Read, &path)?;
    /// ```
    fn with_store_context(self, op: StoreOp, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_store_context(self, op: StoreOp, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| {
            let path = path.to_path_buf();
            match op {
                StoreOp::Init => ApplicationError::StoreInit { path, source },
                StoreOp::Read => ApplicationError::StoreRead { path, source },
                StoreOp::Write => ApplicationError::StoreWrite { path, source },
            }
        })
    }
}
