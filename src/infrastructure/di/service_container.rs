//! Service container for dependency injection
//!
//! Wires the contact store to its settings and filesystem.

use std::sync::Arc;

use crate::application::services::ContactService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Contact store
    pub contacts: ContactService,
}

impl ServiceContainer {
    /// Create a new service container backed by the real filesystem.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with a custom filesystem (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            contacts: ContactService::new(fs, Arc::new(settings)),
        }
    }
}
