//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod collection;
pub mod entities;
pub mod error;

pub use collection::{parse_collection, serialize_collection, EMPTY_COLLECTION};
pub use entities::*;
pub use error::DomainError;
