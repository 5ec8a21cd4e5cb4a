//! Command-line contact manager.
//!
//! Contacts live in a single JSON file. Every operation reads the whole file
//! and mutating operations rewrite it, so concurrent writers race with
//! last-writer-wins semantics.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
