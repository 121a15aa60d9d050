//! Integration test utilities for the booking core
//!
//! Provides in-memory repository implementations and a wired-up service
//! context so the services can be exercised end to end without PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
