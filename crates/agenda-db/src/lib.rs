//! # agenda-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `agenda-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives mirroring the persisted
//!   schema (camelCase columns as created by the original migrations)
//! - Model <-> entity mappers
//! - Repository implementations
//!
//! Schema evolution happens through forward-only migrations maintained by
//! external tooling; this crate consumes the schema as given.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAvailabilityRepository, PgPaymentRepository, PgReservationRepository, PgRoomRepository,
    PgVoucherRepository,
};
