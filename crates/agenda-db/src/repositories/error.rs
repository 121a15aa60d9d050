//! Error handling utilities for repositories

use agenda_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
///
/// Used as the storage-level backstop for the no-overlap constraint: a unique
/// or exclusion violation on concurrent inserts surfaces as the domain error
/// supplied by the caller rather than an opaque database error.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() || db_err.code().as_deref() == Some("23P01") {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "box not found" error
pub fn box_not_found(id: Uuid) -> DomainError {
    DomainError::BoxNotFound(id)
}

/// Create a "reservation not found" error
pub fn reservation_not_found(id: Uuid) -> DomainError {
    DomainError::ReservationNotFound(id)
}

/// Create a "voucher not found" error
pub fn voucher_not_found(id: Uuid) -> DomainError {
    DomainError::VoucherNotFound(id)
}
