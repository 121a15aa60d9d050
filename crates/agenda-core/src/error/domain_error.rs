//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::{PaymentStatus, ReservationStatus};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Box not found: {0}")]
    BoxNotFound(Uuid),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(Uuid),

    #[error("No availability rule for psychologist {psicologo_id} on {dia}")]
    AvailabilityRuleNotFound { psicologo_id: Uuid, dia: String },

    #[error("Voucher not found: {0}")]
    VoucherNotFound(Uuid),

    #[error("Payment not found: {0}")]
    PaymentNotFound(Uuid),

    // =========================================================================
    // Slot Validation
    // =========================================================================
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Booking Rejections
    // =========================================================================
    #[error("Box {0} is no longer available (soft-deleted)")]
    BoxUnavailable(Uuid),

    #[error("Requested interval falls outside availability for {dia}: {detail}")]
    OutsideAvailability { dia: String, detail: String },

    #[error("{fecha} is a holiday and the psychologist does not work on holidays")]
    HolidayRestriction { fecha: NaiveDate },

    #[error("Slot conflicts with existing reservation {conflicting_id}")]
    SchedulingConflict { conflicting_id: Uuid },

    // =========================================================================
    // Lifecycle Violations
    // =========================================================================
    #[error("Invalid reservation transition: {from} -> {to}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    #[error("Invalid payment status transition: {from} -> {to}")]
    InvalidPaymentTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },

    // =========================================================================
    // Voucher Rejections
    // =========================================================================
    #[error("Voucher expired on {vencimiento}")]
    VoucherExpired { vencimiento: NaiveDate },

    #[error("Voucher has reached its usage limit")]
    VoucherExhausted,

    #[error("Voucher not applicable: {0}")]
    VoucherNotApplicable(String),

    // =========================================================================
    // Concurrency
    // =========================================================================
    #[error("Timed out waiting for the booking lock; retry the request")]
    ConcurrencyTimeout,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::BoxNotFound(_) => "UNKNOWN_BOX",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::AvailabilityRuleNotFound { .. } => "UNKNOWN_AVAILABILITY_RULE",
            Self::VoucherNotFound(_) => "UNKNOWN_VOUCHER",
            Self::PaymentNotFound(_) => "UNKNOWN_PAYMENT",

            Self::InvalidInterval(_) => "INVALID_INTERVAL",
            Self::Validation(_) => "VALIDATION_ERROR",

            Self::BoxUnavailable(_) => "BOX_UNAVAILABLE",
            Self::OutsideAvailability { .. } => "OUTSIDE_AVAILABILITY",
            Self::HolidayRestriction { .. } => "HOLIDAY_RESTRICTION",
            Self::SchedulingConflict { .. } => "SCHEDULING_CONFLICT",

            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::InvalidPaymentTransition { .. } => "INVALID_PAYMENT_TRANSITION",

            Self::VoucherExpired { .. } => "VOUCHER_EXPIRED",
            Self::VoucherExhausted => "VOUCHER_EXHAUSTED",
            Self::VoucherNotApplicable(_) => "VOUCHER_NOT_APPLICABLE",

            Self::ConcurrencyTimeout => "CONCURRENCY_TIMEOUT",

            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoxNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::AvailabilityRuleNotFound { .. }
                | Self::VoucherNotFound(_)
                | Self::PaymentNotFound(_)
        )
    }

    /// Check if this is a malformed-input error (caller must correct the request)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInterval(_) | Self::Validation(_))
    }

    /// Check if this is a booking rejection with an identified rule
    pub fn is_booking_rejection(&self) -> bool {
        matches!(
            self,
            Self::BoxUnavailable(_)
                | Self::OutsideAvailability { .. }
                | Self::HolidayRestriction { .. }
                | Self::SchedulingConflict { .. }
        )
    }

    /// Check if the caller may retry the same class of request
    ///
    /// A scheduling conflict is retryable with a different slot; a lock
    /// timeout is retryable with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::SchedulingConflict { .. } | Self::ConcurrencyTimeout
        )
    }
}
