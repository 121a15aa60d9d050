//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The booking core consumes snapshots through
//! these traits and performs no I/O of its own.

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use crate::entities::{
    AvailabilityRule, Payment, PaymentStatus, Reservation, ReservationStatus, Room, Voucher,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Room ("Box") Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by ID, soft-deleted rows included (callers check status)
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Room>>;

    /// List active rooms, optionally restricted to a sede
    async fn find_active(&self, sede_id: Option<Uuid>) -> RepoResult<Vec<Room>>;

    /// Create a new room
    async fn create(&self, room: &Room) -> RepoResult<()>;

    /// Soft delete a room; historical reservations keep referencing it
    async fn soft_delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reservation>>;

    /// Reservations holding a slot on (box, fecha): estado in
    /// {pendiente, confirmada, completada}
    async fn find_active_for_day(&self, box_id: Uuid, fecha: NaiveDate)
        -> RepoResult<Vec<Reservation>>;

    /// List a psychologist's reservations in a date range
    async fn find_by_psicologo(
        &self,
        psicologo_id: Uuid,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> RepoResult<Vec<Reservation>>;

    /// Persist a new reservation
    async fn create(&self, reservation: &Reservation) -> RepoResult<()>;

    /// Compare-and-set `estado`: the row must still hold `from`
    ///
    /// A concurrent writer may have moved the row since it was loaded; the
    /// guard surfaces that as `InvalidTransition` with the row's actual state
    /// instead of silently overwriting it.
    async fn update_estado(
        &self,
        id: Uuid,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> RepoResult<()>;

    /// Update `estado_pago`
    async fn update_estado_pago(&self, id: Uuid, estado_pago: PaymentStatus) -> RepoResult<()>;
}

// ============================================================================
// Availability Repository
// ============================================================================

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Find the rule for (psychologist, weekday), unique by schema constraint
    async fn find_rule(
        &self,
        psicologo_id: Uuid,
        day: Weekday,
    ) -> RepoResult<Option<AvailabilityRule>>;

    /// All rules for a psychologist
    async fn find_by_psicologo(&self, psicologo_id: Uuid) -> RepoResult<Vec<AvailabilityRule>>;

    /// Insert or replace the rule for its (psychologist, weekday) pair
    async fn upsert(&self, rule: &AvailabilityRule) -> RepoResult<()>;

    /// Delete all rules for a psychologist (owner-deletion cascade)
    async fn delete_by_psicologo(&self, psicologo_id: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Voucher Repository
// ============================================================================

#[async_trait]
pub trait VoucherRepository: Send + Sync {
    /// Find voucher by ID, soft-deleted rows included
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Voucher>>;

    /// Create a new voucher
    async fn create(&self, voucher: &Voucher) -> RepoResult<()>;

    /// Increment the use counter, guarded by `usos_actuales < limite_usos`
    ///
    /// Returns `VoucherExhausted` when the guard fails; this is the storage
    /// backstop for concurrent redemptions.
    async fn increment_usos(&self, id: Uuid) -> RepoResult<()>;

    /// Decrement the use counter, releasing a redemption whose payment never
    /// committed; floors at zero
    async fn decrement_usos(&self, id: Uuid) -> RepoResult<()>;

    /// Vouchers a psychologist could redeem on `today`: not deleted, not
    /// expired, not exhausted, global or owned by the psychologist
    async fn find_applicable(&self, psicologo_id: Uuid, today: NaiveDate)
        -> RepoResult<Vec<Voucher>>;

    /// Soft delete a voucher
    async fn soft_delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Payment Repository
// ============================================================================

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find payment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Payment>>;

    /// Persist a payment row
    async fn create(&self, payment: &Payment) -> RepoResult<()>;

    /// Payments that redeemed a given voucher
    async fn find_by_voucher(&self, cupon_id: Uuid) -> RepoResult<Vec<Payment>>;
}

// ============================================================================
// Holiday Calendar
// ============================================================================

/// Recognized-holiday lookup consumed by the conflict checker
///
/// Synchronous on purpose: implementations hold a precomputed date set.
pub trait HolidayCalendar: Send + Sync {
    /// Whether the date is a recognized holiday
    fn is_holiday(&self, fecha: NaiveDate) -> bool;
}
