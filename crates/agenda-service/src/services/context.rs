//! Service context - dependency container for services
//!
//! Holds the repositories, holiday calendar, and booking lock registry that
//! services operate on. Built over trait objects so integration tests can
//! substitute in-memory implementations.

use std::sync::Arc;

use agenda_common::BookingConfig;
use agenda_core::traits::{
    AvailabilityRepository, HolidayCalendar, PaymentRepository, ReservationRepository,
    RoomRepository, VoucherRepository,
};

use super::slots::SlotLockRegistry;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories
/// - The recognized-holiday calendar
/// - The per-(box, fecha) booking lock registry
/// - Booking configuration
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    room_repo: Arc<dyn RoomRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,
    voucher_repo: Arc<dyn VoucherRepository>,
    payment_repo: Arc<dyn PaymentRepository>,

    // Domain services
    holiday_calendar: Arc<dyn HolidayCalendar>,
    slot_locks: Arc<SlotLockRegistry>,

    // Configuration
    booking_config: BookingConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        room_repo: Arc<dyn RoomRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        availability_repo: Arc<dyn AvailabilityRepository>,
        voucher_repo: Arc<dyn VoucherRepository>,
        payment_repo: Arc<dyn PaymentRepository>,
        holiday_calendar: Arc<dyn HolidayCalendar>,
        booking_config: BookingConfig,
    ) -> Self {
        let slot_locks = SlotLockRegistry::new_shared(booking_config.lock_timeout());
        Self {
            room_repo,
            reservation_repo,
            availability_repo,
            voucher_repo,
            payment_repo,
            holiday_calendar,
            slot_locks,
            booking_config,
        }
    }

    // === Repositories ===

    /// Get the room repository
    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    /// Get the reservation repository
    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    /// Get the availability repository
    pub fn availability_repo(&self) -> &dyn AvailabilityRepository {
        self.availability_repo.as_ref()
    }

    /// Get the voucher repository
    pub fn voucher_repo(&self) -> &dyn VoucherRepository {
        self.voucher_repo.as_ref()
    }

    /// Get the payment repository
    pub fn payment_repo(&self) -> &dyn PaymentRepository {
        self.payment_repo.as_ref()
    }

    // === Domain Services ===

    /// Get the recognized-holiday calendar
    pub fn holiday_calendar(&self) -> &dyn HolidayCalendar {
        self.holiday_calendar.as_ref()
    }

    /// Get the booking lock registry
    pub fn slot_locks(&self) -> &SlotLockRegistry {
        self.slot_locks.as_ref()
    }

    // === Configuration ===

    /// Get the booking configuration
    pub fn booking_config(&self) -> &BookingConfig {
        &self.booking_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("slot_locks", &self.slot_locks)
            .field("booking_config", &self.booking_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    room_repo: Option<Arc<dyn RoomRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    availability_repo: Option<Arc<dyn AvailabilityRepository>>,
    voucher_repo: Option<Arc<dyn VoucherRepository>>,
    payment_repo: Option<Arc<dyn PaymentRepository>>,
    holiday_calendar: Option<Arc<dyn HolidayCalendar>>,
    booking_config: Option<BookingConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn availability_repo(mut self, repo: Arc<dyn AvailabilityRepository>) -> Self {
        self.availability_repo = Some(repo);
        self
    }

    pub fn voucher_repo(mut self, repo: Arc<dyn VoucherRepository>) -> Self {
        self.voucher_repo = Some(repo);
        self
    }

    pub fn payment_repo(mut self, repo: Arc<dyn PaymentRepository>) -> Self {
        self.payment_repo = Some(repo);
        self
    }

    pub fn holiday_calendar(mut self, calendar: Arc<dyn HolidayCalendar>) -> Self {
        self.holiday_calendar = Some(calendar);
        self
    }

    pub fn booking_config(mut self, config: BookingConfig) -> Self {
        self.booking_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.room_repo
                .ok_or_else(|| ServiceError::validation("room_repo is required"))?,
            self.reservation_repo
                .ok_or_else(|| ServiceError::validation("reservation_repo is required"))?,
            self.availability_repo
                .ok_or_else(|| ServiceError::validation("availability_repo is required"))?,
            self.voucher_repo
                .ok_or_else(|| ServiceError::validation("voucher_repo is required"))?,
            self.payment_repo
                .ok_or_else(|| ServiceError::validation("payment_repo is required"))?,
            self.holiday_calendar
                .ok_or_else(|| ServiceError::validation("holiday_calendar is required"))?,
            self.booking_config.unwrap_or_default(),
        ))
    }
}
