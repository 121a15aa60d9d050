//! Test context and seed helpers

use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use agenda_common::{BookingConfig, FixedHolidayCalendar};
use agenda_core::entities::{AvailabilityRule, Room, Voucher};
use agenda_core::value_objects::HourRange;
use agenda_service::dto::CreateBookingRequest;
use agenda_service::{
    AvailabilityService, BookingService, PaymentService, ReservationLifecycleService,
    ServiceContext, ServiceContextBuilder,
};

use crate::fixtures::{
    InMemoryAvailabilityRepository, InMemoryPaymentRepository, InMemoryReservationRepository,
    InMemoryRoomRepository, InMemoryVoucherRepository,
};

/// Lock wait used in tests; short so contention failures surface quickly
pub const TEST_LOCK_TIMEOUT_MS: u64 = 500;

/// A wired service context over in-memory repositories
///
/// Repository handles stay accessible for seeding and post-hoc assertions.
pub struct TestContext {
    pub ctx: ServiceContext,
    pub rooms: Arc<InMemoryRoomRepository>,
    pub reservations: Arc<InMemoryReservationRepository>,
    pub availability: Arc<InMemoryAvailabilityRepository>,
    pub vouchers: Arc<InMemoryVoucherRepository>,
    pub payments: Arc<InMemoryPaymentRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_holidays(&[])
    }

    pub fn with_holidays(fechas: &[NaiveDate]) -> Self {
        let rooms = Arc::new(InMemoryRoomRepository::default());
        let reservations = Arc::new(InMemoryReservationRepository::default());
        let availability = Arc::new(InMemoryAvailabilityRepository::default());
        let vouchers = Arc::new(InMemoryVoucherRepository::default());
        let payments = Arc::new(InMemoryPaymentRepository::default());

        let ctx = ServiceContextBuilder::new()
            .room_repo(rooms.clone())
            .reservation_repo(reservations.clone())
            .availability_repo(availability.clone())
            .voucher_repo(vouchers.clone())
            .payment_repo(payments.clone())
            .holiday_calendar(Arc::new(FixedHolidayCalendar::new(fechas.iter().copied())))
            .booking_config(BookingConfig {
                lock_timeout_ms: TEST_LOCK_TIMEOUT_MS,
            })
            .build()
            .unwrap();

        Self {
            ctx,
            rooms,
            reservations,
            availability,
            vouchers,
            payments,
        }
    }

    // === Services ===

    pub fn booking(&self) -> BookingService {
        BookingService::new(self.ctx.clone())
    }

    pub fn lifecycle(&self) -> ReservationLifecycleService {
        ReservationLifecycleService::new(self.ctx.clone())
    }

    pub fn payment(&self) -> PaymentService {
        PaymentService::new(self.ctx.clone())
    }

    pub fn availability(&self) -> AvailabilityService {
        AvailabilityService::new(self.ctx.clone())
    }

    // === Seed helpers ===

    /// Create an active room and return its id
    pub async fn seed_room(&self) -> Uuid {
        let room = Room::new(Uuid::new_v4(), None);
        let id = room.id;
        use agenda_core::traits::RoomRepository;
        self.rooms.create(&room).await.unwrap();
        id
    }

    /// Store a rule permitting one hour sub-range on one weekday
    pub async fn seed_rule(&self, psicologo_id: Uuid, day: Weekday, inicio: &str, fin: &str) {
        let rule = AvailabilityRule::new(
            Uuid::new_v4(),
            psicologo_id,
            day,
            vec![HourRange::parse(inicio, fin).unwrap()],
        )
        .unwrap();
        use agenda_core::traits::AvailabilityRepository;
        self.availability.upsert(&rule).await.unwrap();
    }

    /// Store a voucher
    pub async fn seed_voucher(&self, voucher: &Voucher) {
        use agenda_core::traits::VoucherRepository;
        self.vouchers.create(voucher).await.unwrap();
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 2025-03-10, a Monday
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// A booking request for the given slot at a fixed price
pub fn booking_request(
    box_id: Uuid,
    psicologo_id: Uuid,
    fecha: NaiveDate,
    hora_inicio: &str,
    hora_fin: &str,
) -> CreateBookingRequest {
    CreateBookingRequest {
        box_id,
        psicologo_id,
        fecha,
        hora_inicio: hora_inicio.to_string(),
        hora_fin: hora_fin.to_string(),
        precio: 25_000,
        require_confirmation: false,
    }
}
