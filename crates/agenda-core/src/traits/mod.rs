//! Repository traits (ports) - interfaces the domain needs from infrastructure

mod repositories;

pub use repositories::{
    AvailabilityRepository, HolidayCalendar, PaymentRepository, RepoResult, ReservationRepository,
    RoomRepository, VoucherRepository,
};
