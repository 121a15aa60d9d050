//! # agenda-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! booking rules of the platform. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AvailabilityRule, Payment, PaymentStatus, Reservation, ReservationStatus, Room, Voucher,
};
pub use error::DomainError;
pub use traits::{
    AvailabilityRepository, HolidayCalendar, PaymentRepository, RepoResult, ReservationRepository,
    RoomRepository, VoucherRepository,
};
pub use value_objects::{
    dia_to_weekday, weekday_to_dia, HourOfDay, HourRange, Slot, SlotKey, SoftDelete,
};
