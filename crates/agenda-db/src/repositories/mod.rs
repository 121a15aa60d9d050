//! PostgreSQL repository implementations

pub mod error;

mod availability;
mod payment;
mod reservation;
mod room;
mod voucher;

pub use availability::PgAvailabilityRepository;
pub use payment::PgPaymentRepository;
pub use reservation::PgReservationRepository;
pub use room::PgRoomRepository;
pub use voucher::PgVoucherRepository;
