//! Domain entities - core business objects

mod availability;
mod payment;
mod reservation;
mod room;
mod voucher;

pub use availability::AvailabilityRule;
pub use payment::Payment;
pub use reservation::{PaymentStatus, Reservation, ReservationStatus};
pub use room::Room;
pub use voucher::Voucher;
