//! Database models mirroring the persisted schema

mod availability;
mod payment;
mod reservation;
mod room;
mod voucher;

pub use availability::AvailabilityModel;
pub use payment::PaymentModel;
pub use reservation::ReservationModel;
pub use room::RoomModel;
pub use voucher::VoucherModel;
