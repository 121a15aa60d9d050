//! Model <-> entity mappers
//!
//! Rows are permissive (TEXT statuses, JSON hour arrays); mapping into domain
//! entities is where malformed legacy data surfaces as errors.

mod availability;
mod payment;
mod reservation;
mod room;
mod voucher;

pub use availability::{availability_from_model, hours_to_json};
pub use payment::payment_from_model;
pub use reservation::reservation_from_model;
pub use room::room_from_model;
pub use voucher::voucher_from_model;
