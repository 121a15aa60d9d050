//! Service layer
//!
//! Services own the use cases; they consume repositories through the
//! `ServiceContext` and return DTOs or `ServiceError`.

mod availability;
mod booking;
mod context;
mod error;
mod lifecycle;
mod payment;
mod slots;

pub use availability::AvailabilityService;
pub use booking::BookingService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use lifecycle::ReservationLifecycleService;
pub use payment::PaymentService;
pub use slots::SlotLockRegistry;
