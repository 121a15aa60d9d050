//! # agenda-service
//!
//! Application layer containing the booking core: conflict checking,
//! reservation lifecycle, availability management, and voucher/payment
//! application.

pub mod dto;
pub mod services;

pub use services::{
    AvailabilityService, BookingService, PaymentService, ReservationLifecycleService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SlotLockRegistry,
};
