//! Data transfer objects
//!
//! Request DTOs carry validated caller input into services; response DTOs are
//! the serializable views services return.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ApplyVoucherRequest, CreateBookingRequest, HourRangeDto, SetAvailabilityRequest,
    TransitionRequest,
};
pub use responses::{
    AvailabilityResponse, BookingDecision, BookingRejection, PaymentResponse, ReservationResponse,
};
