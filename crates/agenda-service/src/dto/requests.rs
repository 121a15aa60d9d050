//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Hour boundaries travel as `"HH:00"` strings and are parsed
//! into value objects by the services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Booking Requests
// ============================================================================

/// Request to book a box for one interval on one day
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub box_id: Uuid,

    pub psicologo_id: Uuid,

    /// Naive local calendar day, `YYYY-MM-DD`
    pub fecha: NaiveDate,

    #[validate(length(min = 5, max = 5, message = "hora_inicio must be HH:00"))]
    pub hora_inicio: String,

    #[validate(length(min = 5, max = 5, message = "hora_fin must be HH:00"))]
    pub hora_fin: String,

    /// Gross price in CLP
    #[validate(range(min = 0, message = "precio must be non-negative"))]
    pub precio: i64,

    /// Create as `pendiente` and require an explicit confirmation step
    /// (default is direct `confirmada`)
    #[serde(default)]
    pub require_confirmation: bool,
}

/// Request to move a reservation to a new `estado`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransitionRequest {
    /// Target status label: pendiente, confirmada, cancelada, completada
    #[validate(length(min = 1, message = "estado is required"))]
    pub estado: String,
}

// ============================================================================
// Payment Requests
// ============================================================================

/// Request to record a payment, optionally redeeming a voucher
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplyVoucherRequest {
    /// Gross amount in CLP
    #[validate(range(min = 0, message = "monto must be non-negative"))]
    pub monto: i64,

    /// Voucher to redeem; omitted for plain payments
    pub cupon_id: Option<Uuid>,

    /// Redeeming psychologist
    pub psicologo_id: Uuid,
}

// ============================================================================
// Availability Requests
// ============================================================================

/// One hour sub-range as it travels on the wire (also used in responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourRangeDto {
    pub inicio: String,
    pub fin: String,
}

/// Request to set the weekly rule for one weekday
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetAvailabilityRequest {
    pub psicologo_id: Uuid,

    /// Spanish weekday name as persisted: lunes .. domingo
    #[validate(length(min = 1, message = "dia is required"))]
    pub dia: String,

    #[validate(length(min = 1, message = "at least one hour sub-range is required"))]
    pub hours: Vec<HourRangeDto>,

    #[serde(default = "default_active")]
    pub active: bool,

    pub sede_id: Option<Uuid>,

    #[serde(default)]
    pub works_on_holidays: bool,
}

fn default_active() -> bool {
    true
}
