//! Response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::requests::HourRangeDto;

/// Serializable view of a reservation
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub box_id: Uuid,
    pub psicologo_id: Uuid,
    pub fecha: NaiveDate,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub estado: String,
    pub estado_pago: String,
    pub precio: i64,
    pub created_at: DateTime<Utc>,
}

/// Outcome of evaluating a candidate slot without committing it
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum BookingDecision {
    Accepted,
    Rejected(BookingRejection),
}

impl BookingDecision {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A booking rejection with the first violated rule identified
#[derive(Debug, Clone, Serialize)]
pub struct BookingRejection {
    pub code: String,
    pub message: String,
    /// Set when the rejection is a scheduling conflict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_id: Option<Uuid>,
}

/// Serializable view of one weekday's availability rule
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub psicologo_id: Uuid,
    pub dia: String,
    pub active: bool,
    pub hours: Vec<HourRangeDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sede_id: Option<Uuid>,
    pub works_on_holidays: bool,
}

/// Serializable view of a payment
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub monto: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cupon_id: Option<Uuid>,
    pub descuento_aplicado: i64,
    pub monto_final: i64,
    pub created_at: DateTime<Utc>,
}
