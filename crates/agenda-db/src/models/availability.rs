//! Availability database model (`psicologo_disponibilidad` table)

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the psicologo_disponibilidad table
///
/// One row per (psicologo_id, day); `hours` is a JSON array of
/// `{"inicio": "HH:00", "fin": "HH:00"}` objects.
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityModel {
    pub id: Uuid,
    pub psicologo_id: Uuid,
    /// Spanish weekday name, VARCHAR(20)
    pub day: String,
    pub active: bool,
    pub hours: serde_json::Value,
    pub sede_id: Option<Uuid>,
    pub works_on_holidays: bool,
}
