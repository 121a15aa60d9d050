//! Reservation database model (`reservas` table)

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reservas table
///
/// `estado` / `estado_pago` are PostgreSQL enums selected as TEXT; hours are
/// persisted as `"HH:00"` strings.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: Uuid,
    pub box_id: Uuid,
    pub psicologo_id: Uuid,
    pub fecha: NaiveDate,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub estado: String,
    pub estado_pago: String,
    /// CLP amount (NUMERIC column cast to BIGINT on select)
    pub precio: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
