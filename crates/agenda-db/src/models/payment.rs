//! Payment database model (`pagos` table)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the pagos table
///
/// CLP amounts (NUMERIC columns) are cast to BIGINT on select.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentModel {
    pub id: Uuid,
    pub monto: i64,
    pub cupon_id: Option<Uuid>,
    pub descuento_aplicado: i64,
    pub monto_final: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
