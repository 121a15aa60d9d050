//! Voucher database model (`voucher` table)

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the voucher table
#[derive(Debug, Clone, FromRow)]
pub struct VoucherModel {
    pub id: Uuid,
    pub nombre: String,
    pub porcentaje: i32,
    pub vencimiento: NaiveDate,
    pub modalidad: Option<String>,
    pub psicologo_id: Option<Uuid>,
    pub es_global: bool,
    pub limite_usos: i32,
    pub usos_actuales: i32,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VoucherModel {
    /// Check if the voucher is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
