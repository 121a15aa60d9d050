//! Voucher entity - a percentage-discount coupon applied to payments

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::SoftDelete;

/// Percentage-discount coupon
///
/// Global vouchers have no owning psychologist; owned vouchers apply only to
/// their owner's payments. Expiry and usage limits are enforced at
/// application time, never at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voucher {
    pub id: Uuid,
    pub nombre: String,
    /// Discount percentage, 0..=100
    pub porcentaje: u8,
    pub vencimiento: NaiveDate,
    pub modalidad: Option<String>,
    pub psicologo_id: Option<Uuid>,
    pub es_global: bool,
    pub limite_usos: i32,
    pub usos_actuales: i32,
    pub status: SoftDelete,
}

impl Voucher {
    /// Create a voucher owned by a psychologist
    pub fn new(
        id: Uuid,
        nombre: String,
        porcentaje: u8,
        vencimiento: NaiveDate,
        psicologo_id: Uuid,
        limite_usos: i32,
    ) -> Result<Self, DomainError> {
        Self::build(id, nombre, porcentaje, vencimiento, Some(psicologo_id), false, limite_usos)
    }

    /// Create a global voucher (no owning psychologist)
    pub fn new_global(
        id: Uuid,
        nombre: String,
        porcentaje: u8,
        vencimiento: NaiveDate,
        limite_usos: i32,
    ) -> Result<Self, DomainError> {
        Self::build(id, nombre, porcentaje, vencimiento, None, true, limite_usos)
    }

    fn build(
        id: Uuid,
        nombre: String,
        porcentaje: u8,
        vencimiento: NaiveDate,
        psicologo_id: Option<Uuid>,
        es_global: bool,
        limite_usos: i32,
    ) -> Result<Self, DomainError> {
        if porcentaje > 100 {
            return Err(DomainError::Validation(format!(
                "voucher percentage {porcentaje} out of range (0..=100)"
            )));
        }
        if limite_usos <= 0 {
            return Err(DomainError::Validation(
                "voucher usage limit must be positive".to_string(),
            ));
        }
        Ok(Self {
            id,
            nombre,
            porcentaje,
            vencimiento,
            modalidad: None,
            psicologo_id,
            es_global,
            limite_usos,
            usos_actuales: 0,
            status: SoftDelete::Active,
        })
    }

    /// Check if the voucher has expired as of `today`
    #[inline]
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.vencimiento < today
    }

    /// Check if the voucher has reached its usage limit
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.usos_actuales >= self.limite_usos
    }

    /// Remaining uses
    #[must_use]
    pub fn remaining_usos(&self) -> i32 {
        (self.limite_usos - self.usos_actuales).max(0)
    }

    /// Validate the voucher against a redeeming psychologist on `today`
    pub fn check_applicable(
        &self,
        today: NaiveDate,
        psicologo_id: Uuid,
    ) -> Result<(), DomainError> {
        if !self.status.is_active() {
            return Err(DomainError::VoucherNotApplicable(
                "voucher has been deleted".to_string(),
            ));
        }
        if self.is_expired(today) {
            return Err(DomainError::VoucherExpired {
                vencimiento: self.vencimiento,
            });
        }
        if self.is_exhausted() {
            return Err(DomainError::VoucherExhausted);
        }
        if !self.es_global && self.psicologo_id != Some(psicologo_id) {
            return Err(DomainError::VoucherNotApplicable(
                "voucher belongs to another psychologist".to_string(),
            ));
        }
        Ok(())
    }

    /// Discount in CLP for a gross amount, floored to a whole peso
    #[must_use]
    pub fn descuento(&self, monto: i64) -> i64 {
        monto * i64::from(self.porcentaje) / 100
    }
}
