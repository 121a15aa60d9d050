//! Payment entity (`pagos`) - amounts in CLP with optional voucher discount

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// A payment row
///
/// Invariant: `monto_final == monto - descuento_aplicado` at all times.
/// Both constructors establish it; `invariant_holds` re-checks rows loaded
/// from storage (a backfill rule applied historically to pre-existing rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: Uuid,
    /// Gross amount in CLP
    pub monto: i64,
    pub cupon_id: Option<Uuid>,
    pub descuento_aplicado: i64,
    pub monto_final: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Create a payment without a voucher
    pub fn new(id: Uuid, monto: i64) -> Result<Self, DomainError> {
        Self::build(id, monto, None, 0)
    }

    /// Create a payment with a voucher discount already computed
    pub fn with_voucher(
        id: Uuid,
        monto: i64,
        cupon_id: Uuid,
        descuento_aplicado: i64,
    ) -> Result<Self, DomainError> {
        Self::build(id, monto, Some(cupon_id), descuento_aplicado)
    }

    fn build(
        id: Uuid,
        monto: i64,
        cupon_id: Option<Uuid>,
        descuento_aplicado: i64,
    ) -> Result<Self, DomainError> {
        if monto < 0 {
            return Err(DomainError::Validation(
                "payment amount must be non-negative".to_string(),
            ));
        }
        if descuento_aplicado < 0 || descuento_aplicado > monto {
            return Err(DomainError::Validation(format!(
                "discount {descuento_aplicado} out of range for amount {monto}"
            )));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            monto,
            cupon_id,
            descuento_aplicado,
            monto_final: monto - descuento_aplicado,
            created_at: now,
            updated_at: now,
        })
    }

    /// Re-check the amount invariant on a row loaded from storage
    #[inline]
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        self.monto_final == self.monto - self.descuento_aplicado
    }
}
