//! PostgreSQL implementation of PaymentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agenda_core::entities::Payment;
use agenda_core::traits::{PaymentRepository, RepoResult};

use crate::mappers::payment_from_model;
use crate::models::PaymentModel;

use super::error::map_db_error;

const SELECT_COLUMNS: &str = r#"
    id, monto::BIGINT AS monto, "cuponId" AS cupon_id,
    "descuentoAplicado"::BIGINT AS descuento_aplicado,
    "montoFinal"::BIGINT AS monto_final,
    "createdAt" AS created_at, "updatedAt" AS updated_at
"#;

/// PostgreSQL implementation of PaymentRepository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    /// Create a new PgPaymentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Payment>> {
        let result = sqlx::query_as::<_, PaymentModel>(&format!(
            "SELECT {SELECT_COLUMNS} FROM pagos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(payment_from_model).transpose()
    }

    #[instrument(skip(self, payment))]
    async fn create(&self, payment: &Payment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO pagos
                (id, monto, "cuponId", "descuentoAplicado", "montoFinal",
                 "createdAt", "updatedAt")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(payment.id)
        .bind(payment.monto)
        .bind(payment.cupon_id)
        .bind(payment.descuento_aplicado)
        .bind(payment.monto_final)
        .bind(payment.created_at)
        .bind(payment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_voucher(&self, cupon_id: Uuid) -> RepoResult<Vec<Payment>> {
        let results = sqlx::query_as::<_, PaymentModel>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM pagos
            WHERE "cuponId" = $1
            ORDER BY "createdAt"
            "#
        ))
        .bind(cupon_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(payment_from_model).collect()
    }
}
