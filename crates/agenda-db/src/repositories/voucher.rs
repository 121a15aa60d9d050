//! PostgreSQL implementation of VoucherRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agenda_core::entities::Voucher;
use agenda_core::error::DomainError;
use agenda_core::traits::{RepoResult, VoucherRepository};

use crate::mappers::voucher_from_model;
use crate::models::VoucherModel;

use super::error::{map_db_error, voucher_not_found};

const SELECT_COLUMNS: &str = r#"
    id, nombre, porcentaje, vencimiento, modalidad,
    "psicologoId" AS psicologo_id, "esGlobal" AS es_global,
    "limiteUsos" AS limite_usos, "usosActuales" AS usos_actuales,
    "deletedAt" AS deleted_at
"#;

/// PostgreSQL implementation of VoucherRepository
#[derive(Clone)]
pub struct PgVoucherRepository {
    pool: PgPool,
}

impl PgVoucherRepository {
    /// Create a new PgVoucherRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoucherRepository for PgVoucherRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Voucher>> {
        let result = sqlx::query_as::<_, VoucherModel>(&format!(
            "SELECT {SELECT_COLUMNS} FROM voucher WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(voucher_from_model).transpose()
    }

    #[instrument(skip(self, voucher))]
    async fn create(&self, voucher: &Voucher) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO voucher
                (id, nombre, porcentaje, vencimiento, modalidad,
                 "psicologoId", "esGlobal", "limiteUsos", "usosActuales", "deletedAt")
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(voucher.id)
        .bind(&voucher.nombre)
        .bind(i32::from(voucher.porcentaje))
        .bind(voucher.vencimiento)
        .bind(&voucher.modalidad)
        .bind(voucher.psicologo_id)
        .bind(voucher.es_global)
        .bind(voucher.limite_usos)
        .bind(voucher.usos_actuales)
        .bind(voucher.status.deleted_at())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_usos(&self, id: Uuid) -> RepoResult<()> {
        // Guarded increment: zero rows affected means the limit was hit by a
        // concurrent redemption (or the voucher is gone).
        let result = sqlx::query(
            r#"
            UPDATE voucher
            SET "usosActuales" = "usosActuales" + 1
            WHERE id = $1
              AND "deletedAt" IS NULL
              AND "usosActuales" < "limiteUsos"
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(id).await? {
                Some(_) => Err(DomainError::VoucherExhausted),
                None => Err(voucher_not_found(id)),
            };
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn decrement_usos(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE voucher
            SET "usosActuales" = "usosActuales" - 1
            WHERE id = $1 AND "usosActuales" > 0
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Already-zero counters are left alone; only a missing row is an error
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(voucher_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_applicable(
        &self,
        psicologo_id: Uuid,
        today: NaiveDate,
    ) -> RepoResult<Vec<Voucher>> {
        let results = sqlx::query_as::<_, VoucherModel>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM voucher
            WHERE "deletedAt" IS NULL
              AND vencimiento >= $2
              AND "usosActuales" < "limiteUsos"
              AND ("esGlobal" = TRUE OR "psicologoId" = $1)
            ORDER BY vencimiento
            "#
        ))
        .bind(psicologo_id)
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(voucher_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE voucher
            SET "deletedAt" = NOW()
            WHERE id = $1 AND "deletedAt" IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(voucher_not_found(id));
        }

        Ok(())
    }
}
