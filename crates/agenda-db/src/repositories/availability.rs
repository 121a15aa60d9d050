//! PostgreSQL implementation of AvailabilityRepository

use async_trait::async_trait;
use chrono::Weekday;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agenda_core::entities::AvailabilityRule;
use agenda_core::traits::{AvailabilityRepository, RepoResult};
use agenda_core::value_objects::weekday_to_dia;

use crate::mappers::{availability_from_model, hours_to_json};
use crate::models::AvailabilityModel;

use super::error::map_db_error;

const SELECT_COLUMNS: &str =
    "id, psicologo_id, day, active, hours, sede_id, works_on_holidays";

/// PostgreSQL implementation of AvailabilityRepository
#[derive(Clone)]
pub struct PgAvailabilityRepository {
    pool: PgPool,
}

impl PgAvailabilityRepository {
    /// Create a new PgAvailabilityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    #[instrument(skip(self))]
    async fn find_rule(
        &self,
        psicologo_id: Uuid,
        day: Weekday,
    ) -> RepoResult<Option<AvailabilityRule>> {
        let result = sqlx::query_as::<_, AvailabilityModel>(&format!(
            r"
            SELECT {SELECT_COLUMNS}
            FROM psicologo_disponibilidad
            WHERE psicologo_id = $1 AND day = $2
            "
        ))
        .bind(psicologo_id)
        .bind(weekday_to_dia(day))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(availability_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_psicologo(&self, psicologo_id: Uuid) -> RepoResult<Vec<AvailabilityRule>> {
        let results = sqlx::query_as::<_, AvailabilityModel>(&format!(
            r"
            SELECT {SELECT_COLUMNS}
            FROM psicologo_disponibilidad
            WHERE psicologo_id = $1
            "
        ))
        .bind(psicologo_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(availability_from_model).collect()
    }

    #[instrument(skip(self, rule))]
    async fn upsert(&self, rule: &AvailabilityRule) -> RepoResult<()> {
        // Unique on (psicologo_id, day) by schema constraint
        sqlx::query(
            r"
            INSERT INTO psicologo_disponibilidad
                (id, psicologo_id, day, active, hours, sede_id, works_on_holidays)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (psicologo_id, day) DO UPDATE
            SET active = EXCLUDED.active,
                hours = EXCLUDED.hours,
                sede_id = EXCLUDED.sede_id,
                works_on_holidays = EXCLUDED.works_on_holidays
            ",
        )
        .bind(rule.id)
        .bind(rule.psicologo_id)
        .bind(rule.dia())
        .bind(rule.active)
        .bind(hours_to_json(&rule.hours))
        .bind(rule.sede_id)
        .bind(rule.works_on_holidays)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_psicologo(&self, psicologo_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM psicologo_disponibilidad WHERE psicologo_id = $1
            ",
        )
        .bind(psicologo_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
