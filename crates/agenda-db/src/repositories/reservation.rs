//! PostgreSQL implementation of ReservationRepository
//!
//! The `reservas` table carries an exclusion constraint on
//! (boxId, fecha, hour interval) for rows in slot-holding states, added by the
//! external migrations. The insert path maps its violation to
//! `SchedulingConflict` as the storage backstop behind the in-process lock.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agenda_core::entities::{PaymentStatus, Reservation, ReservationStatus};
use agenda_core::error::DomainError;
use agenda_core::traits::{RepoResult, ReservationRepository};

use crate::mappers::reservation_from_model;
use crate::models::ReservationModel;

use super::error::{map_db_error, map_unique_violation, reservation_not_found};

const SELECT_COLUMNS: &str = r#"
    id, "boxId" AS box_id, "psicologoId" AS psicologo_id, fecha,
    "horaInicio" AS hora_inicio, "horaFin" AS hora_fin,
    estado::TEXT AS estado, "estadoPago"::TEXT AS estado_pago,
    precio::BIGINT AS precio,
    "createdAt" AS created_at, "updatedAt" AS updated_at
"#;

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(&format!(
            "SELECT {SELECT_COLUMNS} FROM reservas WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(reservation_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active_for_day(
        &self,
        box_id: Uuid,
        fecha: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let results = sqlx::query_as::<_, ReservationModel>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM reservas
            WHERE "boxId" = $1
              AND fecha = $2
              AND estado IN ('pendiente', 'confirmada', 'completada')
            ORDER BY "horaInicio"
            "#
        ))
        .bind(box_id)
        .bind(fecha)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(reservation_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_psicologo(
        &self,
        psicologo_id: Uuid,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let results = sqlx::query_as::<_, ReservationModel>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM reservas
            WHERE "psicologoId" = $1
              AND fecha BETWEEN $2 AND $3
            ORDER BY fecha, "horaInicio"
            "#
        ))
        .bind(psicologo_id)
        .bind(desde)
        .bind(hasta)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(reservation_from_model).collect()
    }

    #[instrument(skip(self, reservation))]
    async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reservas
                (id, "boxId", "psicologoId", fecha, "horaInicio", "horaFin",
                 estado, "estadoPago", precio, "createdAt", "updatedAt")
            VALUES ($1, $2, $3, $4, $5, $6,
                    $7::reservas_estado_enum, $8::reservas_estadopago_enum, $9, $10, $11)
            "#,
        )
        .bind(reservation.id)
        .bind(reservation.box_id)
        .bind(reservation.psicologo_id)
        .bind(reservation.fecha)
        .bind(reservation.horario.inicio.to_string())
        .bind(reservation.horario.fin.to_string())
        .bind(reservation.estado.as_str())
        .bind(reservation.estado_pago.as_str())
        .bind(reservation.precio)
        .bind(reservation.created_at)
        .bind(reservation.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SchedulingConflict {
                conflicting_id: reservation.id,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_estado(
        &self,
        id: Uuid,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> RepoResult<()> {
        // Compare-and-set: a cancel landing between the caller's load and this
        // write must not be overwritten.
        let result = sqlx::query(
            r#"
            UPDATE reservas
            SET estado = $3::reservas_estado_enum, "updatedAt" = NOW()
            WHERE id = $1 AND estado = $2::reservas_estado_enum
            "#,
        )
        .bind(id)
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(id).await? {
                Some(current) => Err(DomainError::InvalidTransition {
                    from: current.estado,
                    to,
                }),
                None => Err(reservation_not_found(id)),
            };
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_estado_pago(&self, id: Uuid, estado_pago: PaymentStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE reservas
            SET "estadoPago" = $2::reservas_estadopago_enum, "updatedAt" = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(estado_pago.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reservation_not_found(id));
        }

        Ok(())
    }
}
