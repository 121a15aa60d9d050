//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use agenda_core::entities::Room;
use agenda_core::traits::{RepoResult, RoomRepository};

use crate::mappers::room_from_model;
use crate::models::RoomModel;

use super::error::{box_not_found, map_db_error};

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r#"
            SELECT id, "sedeId" AS sede_id, fotos,
                   "createdAt" AS created_at, "updatedAt" AS updated_at,
                   "deletedAt" AS deleted_at
            FROM boxes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(room_from_model))
    }

    #[instrument(skip(self))]
    async fn find_active(&self, sede_id: Option<Uuid>) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(
            r#"
            SELECT id, "sedeId" AS sede_id, fotos,
                   "createdAt" AS created_at, "updatedAt" AS updated_at,
                   "deletedAt" AS deleted_at
            FROM boxes
            WHERE "deletedAt" IS NULL
              AND ($1::uuid IS NULL OR "sedeId" = $1)
            ORDER BY "createdAt"
            "#,
        )
        .bind(sede_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(room_from_model).collect())
    }

    #[instrument(skip(self, room))]
    async fn create(&self, room: &Room) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO boxes (id, "sedeId", fotos, "createdAt", "updatedAt", "deletedAt")
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(room.id)
        .bind(room.sede_id)
        .bind(&room.fotos)
        .bind(room.created_at)
        .bind(room.updated_at)
        .bind(room.status.deleted_at())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE boxes
            SET "deletedAt" = NOW(), "updatedAt" = NOW()
            WHERE id = $1 AND "deletedAt" IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(box_not_found(id));
        }

        Ok(())
    }
}
