//! Reservation lifecycle service - estado and estado_pago transitions

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use agenda_core::entities::{Reservation, ReservationStatus};
use agenda_core::error::DomainError;

use crate::dto::{ReservationResponse, TransitionRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reservation lifecycle service
pub struct ReservationLifecycleService {
    ctx: ServiceContext,
}

impl ReservationLifecycleService {
    /// Create a new lifecycle service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Move a reservation to a new `estado`
    ///
    /// Transitions off the table are rejected without touching storage.
    /// Confirmation re-runs the overlap check under the slot lock: the slot
    /// may have been rebooked between creation and confirmation. The write is
    /// a compare-and-set against the loaded `estado`, so a cancel landing in
    /// between is never overwritten.
    #[instrument(skip(self, request))]
    pub async fn transition(
        &self,
        reservation_id: Uuid,
        request: &TransitionRequest,
    ) -> ServiceResult<ReservationResponse> {
        request.validate()?;
        let target = ReservationStatus::parse(&request.estado)?;
        let mut reservation = self.load(reservation_id).await?;
        let current = reservation.estado;

        if target == ReservationStatus::Confirmada {
            let _guard = self.ctx.slot_locks().acquire(reservation.slot().key()).await?;
            self.check_still_free(&reservation).await?;
            reservation.transition(target)?;
            self.ctx
                .reservation_repo()
                .update_estado(reservation_id, current, target)
                .await?;
        } else {
            reservation.transition(target)?;
            self.ctx
                .reservation_repo()
                .update_estado(reservation_id, current, target)
                .await?;
        }

        info!(%reservation_id, estado = %target, "reservation transitioned");
        Ok(ReservationResponse::from(&reservation))
    }

    /// Cancel a reservation, releasing its slot
    #[instrument(skip(self))]
    pub async fn cancel(&self, reservation_id: Uuid) -> ServiceResult<ReservationResponse> {
        let mut reservation = self.load(reservation_id).await?;
        let current = reservation.estado;
        reservation.transition(ReservationStatus::Cancelada)?;
        self.ctx
            .reservation_repo()
            .update_estado(reservation_id, current, ReservationStatus::Cancelada)
            .await?;

        info!(%reservation_id, "reservation cancelled");
        Ok(ReservationResponse::from(&reservation))
    }

    /// Fetch a reservation view
    #[instrument(skip(self))]
    pub async fn get(&self, reservation_id: Uuid) -> ServiceResult<ReservationResponse> {
        let reservation = self.load(reservation_id).await?;
        Ok(ReservationResponse::from(&reservation))
    }

    async fn load(&self, reservation_id: Uuid) -> ServiceResult<Reservation> {
        Ok(self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?)
    }

    /// Overlap re-check for confirmation, excluding the reservation itself
    async fn check_still_free(&self, reservation: &Reservation) -> ServiceResult<()> {
        let candidate = reservation.slot();
        let existing = self
            .ctx
            .reservation_repo()
            .find_active_for_day(reservation.box_id, reservation.fecha)
            .await?;
        if let Some(conflict) = existing
            .iter()
            .filter(|r| r.id != reservation.id && r.is_active())
            .find(|r| r.slot().overlaps(&candidate))
        {
            return Err(DomainError::SchedulingConflict {
                conflicting_id: conflict.id,
            }
            .into());
        }
        Ok(())
    }
}
