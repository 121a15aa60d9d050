//! Booking service - slot evaluation and reservation creation
//!
//! The rule checks are a pure function over snapshots; `book` runs them under
//! the per-(box, fecha) lock so the check-then-insert sequence is serialized
//! against concurrent attempts on the same slot scope.

use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use agenda_core::entities::{AvailabilityRule, Reservation, ReservationStatus, Room};
use agenda_core::error::DomainError;
use agenda_core::value_objects::{weekday_to_dia, Slot};

use crate::dto::mappers::rejection_from_error;
use crate::dto::{BookingDecision, CreateBookingRequest, ReservationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Booking service
pub struct BookingService {
    ctx: ServiceContext,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book a slot, creating the reservation when every rule passes
    ///
    /// Runs under the slot lock: between the rule checks and the insert no
    /// other booking for the same (box, fecha) can interleave. A rejected
    /// request writes nothing.
    #[instrument(skip(self, request), fields(box_id = %request.box_id, fecha = %request.fecha))]
    pub async fn book(&self, request: CreateBookingRequest) -> ServiceResult<ReservationResponse> {
        request.validate()?;
        let slot = Slot::parse(
            request.box_id,
            request.fecha,
            &request.hora_inicio,
            &request.hora_fin,
        )?;

        let _guard = self.ctx.slot_locks().acquire(slot.key()).await?;

        let snapshot = self.load_snapshot(&slot, request.psicologo_id).await?;
        snapshot.check(&slot)?;

        let estado = if request.require_confirmation {
            ReservationStatus::Pendiente
        } else {
            ReservationStatus::default()
        };
        let reservation = Reservation::from_slot(
            Uuid::new_v4(),
            slot,
            request.psicologo_id,
            estado,
            request.precio,
        );
        // Unique/exclusion violations surface as SchedulingConflict; the
        // storage constraint is the backstop, the lock the primary guard.
        self.ctx.reservation_repo().create(&reservation).await?;

        info!(
            reservation_id = %reservation.id,
            psicologo_id = %reservation.psicologo_id,
            estado = %reservation.estado,
            "reservation created"
        );
        Ok(ReservationResponse::from(&reservation))
    }

    /// Evaluate a candidate slot without committing anything
    ///
    /// Lock-free: the answer reflects the state at read time and may be
    /// invalidated by a concurrent booking.
    #[instrument(skip(self, request), fields(box_id = %request.box_id, fecha = %request.fecha))]
    pub async fn evaluate_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> ServiceResult<BookingDecision> {
        request.validate()?;
        let slot = Slot::parse(
            request.box_id,
            request.fecha,
            &request.hora_inicio,
            &request.hora_fin,
        )?;

        let snapshot = self.load_snapshot(&slot, request.psicologo_id).await?;
        match snapshot.check(&slot) {
            Ok(()) => Ok(BookingDecision::Accepted),
            Err(err) => match rejection_from_error(&err) {
                Some(rejection) => Ok(BookingDecision::Rejected(rejection)),
                None => Err(err.into()),
            },
        }
    }

    /// Reservations for a psychologist in a closed date range
    #[instrument(skip(self))]
    pub async fn reservations_for_psicologo(
        &self,
        psicologo_id: Uuid,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> ServiceResult<Vec<ReservationResponse>> {
        if desde > hasta {
            return Err(ServiceError::validation(format!(
                "date range is inverted: {desde} > {hasta}"
            )));
        }
        let reservations = self
            .ctx
            .reservation_repo()
            .find_by_psicologo(psicologo_id, desde, hasta)
            .await?;
        Ok(reservations.iter().map(ReservationResponse::from).collect())
    }

    async fn load_snapshot(
        &self,
        slot: &Slot,
        psicologo_id: Uuid,
    ) -> ServiceResult<BookingSnapshot> {
        let room = self
            .ctx
            .room_repo()
            .find_by_id(slot.box_id)
            .await?
            .ok_or(DomainError::BoxNotFound(slot.box_id))?;
        let rule = self
            .ctx
            .availability_repo()
            .find_rule(psicologo_id, slot.weekday())
            .await?;
        let existing = self
            .ctx
            .reservation_repo()
            .find_active_for_day(slot.box_id, slot.fecha)
            .await?;
        Ok(BookingSnapshot {
            room,
            rule,
            is_holiday: self.ctx.holiday_calendar().is_holiday(slot.fecha),
            existing,
        })
    }
}

/// State read for one booking attempt
///
/// Checks run over this snapshot only; `check` performs no I/O.
struct BookingSnapshot {
    room: Room,
    rule: Option<AvailabilityRule>,
    is_holiday: bool,
    existing: Vec<Reservation>,
}

impl BookingSnapshot {
    /// Apply the booking rules in order, returning the first violation
    ///
    /// Order: box availability, weekly rule, holiday restriction, overlap
    /// scan. The first failed rule names the rejection.
    fn check(&self, candidate: &Slot) -> Result<(), DomainError> {
        if !self.room.is_bookable() {
            return Err(DomainError::BoxUnavailable(candidate.box_id));
        }

        let dia = weekday_to_dia(candidate.weekday());
        let rule = match &self.rule {
            Some(rule) => rule,
            None => {
                return Err(DomainError::OutsideAvailability {
                    dia: dia.to_string(),
                    detail: "no availability rule defined".to_string(),
                })
            }
        };
        if !rule.permits(&candidate.horario) {
            return Err(DomainError::OutsideAvailability {
                dia: dia.to_string(),
                detail: format!("{} not permitted", candidate.horario),
            });
        }

        if self.is_holiday && !rule.works_on_holidays {
            return Err(DomainError::HolidayRestriction {
                fecha: candidate.fecha,
            });
        }

        if let Some(conflict) = self
            .existing
            .iter()
            .filter(|r| r.is_active())
            .find(|r| r.slot().overlaps(candidate))
        {
            return Err(DomainError::SchedulingConflict {
                conflicting_id: conflict.id,
            });
        }

        Ok(())
    }
}
