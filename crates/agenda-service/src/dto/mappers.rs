//! Entity-to-DTO mappers

use agenda_core::entities::{AvailabilityRule, Payment, Reservation};
use agenda_core::error::DomainError;

use super::requests::HourRangeDto;
use super::responses::{AvailabilityResponse, BookingRejection, PaymentResponse, ReservationResponse};

impl From<&Reservation> for ReservationResponse {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            box_id: r.box_id,
            psicologo_id: r.psicologo_id,
            fecha: r.fecha,
            hora_inicio: r.horario.inicio.to_string(),
            hora_fin: r.horario.fin.to_string(),
            estado: r.estado.as_str().to_string(),
            estado_pago: r.estado_pago.as_str().to_string(),
            precio: r.precio,
            created_at: r.created_at,
        }
    }
}

impl From<&AvailabilityRule> for AvailabilityResponse {
    fn from(rule: &AvailabilityRule) -> Self {
        Self {
            psicologo_id: rule.psicologo_id,
            dia: rule.dia().to_string(),
            active: rule.active,
            hours: rule
                .hours
                .iter()
                .map(|h| HourRangeDto {
                    inicio: h.inicio.to_string(),
                    fin: h.fin.to_string(),
                })
                .collect(),
            sede_id: rule.sede_id,
            works_on_holidays: rule.works_on_holidays,
        }
    }
}

impl From<&Payment> for PaymentResponse {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id,
            monto: p.monto,
            cupon_id: p.cupon_id,
            descuento_aplicado: p.descuento_aplicado,
            monto_final: p.monto_final,
            created_at: p.created_at,
        }
    }
}

/// Convert a booking-rejection error into its response form
///
/// Returns `None` for errors that are not rejections of an evaluated slot
/// (validation failures, infrastructure errors, lock timeouts).
#[must_use]
pub fn rejection_from_error(err: &DomainError) -> Option<BookingRejection> {
    if !err.is_booking_rejection() {
        return None;
    }
    let conflicting_id = match err {
        DomainError::SchedulingConflict { conflicting_id } => Some(*conflicting_id),
        _ => None,
    };
    Some(BookingRejection {
        code: err.code().to_string(),
        message: err.to_string(),
        conflicting_id,
    })
}
