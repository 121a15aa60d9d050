//! Reserva row <-> Reservation entity mapper

use agenda_core::entities::{PaymentStatus, Reservation, ReservationStatus};
use agenda_core::traits::RepoResult;
use agenda_core::value_objects::HourRange;

use crate::models::ReservationModel;

pub fn reservation_from_model(model: ReservationModel) -> RepoResult<Reservation> {
    Ok(Reservation {
        id: model.id,
        box_id: model.box_id,
        psicologo_id: model.psicologo_id,
        fecha: model.fecha,
        horario: HourRange::parse(&model.hora_inicio, &model.hora_fin)?,
        estado: ReservationStatus::parse(&model.estado)?,
        estado_pago: PaymentStatus::parse(&model.estado_pago)?,
        precio: model.precio,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
