//! Voucher row <-> Voucher entity mapper

use agenda_core::entities::Voucher;
use agenda_core::error::DomainError;
use agenda_core::traits::RepoResult;
use agenda_core::value_objects::SoftDelete;

use crate::models::VoucherModel;

pub fn voucher_from_model(model: VoucherModel) -> RepoResult<Voucher> {
    let porcentaje = u8::try_from(model.porcentaje)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or_else(|| {
            DomainError::Validation(format!(
                "voucher percentage {} out of range (0..=100)",
                model.porcentaje
            ))
        })?;

    Ok(Voucher {
        id: model.id,
        nombre: model.nombre,
        porcentaje,
        vencimiento: model.vencimiento,
        modalidad: model.modalidad,
        psicologo_id: model.psicologo_id,
        es_global: model.es_global,
        limite_usos: model.limite_usos,
        usos_actuales: model.usos_actuales,
        status: SoftDelete::from(model.deleted_at),
    })
}
