//! Pago row <-> Payment entity mapper

use agenda_core::entities::Payment;
use agenda_core::error::DomainError;
use agenda_core::traits::RepoResult;

use crate::models::PaymentModel;

pub fn payment_from_model(model: PaymentModel) -> RepoResult<Payment> {
    let payment = Payment {
        id: model.id,
        monto: model.monto,
        cupon_id: model.cupon_id,
        descuento_aplicado: model.descuento_aplicado,
        monto_final: model.monto_final,
        created_at: model.created_at,
        updated_at: model.updated_at,
    };
    // Rows predating the montoFinal backfill would violate the invariant;
    // surface them instead of propagating a wrong amount.
    if !payment.invariant_holds() {
        return Err(DomainError::Validation(format!(
            "payment {} violates monto_final = monto - descuento_aplicado",
            payment.id
        )));
    }
    Ok(payment)
}
