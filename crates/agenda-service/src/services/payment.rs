//! Payment service - payment recording, voucher application, estado_pago

use chrono::{Local, NaiveDate};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use agenda_core::entities::{Payment, PaymentStatus, Voucher};
use agenda_core::error::DomainError;

use crate::dto::{ApplyVoucherRequest, PaymentResponse, ReservationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Payment service
pub struct PaymentService {
    ctx: ServiceContext,
}

impl PaymentService {
    /// Create a new payment service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a payment, redeeming the voucher when one is given
    ///
    /// Applicability is evaluated against today's local calendar date.
    #[instrument(skip(self, request), fields(monto = request.monto))]
    pub async fn record(&self, request: ApplyVoucherRequest) -> ServiceResult<PaymentResponse> {
        self.record_on(request, Local::now().date_naive()).await
    }

    /// Record a payment with an explicit redemption date
    ///
    /// Voucher redemption is all-or-nothing: a rejected voucher writes
    /// neither the payment nor the usage increment, and a failed payment
    /// insert releases the increment again. The guarded increment runs before
    /// the insert so a concurrent redemption past the limit loses here.
    pub async fn record_on(
        &self,
        request: ApplyVoucherRequest,
        today: NaiveDate,
    ) -> ServiceResult<PaymentResponse> {
        request.validate()?;

        let payment = match request.cupon_id {
            None => Payment::new(Uuid::new_v4(), request.monto)?,
            Some(cupon_id) => {
                let voucher = self
                    .ctx
                    .voucher_repo()
                    .find_by_id(cupon_id)
                    .await?
                    .ok_or(DomainError::VoucherNotFound(cupon_id))?;
                voucher.check_applicable(today, request.psicologo_id)?;

                let descuento = voucher.descuento(request.monto);
                let payment =
                    Payment::with_voucher(Uuid::new_v4(), request.monto, cupon_id, descuento)?;
                self.ctx.voucher_repo().increment_usos(cupon_id).await?;
                payment
            }
        };

        if let Err(err) = self.ctx.payment_repo().create(&payment).await {
            // The counter must only count persisted payments
            if let Some(cupon_id) = payment.cupon_id {
                if let Err(release_err) = self.ctx.voucher_repo().decrement_usos(cupon_id).await {
                    warn!(%cupon_id, error = %release_err, "failed to release voucher use");
                }
            }
            return Err(err.into());
        }

        info!(
            payment_id = %payment.id,
            monto_final = payment.monto_final,
            descuento = payment.descuento_aplicado,
            "payment recorded"
        );
        Ok(PaymentResponse::from(&payment))
    }

    /// Mark a reservation's payment as settled
    ///
    /// `estado_pago` moves independently of `estado`; no reservation
    /// transition is implied.
    #[instrument(skip(self))]
    pub async fn mark_paid(&self, reservation_id: Uuid) -> ServiceResult<ReservationResponse> {
        let mut reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;
        reservation.transition_pago(PaymentStatus::Pagado)?;
        self.ctx
            .reservation_repo()
            .update_estado_pago(reservation_id, PaymentStatus::Pagado)
            .await?;

        info!(%reservation_id, "reservation marked paid");
        Ok(ReservationResponse::from(&reservation))
    }

    /// Fetch a payment view
    #[instrument(skip(self))]
    pub async fn get(&self, payment_id: Uuid) -> ServiceResult<PaymentResponse> {
        let payment = self
            .ctx
            .payment_repo()
            .find_by_id(payment_id)
            .await?
            .ok_or(DomainError::PaymentNotFound(payment_id))?;
        Ok(PaymentResponse::from(&payment))
    }

    /// Payments that redeemed a voucher
    #[instrument(skip(self))]
    pub async fn redemptions(&self, cupon_id: Uuid) -> ServiceResult<Vec<PaymentResponse>> {
        let payments = self.ctx.payment_repo().find_by_voucher(cupon_id).await?;
        Ok(payments.iter().map(PaymentResponse::from).collect())
    }

    /// Vouchers a psychologist could redeem today
    #[instrument(skip(self))]
    pub async fn applicable_vouchers(&self, psicologo_id: Uuid) -> ServiceResult<Vec<Voucher>> {
        Ok(self
            .ctx
            .voucher_repo()
            .find_applicable(psicologo_id, Local::now().date_naive())
            .await?)
    }
}
