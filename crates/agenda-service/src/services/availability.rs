//! Availability service - weekly rule management

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use agenda_core::entities::AvailabilityRule;
use agenda_core::value_objects::{dia_to_weekday, HourRange};

use crate::dto::{AvailabilityResponse, SetAvailabilityRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Availability service
pub struct AvailabilityService {
    ctx: ServiceContext,
}

impl AvailabilityService {
    /// Create a new availability service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set the rule for one weekday, replacing any existing rule for that day
    ///
    /// Sub-ranges are sorted before validation, so callers may send them in
    /// any order; overlapping sub-ranges are rejected.
    #[instrument(skip(self, request), fields(psicologo_id = %request.psicologo_id, dia = %request.dia))]
    pub async fn set_rule(
        &self,
        request: SetAvailabilityRequest,
    ) -> ServiceResult<AvailabilityResponse> {
        request.validate()?;
        let day = dia_to_weekday(&request.dia)
            .ok_or_else(|| ServiceError::validation(format!("unknown day name: {}", request.dia)))?;

        let mut hours = request
            .hours
            .iter()
            .map(|h| HourRange::parse(&h.inicio, &h.fin))
            .collect::<Result<Vec<_>, _>>()?;
        hours.sort_by_key(|range| range.inicio);

        let mut rule = AvailabilityRule::new(Uuid::new_v4(), request.psicologo_id, day, hours)?;
        rule.active = request.active;
        rule.sede_id = request.sede_id;
        rule.works_on_holidays = request.works_on_holidays;

        self.ctx.availability_repo().upsert(&rule).await?;

        info!(psicologo_id = %rule.psicologo_id, dia = rule.dia(), "availability rule upserted");
        Ok(AvailabilityResponse::from(&rule))
    }

    /// The psychologist's full weekly rule set
    #[instrument(skip(self))]
    pub async fn weekly_schedule(
        &self,
        psicologo_id: Uuid,
    ) -> ServiceResult<Vec<AvailabilityResponse>> {
        let mut rules = self
            .ctx
            .availability_repo()
            .find_by_psicologo(psicologo_id)
            .await?;
        rules.sort_by_key(|rule| rule.day.num_days_from_monday());
        Ok(rules.iter().map(AvailabilityResponse::from).collect())
    }

    /// Delete every rule for a psychologist (owner-deletion cascade hook)
    #[instrument(skip(self))]
    pub async fn remove_psicologo(&self, psicologo_id: Uuid) -> ServiceResult<u64> {
        let deleted = self
            .ctx
            .availability_repo()
            .delete_by_psicologo(psicologo_id)
            .await?;
        info!(%psicologo_id, deleted, "availability rules removed");
        Ok(deleted)
    }
}
