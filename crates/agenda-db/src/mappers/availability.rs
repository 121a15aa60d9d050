//! psicologo_disponibilidad row <-> AvailabilityRule entity mapper

use agenda_core::entities::AvailabilityRule;
use agenda_core::error::DomainError;
use agenda_core::traits::RepoResult;
use agenda_core::value_objects::{dia_to_weekday, HourRange};

use crate::models::AvailabilityModel;

pub fn availability_from_model(model: AvailabilityModel) -> RepoResult<AvailabilityRule> {
    let day = dia_to_weekday(&model.day).ok_or_else(|| {
        DomainError::Validation(format!("unknown weekday name: {:?}", model.day))
    })?;

    let hours: Vec<HourRange> = serde_json::from_value(model.hours)
        .map_err(|e| DomainError::Validation(format!("malformed hours column: {e}")))?;

    Ok(AvailabilityRule {
        id: model.id,
        psicologo_id: model.psicologo_id,
        day,
        active: model.active,
        hours,
        sede_id: model.sede_id,
        works_on_holidays: model.works_on_holidays,
    })
}

/// Serialize hour sub-ranges into the persisted JSON array
pub fn hours_to_json(hours: &[HourRange]) -> serde_json::Value {
    // HourRange serializes as {"inicio": "HH:00", "fin": "HH:00"}
    serde_json::to_value(hours).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
}
