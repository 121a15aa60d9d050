//! Weekly availability rule - one row per (psychologist, weekday)

use chrono::Weekday;
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::{weekday_to_dia, HourRange};

/// Recurring availability for one weekday
///
/// Unique per `(psicologo_id, day)`; deleted in cascade with the owning user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRule {
    pub id: Uuid,
    pub psicologo_id: Uuid,
    pub day: Weekday,
    pub active: bool,
    /// Permitted hour sub-ranges for the day, sorted and non-overlapping
    pub hours: Vec<HourRange>,
    pub sede_id: Option<Uuid>,
    pub works_on_holidays: bool,
}

impl AvailabilityRule {
    /// Create a rule after validating its hour sub-ranges
    pub fn new(
        id: Uuid,
        psicologo_id: Uuid,
        day: Weekday,
        hours: Vec<HourRange>,
    ) -> Result<Self, DomainError> {
        validate_hours(&hours)?;
        Ok(Self {
            id,
            psicologo_id,
            day,
            active: true,
            hours,
            sede_id: None,
            works_on_holidays: false,
        })
    }

    /// Whether an active rule permits the candidate interval
    ///
    /// The candidate must be fully contained within a single permitted
    /// sub-range; intervals spanning a gap between sub-ranges are rejected.
    #[must_use]
    pub fn permits(&self, candidate: &HourRange) -> bool {
        self.active && self.hours.iter().any(|range| range.contains(candidate))
    }

    /// Persisted day label
    #[must_use]
    pub fn dia(&self) -> &'static str {
        weekday_to_dia(self.day)
    }
}

/// Validate that sub-ranges are sorted and pairwise disjoint
pub fn validate_hours(hours: &[HourRange]) -> Result<(), DomainError> {
    for window in hours.windows(2) {
        if window[0].fin > window[1].inicio {
            return Err(DomainError::Validation(format!(
                "availability sub-ranges must be sorted and disjoint: {} vs {}",
                window[0], window[1]
            )));
        }
    }
    Ok(())
}
