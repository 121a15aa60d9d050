//! Config-driven holiday calendar
//!
//! The platform recognizes a fixed operational list of holiday dates
//! (Chilean national holidays, maintained in configuration). Availability
//! rules consult this through the `HolidayCalendar` port.

use std::collections::HashSet;

use agenda_core::traits::HolidayCalendar;
use chrono::NaiveDate;

use crate::config::HolidaysConfig;

/// Holiday calendar backed by a precomputed date set
#[derive(Debug, Clone, Default)]
pub struct FixedHolidayCalendar {
    fechas: HashSet<NaiveDate>,
}

impl FixedHolidayCalendar {
    /// Build from an explicit date list
    #[must_use]
    pub fn new(fechas: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            fechas: fechas.into_iter().collect(),
        }
    }

    /// Build from configuration
    #[must_use]
    pub fn from_config(config: &HolidaysConfig) -> Self {
        Self::new(config.fechas.iter().copied())
    }

    /// Number of configured holidays
    #[must_use]
    pub fn len(&self) -> usize {
        self.fechas.len()
    }

    /// Whether no holidays are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fechas.is_empty()
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn is_holiday(&self, fecha: NaiveDate) -> bool {
        self.fechas.contains(&fecha)
    }
}
