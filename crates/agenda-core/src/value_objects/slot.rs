//! Candidate reservation slot - a box, a calendar day, and an hour interval

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

use super::hour::{HourOfDay, HourRange};

/// Identity of the serialization scope for booking: one box on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub box_id: Uuid,
    pub fecha: NaiveDate,
}

/// A candidate or persisted reservation interval
///
/// The date is a naive local calendar day; no timezone conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub box_id: Uuid,
    pub fecha: NaiveDate,
    pub horario: HourRange,
}

impl Slot {
    /// Create a slot from validated hour boundaries
    pub fn new(
        box_id: Uuid,
        fecha: NaiveDate,
        inicio: HourOfDay,
        fin: HourOfDay,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            box_id,
            fecha,
            horario: HourRange::new(inicio, fin)?,
        })
    }

    /// Create a slot from `"HH:00"` strings as they arrive from callers
    pub fn parse(
        box_id: Uuid,
        fecha: NaiveDate,
        hora_inicio: &str,
        hora_fin: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            box_id,
            fecha,
            horario: HourRange::parse(hora_inicio, hora_fin)?,
        })
    }

    /// Serialization key for this slot
    #[inline]
    #[must_use]
    pub fn key(&self) -> SlotKey {
        SlotKey {
            box_id: self.box_id,
            fecha: self.fecha,
        }
    }

    /// Day of week of the slot's date
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.fecha.weekday()
    }

    /// Whether two slots compete for the same box time
    ///
    /// Slots on different boxes or different dates never overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.box_id == other.box_id
            && self.fecha == other.fecha
            && self.horario.overlaps(&other.horario)
    }
}
