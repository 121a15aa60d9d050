//! Whole-hour time boundaries and half-open hour ranges
//!
//! Reservations are persisted as `"HH:00"` strings; all interval math in the
//! domain happens on these types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A whole-hour boundary within a day (0..=24; 24 is only valid as a range end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// Create an hour boundary, rejecting values past midnight
    pub fn new(hour: u8) -> Result<Self, DomainError> {
        if hour > 24 {
            return Err(DomainError::InvalidInterval(format!(
                "hour {hour} out of range (0..=24)"
            )));
        }
        Ok(Self(hour))
    }

    /// Parse an `"HH:00"` string, rejecting anything off a whole-hour boundary
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidInterval(format!("malformed hour: {s:?}")))?;
        if mm != "00" {
            return Err(DomainError::InvalidInterval(format!(
                "{s:?} is not on a whole-hour boundary"
            )));
        }
        let hour: u8 = hh
            .parse()
            .map_err(|_| DomainError::InvalidInterval(format!("malformed hour: {s:?}")))?;
        Self::new(hour)
    }

    /// Get the numeric hour
    #[inline]
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl TryFrom<String> for HourOfDay {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HourOfDay> for String {
    fn from(h: HourOfDay) -> Self {
        h.to_string()
    }
}

/// A half-open hour interval `[inicio, fin)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourRange {
    pub inicio: HourOfDay,
    pub fin: HourOfDay,
}

impl HourRange {
    /// Create a range, requiring `inicio < fin`
    pub fn new(inicio: HourOfDay, fin: HourOfDay) -> Result<Self, DomainError> {
        if inicio >= fin {
            return Err(DomainError::InvalidInterval(format!(
                "empty interval [{inicio}, {fin})"
            )));
        }
        Ok(Self { inicio, fin })
    }

    /// Parse a range from `"HH:00"` bounds
    pub fn parse(inicio: &str, fin: &str) -> Result<Self, DomainError> {
        Self::new(HourOfDay::parse(inicio)?, HourOfDay::parse(fin)?)
    }

    /// Half-open overlap: `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && s2 < e1`
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &HourRange) -> bool {
        self.inicio < other.fin && other.inicio < self.fin
    }

    /// Whether this range fully contains another
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &HourRange) -> bool {
        self.inicio <= other.inicio && other.fin <= self.fin
    }

    /// Duration in whole hours
    #[inline]
    #[must_use]
    pub fn hours(&self) -> u8 {
        self.fin.get() - self.inicio.get()
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.inicio, self.fin)
    }
}
