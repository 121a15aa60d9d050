//! Soft-delete status
//!
//! Entities are never hard-deleted; a deleted row keeps its history but is
//! logically absent from all future availability computations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Explicit soft-delete state, replacing scattered nullable `deleted_at` checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SoftDelete {
    #[default]
    Active,
    Deleted(DateTime<Utc>),
}

impl SoftDelete {
    /// Whether the entity is still live
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// The deletion timestamp, if any
    #[must_use]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::Deleted(at) => Some(*at),
        }
    }
}

impl From<Option<DateTime<Utc>>> for SoftDelete {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            None => Self::Active,
            Some(at) => Self::Deleted(at),
        }
    }
}

impl From<SoftDelete> for Option<DateTime<Utc>> {
    fn from(status: SoftDelete) -> Self {
        status.deleted_at()
    }
}
