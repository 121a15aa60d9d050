//! Room entity - a bookable physical box
//!
//! "Box" in the product's vocabulary; named `Room` here to avoid shadowing
//! `std::boxed::Box`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::SoftDelete;

/// A bookable room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub sede_id: Option<Uuid>,
    pub fotos: Vec<String>,
    pub status: SoftDelete,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a new active room
    #[must_use]
    pub fn new(id: Uuid, sede_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id,
            sede_id,
            fotos: Vec::new(),
            status: SoftDelete::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach photo URLs
    #[must_use]
    pub fn with_fotos(mut self, fotos: Vec<String>) -> Self {
        self.fotos = fotos;
        self
    }

    /// Whether the room can accept new reservations
    ///
    /// Historical reservations referencing a deleted room remain valid.
    #[inline]
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.status.is_active()
    }

    /// Soft-delete the room; rooms are never hard-deleted
    pub fn soft_delete(&mut self) {
        if self.status.is_active() {
            let now = Utc::now();
            self.status = SoftDelete::Deleted(now);
            self.updated_at = now;
        }
    }
}
