//! Reservation entity - a booking of a box for one hour interval on one day

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::{HourRange, Slot};

/// Reservation lifecycle status (`estado`)
///
/// Persisted as a PostgreSQL enum with the Spanish labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pendiente,
    /// Default for newly created reservations per the latest schema migration
    #[default]
    Confirmada,
    Cancelada,
    Completada,
}

impl ReservationStatus {
    /// Whether a reservation in this status holds its time slot
    ///
    /// Cancelled reservations release their interval immediately.
    #[inline]
    #[must_use]
    pub fn holds_slot(self) -> bool {
        matches!(self, Self::Pendiente | Self::Confirmada | Self::Completada)
    }

    /// Whether this status admits no further transitions
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelada | Self::Completada)
    }

    /// Forward-only transition table:
    /// `pendiente -> confirmada -> completada`, `pendiente|confirmada -> cancelada`
    #[must_use]
    pub fn can_transition_to(self, target: ReservationStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pendiente, Self::Confirmada)
                | (Self::Confirmada, Self::Completada)
                | (Self::Pendiente | Self::Confirmada, Self::Cancelada)
        )
    }

    /// Persisted label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Confirmada => "confirmada",
            Self::Cancelada => "cancelada",
            Self::Completada => "completada",
        }
    }

    /// Parse a persisted label
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pendiente" => Ok(Self::Pendiente),
            "confirmada" => Ok(Self::Confirmada),
            "cancelada" => Ok(Self::Cancelada),
            "completada" => Ok(Self::Completada),
            other => Err(DomainError::Validation(format!(
                "unknown reservation status: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment lifecycle status (`estadoPago`), independent of `estado`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    PendientePago,
    Pagado,
}

impl PaymentStatus {
    /// Forward-only: `pendiente_pago -> pagado`, no automatic reversal
    #[must_use]
    pub fn can_transition_to(self, target: PaymentStatus) -> bool {
        matches!((self, target), (Self::PendientePago, Self::Pagado))
    }

    /// Persisted label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendientePago => "pendiente_pago",
            Self::Pagado => "pagado",
        }
    }

    /// Parse a persisted label
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pendiente_pago" => Ok(Self::PendientePago),
            "pagado" => Ok(Self::Pagado),
            other => Err(DomainError::Validation(format!(
                "unknown payment status: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: Uuid,
    pub box_id: Uuid,
    pub psicologo_id: Uuid,
    pub fecha: NaiveDate,
    pub horario: HourRange,
    pub estado: ReservationStatus,
    pub estado_pago: PaymentStatus,
    /// Price in CLP
    pub precio: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a reservation from an accepted slot
    #[must_use]
    pub fn from_slot(
        id: Uuid,
        slot: Slot,
        psicologo_id: Uuid,
        estado: ReservationStatus,
        precio: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            box_id: slot.box_id,
            psicologo_id,
            fecha: slot.fecha,
            horario: slot.horario,
            estado,
            estado_pago: PaymentStatus::default(),
            precio,
            created_at: now,
            updated_at: now,
        }
    }

    /// View this reservation as a slot for interval math
    #[must_use]
    pub fn slot(&self) -> Slot {
        Slot {
            box_id: self.box_id,
            fecha: self.fecha,
            horario: self.horario,
        }
    }

    /// Whether this reservation currently holds its time slot
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.estado.holds_slot()
    }

    /// Apply an `estado` transition, rejecting anything off the table
    pub fn transition(&mut self, target: ReservationStatus) -> Result<(), DomainError> {
        if !self.estado.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: self.estado,
                to: target,
            });
        }
        self.estado = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Apply an `estado_pago` transition
    pub fn transition_pago(&mut self, target: PaymentStatus) -> Result<(), DomainError> {
        if !self.estado_pago.can_transition_to(target) {
            return Err(DomainError::InvalidPaymentTransition {
                from: self.estado_pago,
                to: target,
            });
        }
        self.estado_pago = target;
        self.updated_at = Utc::now();
        Ok(())
    }
}
