//! In-memory repository implementations
//!
//! Behaviorally equivalent to the PostgreSQL repositories, including the
//! storage-level backstops (overlap rejection on insert, guarded voucher
//! increment), so service tests exercise the same failure paths.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use agenda_core::entities::{
    AvailabilityRule, Payment, PaymentStatus, Reservation, ReservationStatus, Room, Voucher,
};
use agenda_core::error::DomainError;
use agenda_core::traits::{
    AvailabilityRepository, PaymentRepository, RepoResult, ReservationRepository, RoomRepository,
    VoucherRepository,
};

// ============================================================================
// Rooms
// ============================================================================

#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<Uuid, Room>>,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Room>> {
        Ok(self.rooms.lock().unwrap().get(&id).cloned())
    }

    async fn find_active(&self, sede_id: Option<Uuid>) -> RepoResult<Vec<Room>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .values()
            .filter(|room| room.is_bookable())
            .filter(|room| sede_id.is_none() || room.sede_id == sede_id)
            .cloned()
            .collect())
    }

    async fn create(&self, room: &Room) -> RepoResult<()> {
        self.rooms.lock().unwrap().insert(room.id, room.clone());
        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rooms = self.rooms.lock().unwrap();
        let room = rooms.get_mut(&id).ok_or(DomainError::BoxNotFound(id))?;
        room.soft_delete();
        Ok(())
    }
}

// ============================================================================
// Reservations
// ============================================================================

#[derive(Default)]
pub struct InMemoryReservationRepository {
    rows: Mutex<Vec<Reservation>>,
}

impl InMemoryReservationRepository {
    /// Snapshot of every stored row
    pub fn all(&self) -> Vec<Reservation> {
        self.rows.lock().unwrap().clone()
    }

    /// Insert bypassing the overlap backstop, to stage raced or legacy state
    pub fn insert_raw(&self, reservation: Reservation) {
        self.rows.lock().unwrap().push(reservation);
    }

    /// Panic if any two active reservations overlap (global invariant)
    pub fn assert_no_active_overlaps(&self) {
        let rows = self.rows.lock().unwrap();
        for (i, a) in rows.iter().enumerate() {
            for b in rows.iter().skip(i + 1) {
                assert!(
                    !(a.is_active() && b.is_active() && a.slot().overlaps(&b.slot())),
                    "active reservations {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reservation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_active_for_day(
        &self,
        box_id: Uuid,
        fecha: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.box_id == box_id && r.fecha == fecha && r.is_active())
            .cloned()
            .collect())
    }

    async fn find_by_psicologo(
        &self,
        psicologo_id: Uuid,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.psicologo_id == psicologo_id && r.fecha >= desde && r.fecha <= hasta)
            .cloned()
            .collect())
    }

    async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        // Constraint backstop, as the exclusion constraint behaves in Postgres
        if let Some(conflict) = rows
            .iter()
            .filter(|r| r.is_active())
            .find(|r| r.slot().overlaps(&reservation.slot()))
        {
            return Err(DomainError::SchedulingConflict {
                conflicting_id: conflict.id,
            });
        }
        rows.push(reservation.clone());
        Ok(())
    }

    async fn update_estado(
        &self,
        id: Uuid,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReservationNotFound(id))?;
        // Compare-and-set, as the conditional UPDATE behaves in Postgres
        if row.estado != from {
            return Err(DomainError::InvalidTransition {
                from: row.estado,
                to,
            });
        }
        row.estado = to;
        row.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn update_estado_pago(&self, id: Uuid, estado_pago: PaymentStatus) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReservationNotFound(id))?;
        row.estado_pago = estado_pago;
        row.updated_at = chrono::Utc::now();
        Ok(())
    }
}

// ============================================================================
// Availability
// ============================================================================

#[derive(Default)]
pub struct InMemoryAvailabilityRepository {
    rules: Mutex<HashMap<(Uuid, Weekday), AvailabilityRule>>,
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn find_rule(
        &self,
        psicologo_id: Uuid,
        day: Weekday,
    ) -> RepoResult<Option<AvailabilityRule>> {
        Ok(self
            .rules
            .lock()
            .unwrap()
            .get(&(psicologo_id, day))
            .cloned())
    }

    async fn find_by_psicologo(&self, psicologo_id: Uuid) -> RepoResult<Vec<AvailabilityRule>> {
        Ok(self
            .rules
            .lock()
            .unwrap()
            .values()
            .filter(|rule| rule.psicologo_id == psicologo_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, rule: &AvailabilityRule) -> RepoResult<()> {
        self.rules
            .lock()
            .unwrap()
            .insert((rule.psicologo_id, rule.day), rule.clone());
        Ok(())
    }

    async fn delete_by_psicologo(&self, psicologo_id: Uuid) -> RepoResult<u64> {
        let mut rules = self.rules.lock().unwrap();
        let before = rules.len();
        rules.retain(|(owner, _), _| *owner != psicologo_id);
        Ok((before - rules.len()) as u64)
    }
}

// ============================================================================
// Vouchers
// ============================================================================

#[derive(Default)]
pub struct InMemoryVoucherRepository {
    rows: Mutex<HashMap<Uuid, Voucher>>,
}

impl InMemoryVoucherRepository {
    /// Current use counter for a voucher
    pub fn usos(&self, id: Uuid) -> i32 {
        self.rows.lock().unwrap()[&id].usos_actuales
    }
}

#[async_trait]
impl VoucherRepository for InMemoryVoucherRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Voucher>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, voucher: &Voucher) -> RepoResult<()> {
        self.rows.lock().unwrap().insert(voucher.id, voucher.clone());
        Ok(())
    }

    async fn increment_usos(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(v) if v.status.is_active() && !v.is_exhausted() => {
                v.usos_actuales += 1;
                Ok(())
            }
            Some(_) => Err(DomainError::VoucherExhausted),
            None => Err(DomainError::VoucherNotFound(id)),
        }
    }

    async fn decrement_usos(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(v) => {
                v.usos_actuales = (v.usos_actuales - 1).max(0);
                Ok(())
            }
            None => Err(DomainError::VoucherNotFound(id)),
        }
    }

    async fn find_applicable(
        &self,
        psicologo_id: Uuid,
        today: NaiveDate,
    ) -> RepoResult<Vec<Voucher>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.status.is_active() && !v.is_expired(today) && !v.is_exhausted())
            .filter(|v| v.es_global || v.psicologo_id == Some(psicologo_id))
            .cloned()
            .collect())
    }

    async fn soft_delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let voucher = rows.get_mut(&id).ok_or(DomainError::VoucherNotFound(id))?;
        voucher.status = agenda_core::value_objects::SoftDelete::Deleted(chrono::Utc::now());
        Ok(())
    }
}

// ============================================================================
// Payments
// ============================================================================

#[derive(Default)]
pub struct InMemoryPaymentRepository {
    rows: Mutex<Vec<Payment>>,
}

impl InMemoryPaymentRepository {
    /// Snapshot of every stored row
    pub fn all(&self) -> Vec<Payment> {
        self.rows.lock().unwrap().clone()
    }
}

/// Payment repository whose inserts always fail, for error-path tests
#[derive(Default)]
pub struct FailingPaymentRepository;

#[async_trait]
impl PaymentRepository for FailingPaymentRepository {
    async fn find_by_id(&self, _id: Uuid) -> RepoResult<Option<Payment>> {
        Ok(None)
    }

    async fn create(&self, _payment: &Payment) -> RepoResult<()> {
        Err(DomainError::DatabaseError(
            "insert rejected by test double".to_string(),
        ))
    }

    async fn find_by_voucher(&self, _cupon_id: Uuid) -> RepoResult<Vec<Payment>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Payment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, payment: &Payment) -> RepoResult<()> {
        self.rows.lock().unwrap().push(payment.clone());
        Ok(())
    }

    async fn find_by_voucher(&self, cupon_id: Uuid) -> RepoResult<Vec<Payment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.cupon_id == Some(cupon_id))
            .cloned()
            .collect())
    }
}
