//! Per-slot booking locks
//!
//! Serializes booking attempts per `(box_id, fecha)` so that concurrent
//! requests for the same box and day run their check-then-insert sequence one
//! at a time. Requests for different boxes or days proceed in parallel.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::warn;

use agenda_core::error::DomainError;
use agenda_core::value_objects::SlotKey;

/// Registry of per-(box, fecha) mutexes
///
/// Entries are created lazily on first acquisition. Waiting is bounded: a
/// request that cannot take the lock within the configured timeout fails with
/// `ConcurrencyTimeout` rather than queueing indefinitely.
pub struct SlotLockRegistry {
    locks: DashMap<SlotKey, Arc<Mutex<()>>>,
    timeout: Duration,
}

impl SlotLockRegistry {
    /// Create a registry with the given bounded wait
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            locks: DashMap::new(),
            timeout,
        }
    }

    /// Create a shared registry
    #[must_use]
    pub fn new_shared(timeout: Duration) -> Arc<Self> {
        Arc::new(Self::new(timeout))
    }

    /// Acquire the lock for a slot key, waiting at most the configured timeout
    ///
    /// The returned guard holds the lock until dropped. The map entry guard is
    /// released before awaiting so other keys never block behind this one.
    pub async fn acquire(&self, key: SlotKey) -> Result<OwnedMutexGuard<()>, DomainError> {
        let lock = self
            .locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();

        match tokio::time::timeout(self.timeout, lock.lock_owned()).await {
            Ok(guard) => Ok(guard),
            Err(_) => {
                warn!(
                    box_id = %key.box_id,
                    fecha = %key.fecha,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "booking lock wait timed out"
                );
                Err(DomainError::ConcurrencyTimeout)
            }
        }
    }

    /// Drop lock entries for past dates that are no longer contended
    pub fn evict_before(&self, fecha: chrono::NaiveDate) {
        self.locks
            .retain(|key, lock| key.fecha >= fecha || Arc::strong_count(lock) > 1);
    }

    /// Number of tracked slot keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether the registry has no tracked keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl std::fmt::Debug for SlotLockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotLockRegistry")
            .field("keys", &self.locks.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}
