//! Cumulative operation counters for a parking manager.
//!
//! Every [`ParkingManager`](crate::ParkingManager) operation bumps a
//! counter in its [`MetricsRecorder`]. [`ManagerMetrics`] is the plain
//! snapshot handed out by
//! [`ParkingManager::metrics`](crate::ParkingManager::metrics).

use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counts since the manager was created.
///
/// Refused operations are counted separately from granted ones, so the
/// refusal rate of each operation can be derived from its pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagerMetrics {
    /// Reservations that were granted.
    pub reservations_granted: u64,
    /// Reservations that were refused.
    pub reservations_refused: u64,
    /// Releases that ended a reservation.
    pub releases_granted: u64,
    /// Releases that were refused.
    pub releases_refused: u64,
    /// Successful occupancy updates (arrivals and departures).
    pub occupancy_updates: u64,
    /// Occupancy updates naming an unknown space.
    pub occupancy_refused: u64,
    /// Nearest-space searches run.
    pub searches: u64,
    /// Searches that found nothing.
    pub search_misses: u64,
    /// Reservations released by expiry sweeps.
    pub reservations_expired: u64,
}

/// Live counters behind [`ManagerMetrics`].
///
/// Atomic so that searches, which only borrow the manager shared, can
/// count themselves alongside the mutating operations.
#[derive(Debug, Default)]
pub(crate) struct MetricsRecorder {
    reservations_granted: AtomicU64,
    reservations_refused: AtomicU64,
    releases_granted: AtomicU64,
    releases_refused: AtomicU64,
    occupancy_updates: AtomicU64,
    occupancy_refused: AtomicU64,
    searches: AtomicU64,
    search_misses: AtomicU64,
    reservations_expired: AtomicU64,
}

fn bump(counter: &AtomicU64, n: u64) {
    counter.fetch_add(n, Ordering::Relaxed);
}

fn split(granted: bool, yes: &AtomicU64, no: &AtomicU64) {
    bump(if granted { yes } else { no }, 1);
}

impl MetricsRecorder {
    /// Count a reservation attempt.
    pub(crate) fn record_reservation(&self, granted: bool) {
        split(granted, &self.reservations_granted, &self.reservations_refused);
    }

    /// Count a release attempt.
    pub(crate) fn record_release(&self, granted: bool) {
        split(granted, &self.releases_granted, &self.releases_refused);
    }

    /// Count an occupancy update.
    pub(crate) fn record_occupancy(&self, granted: bool) {
        split(granted, &self.occupancy_updates, &self.occupancy_refused);
    }

    /// Count a search and whether it found anything.
    pub(crate) fn record_search(&self, found: bool) {
        bump(&self.searches, 1);
        if !found {
            bump(&self.search_misses, 1);
        }
    }

    /// Count reservations released by an expiry sweep.
    pub(crate) fn record_expired(&self, n: usize) {
        bump(&self.reservations_expired, n as u64);
    }

    /// Current values.
    pub(crate) fn snapshot(&self) -> ManagerMetrics {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        ManagerMetrics {
            reservations_granted: load(&self.reservations_granted),
            reservations_refused: load(&self.reservations_refused),
            releases_granted: load(&self.releases_granted),
            releases_refused: load(&self.releases_refused),
            occupancy_updates: load(&self.occupancy_updates),
            occupancy_refused: load(&self.occupancy_refused),
            searches: load(&self.searches),
            search_misses: load(&self.search_misses),
            reservations_expired: load(&self.reservations_expired),
        }
    }
}
