//! The parking manager: one lot plus the operations callers use on it.

use chrono::{DateTime, Duration, Utc};
use parkgrid_advisor::{analyze, analyze_messages, LotStats, Recommendation};
use parkgrid_core::{Space, SpaceId, TransitionError};
use parkgrid_grid::Lot;
use parkgrid_search::{find_nearest, NearestSpace, SpaceFilter};

use crate::config::{ConfigError, LotConfig};
use crate::generate::generate_lot;
use crate::metrics::{ManagerMetrics, MetricsRecorder};

/// Explicit context for a single lot.
///
/// Owns the [`Lot`] and is the surface a UI or API layer talks to. Space
/// ids arrive as text (`"{row}-{col}"`); ids that do not parse or do not
/// name a space are ordinary refusals, reported as `false` / `None`.
///
/// Mutating operations take `&mut self`, queries take `&self`, so a
/// manager shared across threads needs an outer lock only for writes
/// to be serialised against reads, which the borrow rules already demand.
///
/// # Examples
///
/// ```
/// use parkgrid_engine::ParkingManager;
/// use parkgrid_grid::Lot;
/// use parkgrid_search::SpaceFilter;
///
/// let mut pm = ParkingManager::new(Lot::uniform(3, 3).unwrap());
/// assert!(pm.set_occupied("1-1", true));
/// assert!(pm.reserve("0-1", "ada"));
///
/// // 1-1 is occupied and 0-1 reserved; next in line from the centre is 2-1.
/// let hit = pm.find_nearest(1, 1, &SpaceFilter::any()).unwrap();
/// assert_eq!(hit.id().to_string(), "2-1");
///
/// let stats = pm.snapshot();
/// assert_eq!((stats.occupied, stats.reserved, stats.available), (1, 1, 7));
/// ```
#[derive(Debug)]
pub struct ParkingManager {
    lot: Lot,
    metrics: MetricsRecorder,
}

impl ParkingManager {
    /// Manage an existing lot.
    pub fn new(lot: Lot) -> Self {
        Self {
            lot,
            metrics: MetricsRecorder::default(),
        }
    }

    /// Generate a lot from `config` and manage it.
    pub fn from_config(config: &LotConfig) -> Result<Self, ConfigError> {
        generate_lot(config).map(Self::new)
    }

    /// Read-only access to the lot.
    pub fn lot(&self) -> &Lot {
        &self.lot
    }

    /// Give back the lot, dropping the manager.
    pub fn into_lot(self) -> Lot {
        self.lot
    }

    /// Look up a space by text id.
    pub fn space(&self, id: &str) -> Option<&Space> {
        self.lot.get_str(id)
    }

    fn parse(id: &str) -> Result<SpaceId, TransitionError> {
        id.parse().map_err(|e| {
            tracing::debug!(error = %e, "malformed space id");
            TransitionError::MalformedId
        })
    }

    // ── Transitions ─────────────────────────────────────────────

    /// Reserve an available space for `holder`.
    pub fn reserve(&mut self, id: &str, holder: &str) -> bool {
        self.try_reserve(id, holder).is_ok()
    }

    /// Like [`reserve`](Self::reserve), reporting why a refusal happened.
    pub fn try_reserve(&mut self, id: &str, holder: &str) -> Result<(), TransitionError> {
        self.reserve_inner(id, holder, Utc::now(), None)
    }

    /// Reserve a space for a fixed `duration`, after which
    /// [`release_expired`](Self::release_expired) may release it.
    pub fn reserve_for(&mut self, id: &str, holder: &str, duration: Duration) -> bool {
        let now = Utc::now();
        self.reserve_inner(id, holder, now, now.checked_add_signed(duration))
            .is_ok()
    }

    fn reserve_inner(
        &mut self,
        id: &str,
        holder: &str,
        at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), TransitionError> {
        let result = Self::parse(id)
            .and_then(|id| self.lot.try_reserve_at(id, holder, at, expires_at));
        self.metrics.record_reservation(result.is_ok());
        result
    }

    /// End the reservation on a space.
    pub fn release(&mut self, id: &str) -> bool {
        self.try_release(id).is_ok()
    }

    /// Like [`release`](Self::release), reporting why a refusal happened.
    pub fn try_release(&mut self, id: &str) -> Result<(), TransitionError> {
        let result = Self::parse(id).and_then(|id| self.lot.try_release(id));
        self.metrics.record_release(result.is_ok());
        result
    }

    /// Mark a space occupied or vacated. Fails only for unknown ids.
    pub fn set_occupied(&mut self, id: &str, occupied: bool) -> bool {
        let result = Self::parse(id).and_then(|id| self.lot.try_set_occupied(id, occupied));
        self.metrics.record_occupancy(result.is_ok());
        result.is_ok()
    }

    /// Release every reservation whose deadline has passed at `now`.
    pub fn release_expired(&mut self, now: DateTime<Utc>) -> Vec<SpaceId> {
        let released = self.lot.release_expired(now);
        self.metrics.record_expired(released.len());
        released
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Nearest space to `(row, col)` matching `filter`.
    pub fn find_nearest(&self, row: i32, col: i32, filter: &SpaceFilter) -> Option<&Space> {
        self.find_nearest_with_distance(row, col, filter)
            .map(|n| n.space)
    }

    /// Like [`find_nearest`](Self::find_nearest), also returning the distance.
    pub fn find_nearest_with_distance(
        &self,
        row: i32,
        col: i32,
        filter: &SpaceFilter,
    ) -> Option<NearestSpace<'_>> {
        let hit = find_nearest(&self.lot, row, col, filter);
        self.metrics.record_search(hit.is_some());
        hit
    }

    /// Find the nearest matching space and reserve it for `holder` in one step.
    ///
    /// Returns the reserved id, or `None` if no available space matched.
    pub fn reserve_nearest(
        &mut self,
        row: i32,
        col: i32,
        filter: &SpaceFilter,
        holder: &str,
    ) -> Option<SpaceId> {
        let id = self.find_nearest(row, col, filter)?.id();
        let result = self.lot.try_reserve(id, holder);
        self.metrics.record_reservation(result.is_ok());
        result.ok().map(|()| id)
    }

    /// Recommendations for the current lot state.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        analyze(&self.lot)
    }

    /// Recommendations rendered as messages.
    pub fn analyze(&self) -> Vec<String> {
        analyze_messages(&self.lot)
    }

    /// Counts by state and type.
    pub fn snapshot(&self) -> LotStats {
        LotStats::collect(&self.lot)
    }

    /// Operation counters since construction.
    pub fn metrics(&self) -> ManagerMetrics {
        self.metrics.snapshot()
    }
}
