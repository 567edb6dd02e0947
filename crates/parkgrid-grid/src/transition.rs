//! Occupancy and reservation transitions.
//!
//! These are the only operations that change a space after its lot is
//! built:
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | Available | [`reserve`](Lot::reserve) | Reserved |
//! | Reserved | [`release`](Lot::release) | Available |
//! | Available, Reserved | [`set_occupied(true)`](Lot::set_occupied) | Occupied |
//! | Occupied | [`set_occupied(false)`](Lot::set_occupied) | Available |
//!
//! There is no direct Occupied -> Reserved edge. A refused transition leaves
//! the space exactly as it was. Becoming occupied always discards any
//! reservation; becoming available never creates or restores one.

use crate::lot::Lot;
use chrono::{DateTime, Utc};
use parkgrid_core::{LotView, Occupancy, Reservation, Space, SpaceId, TransitionError};

/// The three states a space can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceState {
    /// Neither occupied nor reserved.
    Available,
    /// Held by a reservation.
    Reserved,
    /// A vehicle is parked.
    Occupied,
}

impl From<&Occupancy> for SpaceState {
    fn from(o: &Occupancy) -> Self {
        match o {
            Occupancy::Available => Self::Available,
            Occupancy::Reserved(_) => Self::Reserved,
            Occupancy::Occupied => Self::Occupied,
        }
    }
}

/// Replace a space's record with one in the new occupancy state.
fn put(space: &mut Space, occupancy: Occupancy) {
    *space = Space::with_occupancy(space.id(), space.space_type(), occupancy);
}

impl Lot {
    /// Current state of a space, or `None` if it does not exist.
    pub fn state(&self, id: SpaceId) -> Option<SpaceState> {
        self.get(id).map(|s| SpaceState::from(s.occupancy()))
    }

    /// Reserve an available space for `holder`, stamped with the current time.
    ///
    /// Returns `false` (and changes nothing) if the space is missing,
    /// occupied, or already reserved. Any holder text is accepted, including
    /// an empty one.
    pub fn reserve(&mut self, id: SpaceId, holder: &str) -> bool {
        self.try_reserve(id, holder).is_ok()
    }

    /// Like [`reserve`](Self::reserve), reporting which precondition failed.
    pub fn try_reserve(&mut self, id: SpaceId, holder: &str) -> Result<(), TransitionError> {
        self.try_reserve_at(id, holder, Utc::now(), None)
    }

    /// Reserve with an explicit timestamp and optional expiry deadline.
    pub fn try_reserve_at(
        &mut self,
        id: SpaceId,
        holder: &str,
        at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), TransitionError> {
        let result = self.apply_reserve(id, holder, at, expires_at);
        match &result {
            Ok(()) => tracing::debug!(space = %id, holder, "space reserved"),
            Err(e) => tracing::debug!(space = %id, reason = %e, "reservation refused"),
        }
        result
    }

    fn apply_reserve(
        &mut self,
        id: SpaceId,
        holder: &str,
        at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), TransitionError> {
        let space = self
            .space_mut(id)
            .ok_or(TransitionError::UnknownSpace(id))?;
        match space.occupancy() {
            Occupancy::Occupied => return Err(TransitionError::Occupied(id)),
            Occupancy::Reserved(_) => return Err(TransitionError::AlreadyReserved(id)),
            Occupancy::Available => {}
        }
        put(space, Occupancy::Reserved(Reservation::new(holder, at, expires_at)));
        Ok(())
    }

    /// End the reservation on a space.
    ///
    /// Returns `false` (and changes nothing) if the space is missing or not
    /// currently reserved.
    pub fn release(&mut self, id: SpaceId) -> bool {
        self.try_release(id).is_ok()
    }

    /// Like [`release`](Self::release), reporting which precondition failed.
    pub fn try_release(&mut self, id: SpaceId) -> Result<(), TransitionError> {
        let space = self
            .space_mut(id)
            .ok_or(TransitionError::UnknownSpace(id))?;
        if !space.is_reserved() {
            tracing::debug!(space = %id, "release refused: not reserved");
            return Err(TransitionError::NotReserved(id));
        }
        put(space, Occupancy::Available);
        tracing::debug!(space = %id, "reservation released");
        Ok(())
    }

    /// Mark a space occupied or vacated.
    ///
    /// Occupying a reserved space silently discards the reservation.
    /// Vacating leaves reservation state alone, so calling it on a
    /// reserved or available space is a successful no-op. Fails only if
    /// the space does not exist.
    pub fn set_occupied(&mut self, id: SpaceId, occupied: bool) -> bool {
        self.try_set_occupied(id, occupied).is_ok()
    }

    /// Like [`set_occupied`](Self::set_occupied), as a `Result`.
    pub fn try_set_occupied(&mut self, id: SpaceId, occupied: bool) -> Result<(), TransitionError> {
        let space = self
            .space_mut(id)
            .ok_or(TransitionError::UnknownSpace(id))?;
        if occupied {
            if let Some(holder) = space.reserved_by() {
                tracing::debug!(space = %id, holder, "reservation overridden by arrival");
            }
            put(space, Occupancy::Occupied);
        } else if space.is_occupied() {
            put(space, Occupancy::Available);
        }
        tracing::debug!(space = %id, occupied, "occupancy updated");
        Ok(())
    }

    /// Release every reservation whose deadline is at or before `now`.
    ///
    /// Returns the released ids in row-major order. Reservations made
    /// without a deadline never expire.
    pub fn release_expired(&mut self, now: DateTime<Utc>) -> Vec<SpaceId> {
        let mut released = Vec::new();
        for space in self.spaces_mut() {
            let expired = space.reservation().is_some_and(|r| r.is_expired(now));
            if expired {
                put(space, Occupancy::Available);
                released.push(space.id());
            }
        }
        if !released.is_empty() {
            tracing::info!(count = released.len(), "expired reservations released");
        }
        released
    }

    /// Number of spaces currently in `state`.
    pub fn count_in(&self, state: SpaceState) -> usize {
        self.spaces()
            .iter()
            .filter(|s| SpaceState::from(s.occupancy()) == state)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::SpaceSeed;
    use chrono::TimeZone;
    use parkgrid_core::SpaceType;

    fn id(r: u32, c: u32) -> SpaceId {
        SpaceId::new(r, c)
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    /// 2x2 lot with `1-1` occupied.
    fn small_lot() -> Lot {
        let mut seeds = vec![SpaceSeed::free(SpaceType::Regular); 4];
        seeds[3].occupied = true;
        Lot::new(2, 2, seeds).unwrap()
    }

    #[test]
    fn reserve_then_release_round_trip() {
        let mut lot = small_lot();
        let before = lot.get(id(0, 0)).cloned();
        assert!(lot.reserve(id(0, 0), "x"));
        assert_eq!(lot.state(id(0, 0)), Some(SpaceState::Reserved));
        let s = lot.get(id(0, 0)).unwrap();
        assert_eq!(s.reserved_by(), Some("x"));
        assert!(s.reservation_time().is_some());

        assert!(lot.release(id(0, 0)));
        let s = lot.get(id(0, 0)).unwrap();
        assert_eq!(s.reserved_by(), None);
        assert_eq!(s.reservation_time(), None);
        assert_eq!(lot.get(id(0, 0)).cloned(), before);
    }

    #[test]
    fn reserve_refusals_leave_space_untouched() {
        let mut lot = small_lot();

        let occupied_before = lot.get(id(1, 1)).cloned();
        assert_eq!(
            lot.try_reserve(id(1, 1), "x"),
            Err(TransitionError::Occupied(id(1, 1)))
        );
        assert_eq!(lot.get(id(1, 1)).cloned(), occupied_before);

        lot.try_reserve_at(id(0, 1), "first", at(5), None).unwrap();
        let reserved_before = lot.get(id(0, 1)).cloned();
        assert_eq!(
            lot.try_reserve(id(0, 1), "second"),
            Err(TransitionError::AlreadyReserved(id(0, 1)))
        );
        assert_eq!(lot.get(id(0, 1)).cloned(), reserved_before);
        assert_eq!(lot.get(id(0, 1)).and_then(Space::reserved_by), Some("first"));

        assert_eq!(
            lot.try_reserve(id(5, 5), "x"),
            Err(TransitionError::UnknownSpace(id(5, 5)))
        );
    }

    #[test]
    fn reserve_accepts_any_holder_text() {
        let mut lot = small_lot();
        assert!(lot.reserve(id(0, 0), ""));
        assert_eq!(lot.get(id(0, 0)).and_then(Space::reserved_by), Some(""));
        assert!(lot.reserve(id(0, 1), "   "));
        assert_eq!(lot.state(id(0, 1)), Some(SpaceState::Reserved));

        // An empty holder still blocks a second reservation.
        assert_eq!(
            lot.try_reserve(id(0, 0), "ada"),
            Err(TransitionError::AlreadyReserved(id(0, 0)))
        );
        assert!(lot.release(id(0, 0)));
    }

    #[test]
    fn release_requires_reservation() {
        let mut lot = small_lot();
        assert_eq!(lot.try_release(id(0, 0)), Err(TransitionError::NotReserved(id(0, 0))));
        assert!(!lot.release(id(1, 1)));
        assert!(lot.get(id(1, 1)).unwrap().is_occupied());
        assert!(!lot.release(id(9, 0)));
    }

    #[test]
    fn occupying_clears_reservation() {
        let mut lot = small_lot();
        assert!(lot.reserve(id(0, 0), "x"));
        assert!(lot.set_occupied(id(0, 0), true));
        let s = lot.get(id(0, 0)).unwrap();
        assert!(s.is_occupied());
        assert!(!s.is_reserved());
        assert_eq!(s.reserved_by(), None);
    }

    #[test]
    fn vacating_never_creates_reservation() {
        let mut lot = small_lot();
        assert!(lot.set_occupied(id(1, 1), false));
        assert_eq!(lot.state(id(1, 1)), Some(SpaceState::Available));
        assert_eq!(lot.get(id(1, 1)).unwrap().reserved_by(), None);
    }

    #[test]
    fn vacating_reserved_space_keeps_reservation() {
        let mut lot = small_lot();
        lot.try_reserve_at(id(0, 0), "x", at(1), None).unwrap();
        let before = lot.get(id(0, 0)).cloned();
        assert!(lot.set_occupied(id(0, 0), false));
        assert_eq!(lot.get(id(0, 0)).cloned(), before);
    }

    #[test]
    fn repeated_noops_succeed() {
        let mut lot = small_lot();
        let before: Vec<_> = lot.iter().cloned().collect();
        assert!(lot.set_occupied(id(0, 0), false));
        assert!(lot.set_occupied(id(0, 0), false));
        assert!(lot.set_occupied(id(1, 1), true));
        let after: Vec<_> = lot.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn set_occupied_unknown_space_fails() {
        let mut lot = small_lot();
        assert_eq!(
            lot.try_set_occupied(id(2, 0), true),
            Err(TransitionError::UnknownSpace(id(2, 0)))
        );
    }

    #[test]
    fn occupied_space_must_vacate_before_reserve() {
        let mut lot = small_lot();
        assert!(!lot.reserve(id(1, 1), "x"));
        assert!(lot.set_occupied(id(1, 1), false));
        assert!(lot.reserve(id(1, 1), "x"));
    }

    #[test]
    fn release_expired_only_touches_lapsed_deadlines() {
        let mut lot = small_lot();
        lot.try_reserve_at(id(0, 0), "a", at(0), Some(at(100))).unwrap();
        lot.try_reserve_at(id(0, 1), "b", at(0), Some(at(300))).unwrap();
        lot.try_reserve_at(id(1, 0), "c", at(0), None).unwrap();

        assert!(lot.release_expired(at(99)).is_empty());
        assert_eq!(lot.release_expired(at(100)), vec![id(0, 0)]);
        assert_eq!(lot.count_in(SpaceState::Reserved), 2);
        assert_eq!(lot.release_expired(at(10_000)), vec![id(0, 1)]);
        assert_eq!(lot.state(id(1, 0)), Some(SpaceState::Reserved));
        assert_eq!(lot.state(id(1, 1)), Some(SpaceState::Occupied));
    }

    #[test]
    fn count_in_partitions_the_lot() {
        let mut lot = small_lot();
        lot.reserve(id(0, 0), "x");
        let total = lot.count_in(SpaceState::Available)
            + lot.count_in(SpaceState::Reserved)
            + lot.count_in(SpaceState::Occupied);
        assert_eq!(total, lot.space_count());
        assert_eq!(lot.count_in(SpaceState::Available), 2);
    }
}
