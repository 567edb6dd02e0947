//! Parking space records: type, occupancy and reservation state.

use crate::id::SpaceId;
use chrono::{DateTime, Utc};
use std::fmt;

/// The kind of vehicle a space is designated for.
///
/// Fixed when the space is created and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpaceType {
    /// General-purpose space.
    Regular,
    /// Accessible space reserved for disabled drivers.
    Disabled,
    /// Space with an electric vehicle charger.
    Electric,
    /// Undersized space for compact cars.
    Compact,
}

impl SpaceType {
    /// Every space type, in reporting order.
    pub const ALL: [SpaceType; 4] = [
        SpaceType::Regular,
        SpaceType::Disabled,
        SpaceType::Electric,
        SpaceType::Compact,
    ];

    /// Lower-case name, as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Disabled => "disabled",
            Self::Electric => "electric",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active reservation on a space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    holder: String,
    reserved_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Create a reservation for `holder` stamped at `reserved_at`.
    pub fn new(
        holder: impl Into<String>,
        reserved_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            holder: holder.into(),
            reserved_at,
            expires_at,
        }
    }

    /// Who the space is held for.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// When the reservation was created.
    pub fn reserved_at(&self) -> DateTime<Utc> {
        self.reserved_at
    }

    /// When the reservation lapses, if it was made for a fixed duration.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// `true` if the reservation has a deadline at or before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// Occupancy state of a space.
///
/// A space is in exactly one of these states, which makes "occupied and
/// reserved at the same time" unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Occupancy {
    /// Free and unheld.
    #[default]
    Available,
    /// Held for someone but not yet occupied.
    Reserved(Reservation),
    /// A vehicle is parked here.
    Occupied,
}

/// One cell of the parking grid.
///
/// Spaces are created once, when their lot is built, and only the lot's
/// transition operations can change their [`Occupancy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Space {
    id: SpaceId,
    space_type: SpaceType,
    occupancy: Occupancy,
}

impl Space {
    /// Create a space at `id` that is either occupied or available.
    pub fn new(id: SpaceId, space_type: SpaceType, occupied: bool) -> Self {
        let occupancy = if occupied {
            Occupancy::Occupied
        } else {
            Occupancy::Available
        };
        Self::with_occupancy(id, space_type, occupancy)
    }

    /// Create a space in any occupancy state.
    ///
    /// A space has no setters: a lot changes state by replacing the whole
    /// record, and only hands out shared references, so spaces inside a
    /// lot cannot be edited from outside it.
    pub fn with_occupancy(id: SpaceId, space_type: SpaceType, occupancy: Occupancy) -> Self {
        Self {
            id,
            space_type,
            occupancy,
        }
    }

    /// The space's id.
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Grid row.
    pub fn row(&self) -> u32 {
        self.id.row()
    }

    /// Grid column.
    pub fn col(&self) -> u32 {
        self.id.col()
    }

    /// Designated vehicle type.
    pub fn space_type(&self) -> SpaceType {
        self.space_type
    }

    /// Current occupancy state.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// `true` if a vehicle is parked here.
    pub fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied)
    }

    /// `true` if the space is held by a reservation.
    pub fn is_reserved(&self) -> bool {
        matches!(self.occupancy, Occupancy::Reserved(_))
    }

    /// `true` if neither occupied nor reserved.
    pub fn is_available(&self) -> bool {
        matches!(self.occupancy, Occupancy::Available)
    }

    /// The active reservation, if any.
    pub fn reservation(&self) -> Option<&Reservation> {
        match &self.occupancy {
            Occupancy::Reserved(r) => Some(r),
            _ => None,
        }
    }

    /// Holder of the active reservation. `Some` iff [`is_reserved`](Self::is_reserved).
    pub fn reserved_by(&self) -> Option<&str> {
        self.reservation().map(Reservation::holder)
    }

    /// When the active reservation was made.
    pub fn reservation_time(&self) -> Option<DateTime<Utc>> {
        self.reservation().map(Reservation::reserved_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn new_space_state_follows_occupied_flag() {
        let free = Space::new(SpaceId::new(0, 1), SpaceType::Compact, false);
        assert!(free.is_available());
        assert_eq!(free.row(), 0);
        assert_eq!(free.col(), 1);

        let taken = Space::new(SpaceId::new(1, 1), SpaceType::Regular, true);
        assert!(taken.is_occupied());
        assert!(!taken.is_reserved());
        assert_eq!(taken.reserved_by(), None);
    }

    #[test]
    fn reservation_fields_present_only_when_reserved() {
        let s = Space::new(SpaceId::new(0, 0), SpaceType::Electric, false);
        assert_eq!(s.reservation_time(), None);

        let s = Space::with_occupancy(
            s.id(),
            s.space_type(),
            Occupancy::Reserved(Reservation::new("ada", at(10), None)),
        );
        assert!(s.is_reserved());
        assert!(!s.is_occupied());
        assert_eq!(s.reserved_by(), Some("ada"));
        assert_eq!(s.reservation_time(), Some(at(10)));
    }

    #[test]
    fn expiry_is_inclusive() {
        let r = Reservation::new("bo", at(0), Some(at(60)));
        assert!(!r.is_expired(at(59)));
        assert!(r.is_expired(at(60)));
        assert!(!Reservation::new("bo", at(0), None).is_expired(at(1_000_000)));
    }

    #[test]
    fn space_type_names() {
        let names: Vec<_> = SpaceType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["regular", "disabled", "electric", "compact"]);
    }
}
