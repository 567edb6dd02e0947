//! Aggregate occupancy statistics for a lot.

use indexmap::IndexMap;
use parkgrid_core::{LotView, SpaceType};

/// Point-in-time counts for a lot.
///
/// `occupied + reserved + available == total_spaces` always holds, since a
/// space is in exactly one of those states.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LotStats {
    /// Number of spaces in the lot.
    pub total_spaces: usize,
    /// Spaces with a vehicle parked.
    pub occupied: usize,
    /// Spaces held by a reservation.
    pub reserved: usize,
    /// Spaces neither occupied nor reserved.
    pub available: usize,
    /// `occupied / total_spaces * 100`, or 0 for an empty view.
    pub occupancy_rate: f64,
    /// Space count per type, in [`SpaceType::ALL`] order, omitting absent types.
    pub by_type: IndexMap<SpaceType, usize>,
}

impl LotStats {
    /// Count the spaces of `view`.
    pub fn collect(view: &dyn LotView) -> Self {
        let mut stats = Self {
            by_type: SpaceType::ALL.iter().map(|t| (*t, 0)).collect(),
            ..Self::default()
        };
        for space in view.spaces() {
            stats.total_spaces += 1;
            if space.is_occupied() {
                stats.occupied += 1;
            } else if space.is_reserved() {
                stats.reserved += 1;
            } else {
                stats.available += 1;
            }
            *stats.by_type.entry(space.space_type()).or_default() += 1;
        }
        stats.occupancy_rate = percent(stats.occupied, stats.total_spaces);
        stats.by_type.retain(|_, n| *n > 0);
        stats
    }
}

/// `part / whole * 100`, with an empty whole counting as 0%.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Occupied-space count for every row, index = row. Empty rows count 0.
pub fn occupied_by_row(view: &dyn LotView) -> Vec<usize> {
    let mut rows = vec![0usize; view.rows() as usize];
    for space in view.spaces().iter().filter(|s| s.is_occupied()) {
        if let Some(n) = rows.get_mut(space.row() as usize) {
            *n += 1;
        }
    }
    rows
}

/// `(occupied, total)` for spaces of one type.
pub fn type_utilisation(view: &dyn LotView, space_type: SpaceType) -> (usize, usize) {
    view.spaces()
        .iter()
        .filter(|s| s.space_type() == space_type)
        .fold((0, 0), |(occ, total), s| {
            (occ + usize::from(s.is_occupied()), total + 1)
        })
}
