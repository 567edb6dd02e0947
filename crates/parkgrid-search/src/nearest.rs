//! Breadth-first nearest-space search.

use crate::filter::SpaceFilter;
use parkgrid_core::{LotView, Space, SpaceId};
use std::collections::VecDeque;

/// A search hit: the matched space and its graph distance from the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NearestSpace<'a> {
    /// The matching space.
    pub space: &'a Space,
    /// Number of adjacency edges between the start and `space`.
    pub distance: u32,
}

/// Breadth-first walk over a lot's adjacency graph.
///
/// Yields every space reachable from the start exactly once, paired with
/// its edge distance, in non-decreasing distance order. Within a distance
/// level the order is fixed by FIFO discipline and the up, down, left,
/// right neighbour order, so two walks over the same lot from the same
/// start always agree.
///
/// Cells are marked visited when enqueued, not when popped, so no cell is
/// queued twice.
pub struct Frontier<'a> {
    view: &'a dyn LotView,
    visited: Vec<bool>,
    queue: VecDeque<(SpaceId, u32)>,
}

impl<'a> Frontier<'a> {
    /// Start a walk at `(row, col)`.
    ///
    /// A start outside the lot has no space and no neighbours, so the walk
    /// is empty.
    pub fn new(view: &'a dyn LotView, row: i32, col: i32) -> Self {
        let mut frontier = Self {
            view,
            visited: Vec::new(),
            queue: VecDeque::new(),
        };
        if let Some(start) = view.space_at(i64::from(row), i64::from(col)) {
            frontier.visited = vec![false; view.space_count()];
            frontier.mark(start.id());
            frontier.queue.push_back((start.id(), 0));
        }
        frontier
    }

    fn index(&self, id: SpaceId) -> usize {
        id.row() as usize * self.view.cols() as usize + id.col() as usize
    }

    /// Mark `id` visited; returns `false` if it already was.
    fn mark(&mut self, id: SpaceId) -> bool {
        let i = self.index(id);
        !std::mem::replace(&mut self.visited[i], true)
    }
}

impl<'a> Iterator for Frontier<'a> {
    type Item = NearestSpace<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, distance) = self.queue.pop_front()?;
        for nb in self.view.neighbours(id) {
            if self.mark(nb) {
                self.queue.push_back((nb, distance + 1));
            }
        }
        let space = self.view.space(id)?;
        Some(NearestSpace { space, distance })
    }
}

/// Find the space closest to `(row, col)` in graph distance that matches
/// `filter`.
///
/// The start need not be free, or even inside the lot: an out-of-bounds
/// start finds nothing. Among equidistant matches the one reached first by
/// the [`Frontier`] order wins.
///
/// # Examples
///
/// ```
/// use parkgrid_core::{LotView, SpaceId};
/// use parkgrid_grid::Lot;
/// use parkgrid_search::{find_nearest, SpaceFilter};
///
/// let mut lot = Lot::uniform(3, 3).unwrap();
/// lot.set_occupied(SpaceId::new(1, 1), true);
///
/// // Centre is taken; its "up" neighbour is the first one checked.
/// let hit = find_nearest(&lot, 1, 1, &SpaceFilter::any()).unwrap();
/// assert_eq!(hit.space.id(), SpaceId::new(0, 1));
/// assert_eq!(hit.distance, 1);
///
/// assert!(find_nearest(&lot, -1, -1, &SpaceFilter::any()).is_none());
/// ```
pub fn find_nearest<'a>(
    view: &'a dyn LotView,
    row: i32,
    col: i32,
    filter: &SpaceFilter,
) -> Option<NearestSpace<'a>> {
    let hit = Frontier::new(view, row, col).find(|n| filter.matches(n.space));
    match &hit {
        Some(n) => tracing::debug!(space = %n.space.id(), distance = n.distance, "nearest space found"),
        None => tracing::debug!(row, col, ?filter, "no matching space"),
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkgrid_core::{Space, SpaceType};
    use smallvec::SmallVec;

    /// Minimal in-module view so the walk can be tested without the grid crate.
    struct Strip {
        spaces: Vec<Space>,
    }

    impl Strip {
        /// 1 x n strip; `taken` marks occupied columns.
        fn new(taken: &[bool]) -> Self {
            let spaces = taken
                .iter()
                .enumerate()
                .map(|(c, &occ)| Space::new(SpaceId::new(0, c as u32), SpaceType::Regular, occ))
                .collect();
            Self { spaces }
        }
    }

    impl LotView for Strip {
        fn rows(&self) -> u32 {
            1
        }
        fn cols(&self) -> u32 {
            self.spaces.len() as u32
        }
        fn space_at(&self, row: i64, col: i64) -> Option<&Space> {
            if row != 0 || col < 0 {
                return None;
            }
            self.spaces.get(col as usize)
        }
        fn neighbours(&self, id: SpaceId) -> SmallVec<[SpaceId; 4]> {
            let mut out = SmallVec::new();
            if id.row() != 0 || id.col() >= self.cols() {
                return out;
            }
            if id.col() > 0 {
                out.push(SpaceId::new(0, id.col() - 1));
            }
            if id.col() + 1 < self.cols() {
                out.push(SpaceId::new(0, id.col() + 1));
            }
            out
        }
        fn spaces(&self) -> &[Space] {
            &self.spaces
        }
    }

    #[test]
    fn start_space_itself_matches_at_distance_zero() {
        let strip = Strip::new(&[false, false]);
        let hit = find_nearest(&strip, 0, 1, &SpaceFilter::any()).unwrap();
        assert_eq!(hit.space.id(), SpaceId::new(0, 1));
        assert_eq!(hit.distance, 0);
    }

    #[test]
    fn walk_visits_each_cell_once_in_distance_order() {
        let strip = Strip::new(&[false; 5]);
        let walk: Vec<_> = Frontier::new(&strip, 0, 2)
            .map(|n| (n.space.col(), n.distance))
            .collect();
        assert_eq!(walk, vec![(2, 0), (1, 1), (3, 1), (0, 2), (4, 2)]);
    }

    #[test]
    fn skips_taken_cells() {
        let strip = Strip::new(&[true, true, true, false]);
        let hit = find_nearest(&strip, 0, 0, &SpaceFilter::any()).unwrap();
        assert_eq!(hit.space.col(), 3);
        assert_eq!(hit.distance, 3);
    }

    #[test]
    fn full_strip_finds_nothing() {
        let strip = Strip::new(&[true; 4]);
        assert!(find_nearest(&strip, 0, 1, &SpaceFilter::any()).is_none());
    }

    #[test]
    fn out_of_bounds_start_is_empty_walk() {
        let strip = Strip::new(&[false; 3]);
        assert_eq!(Frontier::new(&strip, 0, 3).count(), 0);
        assert_eq!(Frontier::new(&strip, -1, -1).count(), 0);
        assert_eq!(Frontier::new(&strip, 1, 0).count(), 0);
    }
}
