//! The lot: a rectangular grid of spaces with 4-connected adjacency.

use crate::error::GridError;
use parkgrid_core::{LotInstanceId, LotView, Space, SpaceId, SpaceType};
use smallvec::SmallVec;

/// Neighbour offsets in visitation order: up, down, left, right.
const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Initial assignment for one cell: its type and whether it starts occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceSeed {
    /// Designated vehicle type.
    pub space_type: SpaceType,
    /// Whether a vehicle is parked here at construction.
    pub occupied: bool,
}

impl SpaceSeed {
    /// An available space of the given type.
    pub fn free(space_type: SpaceType) -> Self {
        Self {
            space_type,
            occupied: false,
        }
    }

    /// An occupied space of the given type.
    pub fn occupied(space_type: SpaceType) -> Self {
        Self {
            space_type,
            occupied: true,
        }
    }
}

/// A fixed-size parking lot.
///
/// Spaces live in a flat arena indexed by `row * cols + col`. Adjacency is
/// not stored: the four neighbours of a cell are computed from the
/// dimensions on demand, in the order up, down, left, right, with
/// out-of-bounds neighbours omitted (corners have 2, edges have 3).
///
/// The set of spaces is fixed at construction. Occupancy changes only
/// through the transition methods in [`crate::transition`].
///
/// # Examples
///
/// ```
/// use parkgrid_core::{LotView, SpaceId};
/// use parkgrid_grid::Lot;
///
/// let lot = Lot::uniform(3, 4).unwrap();
/// assert_eq!(lot.space_count(), 12);
///
/// // Corner cell: only down and right exist.
/// let n = lot.neighbours(SpaceId::new(0, 0));
/// assert_eq!(n.as_slice(), &[SpaceId::new(1, 0), SpaceId::new(0, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Lot {
    rows: u32,
    cols: u32,
    name: String,
    instance_id: LotInstanceId,
    spaces: Vec<Space>,
}

impl Lot {
    /// Maximum dimension size: search coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum number of spaces in one lot (4096 x 4096).
    pub const MAX_SPACES: usize = 1 << 24;

    /// Name given to lots that are not explicitly named.
    pub const DEFAULT_NAME: &'static str = "Main Parking Lot";

    /// Build a lot from one seed per cell, in row-major order.
    ///
    /// Fails with the errors of [`Self::check_dimensions`], and with
    /// `Err(GridError::SeedCountMismatch)` unless exactly `rows * cols`
    /// seeds are supplied.
    pub fn new(rows: u32, cols: u32, seeds: Vec<SpaceSeed>) -> Result<Self, GridError> {
        let expected = Self::check_dimensions(rows, cols)?;
        if seeds.len() != expected {
            return Err(GridError::SeedCountMismatch {
                expected,
                actual: seeds.len(),
            });
        }

        let mut spaces = Vec::with_capacity(expected);
        let mut seeds = seeds.into_iter();
        for row in 0..rows {
            for col in 0..cols {
                // Length checked above.
                let Some(seed) = seeds.next() else {
                    break;
                };
                spaces.push(Space::new(
                    SpaceId::new(row, col),
                    seed.space_type,
                    seed.occupied,
                ));
            }
        }

        let lot = Self {
            rows,
            cols,
            name: Self::DEFAULT_NAME.to_owned(),
            instance_id: LotInstanceId::next(),
            spaces,
        };
        tracing::info!(
            lot = %lot.instance_id,
            rows,
            cols,
            occupied = lot.spaces.iter().filter(|s| s.is_occupied()).count(),
            "lot constructed"
        );
        Ok(lot)
    }

    /// A lot where every space is regular and available.
    pub fn uniform(rows: u32, cols: u32) -> Result<Self, GridError> {
        let n = Self::check_dimensions(rows, cols)?;
        Self::new(rows, cols, vec![SpaceSeed::free(SpaceType::Regular); n])
    }

    /// Rename the lot.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check that `rows x cols` can form a lot, returning the space count.
    ///
    /// Returns `Err(GridError::EmptyLot)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`],
    /// and `Err(GridError::TooManySpaces)` if the product exceeds
    /// [`Self::MAX_SPACES`]. Nothing is allocated before this passes.
    pub fn check_dimensions(rows: u32, cols: u32) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyLot);
        }
        for (name, value) in [("rows", rows), ("cols", cols)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        (rows as usize)
            .checked_mul(cols as usize)
            .filter(|&n| n <= Self::MAX_SPACES)
            .ok_or(GridError::TooManySpaces {
                rows,
                cols,
                max: Self::MAX_SPACES,
            })
    }

    /// Human-readable lot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Process-unique identity of this lot.
    pub fn instance_id(&self) -> LotInstanceId {
        self.instance_id
    }

    /// Arena index for a signed coordinate, or `None` if out of bounds.
    pub fn index_of(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= i64::from(self.rows) || col >= i64::from(self.cols) {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Look up a space by id.
    pub fn get(&self, id: SpaceId) -> Option<&Space> {
        self.space(id)
    }

    /// Look up a space by its text id. Malformed text is simply not found.
    pub fn get_str(&self, id: &str) -> Option<&Space> {
        id.parse::<SpaceId>().ok().and_then(|id| self.get(id))
    }

    /// Iterate over spaces row-major.
    pub fn iter(&self) -> std::slice::Iter<'_, Space> {
        self.spaces.iter()
    }

    pub(crate) fn space_mut(&mut self, id: SpaceId) -> Option<&mut Space> {
        let idx = self.index_of(i64::from(id.row()), i64::from(id.col()))?;
        self.spaces.get_mut(idx)
    }

    pub(crate) fn spaces_mut(&mut self) -> std::slice::IterMut<'_, Space> {
        self.spaces.iter_mut()
    }
}

impl LotView for Lot {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn space_at(&self, row: i64, col: i64) -> Option<&Space> {
        self.index_of(row, col).map(|i| &self.spaces[i])
    }

    fn neighbours(&self, id: SpaceId) -> SmallVec<[SpaceId; 4]> {
        let (r, c) = (i64::from(id.row()), i64::from(id.col()));
        if self.index_of(r, c).is_none() {
            return SmallVec::new();
        }
        OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                self.index_of(r + dr, c + dc)
                    .map(|_| SpaceId::new((r + dr) as u32, (c + dc) as u32))
            })
            .collect()
    }

    fn spaces(&self) -> &[Space] {
        &self.spaces
    }
}

impl<'a> IntoIterator for &'a Lot {
    type Item = &'a Space;
    type IntoIter = std::slice::Iter<'a, Space>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
