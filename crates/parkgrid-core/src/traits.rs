//! Read-only access to a lot.

use crate::id::SpaceId;
use crate::space::Space;
use smallvec::SmallVec;

/// Read-only view of a parking lot.
///
/// Search and analysis read through `&dyn LotView` rather than the
/// concrete lot type, so they cannot mutate spaces and can run against any
/// rectangular store that upholds the contract below.
///
/// # Contract
///
/// - `space_at(row, col)` is `Some` exactly for `0 <= row < rows()` and
///   `0 <= col < cols()`, and the returned space has that row and column.
/// - `neighbours(id)` lists in-bounds ids in the fixed order
///   up, down, left, right, and is empty for ids outside the lot.
/// - `spaces()` yields every space once, row-major.
pub trait LotView {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// Look up a space by signed coordinate. Out-of-range is `None`.
    fn space_at(&self, row: i64, col: i64) -> Option<&Space>;

    /// Adjacent in-bounds ids in up, down, left, right order.
    fn neighbours(&self, id: SpaceId) -> SmallVec<[SpaceId; 4]>;

    /// All spaces, row-major.
    fn spaces(&self) -> &[Space];

    /// Total number of spaces.
    fn space_count(&self) -> usize {
        self.spaces().len()
    }

    /// Look up a space by id.
    fn space(&self, id: SpaceId) -> Option<&Space> {
        self.space_at(i64::from(id.row()), i64::from(id.col()))
    }
}
