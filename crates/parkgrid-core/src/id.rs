//! Strongly-typed identifiers for spaces and lots.

use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a single parking space by its grid coordinate.
///
/// The canonical text form is `"{row}-{col}"`, so `SpaceId::new(2, 3)`
/// displays as `2-3` and parses back from the same string. Because the
/// identifier *is* the coordinate pair, an id can never disagree with the
/// row and column of the space that carries it.
///
/// Ordering is row-major: `(row, col)` compared lexicographically.
///
/// # Examples
///
/// ```
/// use parkgrid_core::SpaceId;
///
/// let id: SpaceId = "2-3".parse().unwrap();
/// assert_eq!(id, SpaceId::new(2, 3));
/// assert_eq!(id.to_string(), "2-3");
/// assert!("2-".parse::<SpaceId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceId {
    row: u32,
    col: u32,
}

impl SpaceId {
    /// Build an id from a row and column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row of the space.
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Column of the space.
    pub const fn col(&self) -> u32 {
        self.col
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl From<(u32, u32)> for SpaceId {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when text is not a well-formed `"{row}-{col}"` id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceIdParseError {
    input: String,
}

impl SpaceIdParseError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for SpaceIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed space id {:?}: expected \"<row>-<col>\"", self.input)
    }
}

impl Error for SpaceIdParseError {}

impl FromStr for SpaceId {
    type Err = SpaceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SpaceIdParseError {
            input: s.to_owned(),
        };
        let (row, col) = s.split_once('-').ok_or_else(err)?;
        // `u32::from_str` accepts a leading '+', which is not canonical.
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(row) || !digits(col) {
            return Err(err());
        }
        let row = row.parse::<u32>().map_err(|_| err())?;
        let col = col.parse::<u32>().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}

/// Counter for unique [`LotInstanceId`] allocation.
static LOT_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a lot.
///
/// Allocated from a monotonic atomic counter via [`LotInstanceId::next`].
/// Two lots built in the same process never share an id, even when their
/// dimensions and seeds are identical, so callers holding ids from one lot
/// can detect that they are talking to a different one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LotInstanceId(u64);

impl LotInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(LOT_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LotInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
