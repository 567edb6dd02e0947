//! Error types for lot transitions.
//!
//! Transition rejections are expected outcomes: the grid crate reports them
//! as `bool` at its outer surface and as [`TransitionError`] when a caller
//! wants to know which precondition failed.

use crate::id::SpaceId;
use std::error::Error;
use std::fmt;

/// Why a reservation or occupancy transition was refused.
///
/// A refused transition never mutates the lot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionError {
    /// No space exists at this id.
    UnknownSpace(SpaceId),
    /// The text id could not be parsed, so it cannot name a space.
    MalformedId,
    /// The space is occupied and cannot be reserved.
    Occupied(SpaceId),
    /// The space already carries a reservation.
    AlreadyReserved(SpaceId),
    /// Release was requested on a space with no reservation.
    NotReserved(SpaceId),
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSpace(id) => write!(f, "no space {id} in this lot"),
            Self::MalformedId => write!(f, "malformed space id"),
            Self::Occupied(id) => write!(f, "space {id} is occupied"),
            Self::AlreadyReserved(id) => write!(f, "space {id} is already reserved"),
            Self::NotReserved(id) => write!(f, "space {id} has no reservation"),
        }
    }
}

impl Error for TransitionError {}
