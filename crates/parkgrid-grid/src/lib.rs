//! Grid store and occupancy state machine for parkgrid lots.
//!
//! [`Lot`] owns every [`Space`](parkgrid_core::Space) of a fixed-size
//! rectangular lot in a flat row-major arena and answers lookups and
//! 4-connected neighbour queries. The [`transition`] module adds the
//! reserve / release / occupy operations, the only way a space changes
//! after construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lot;
pub mod transition;

pub use error::GridError;
pub use lot::{Lot, SpaceSeed};
pub use transition::SpaceState;
