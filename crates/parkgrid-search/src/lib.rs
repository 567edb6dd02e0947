//! Nearest-space search for parkgrid lots.
//!
//! [`find_nearest`] runs a breadth-first walk ([`Frontier`]) over a lot's
//! 4-connected adjacency graph and returns the first space satisfying a
//! [`SpaceFilter`]. Because the walk is breadth-first, the first match is at
//! minimum edge distance, and ties are broken deterministically by the
//! lot's up, down, left, right neighbour order.
//!
//! Search only reads the lot, through [`LotView`](parkgrid_core::LotView).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod filter;
pub mod nearest;

pub use filter::SpaceFilter;
pub use nearest::{find_nearest, Frontier, NearestSpace};
