//! Core types and traits for the parkgrid allocation engine.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: space identifiers,
//! space records and their occupancy states, transition errors, and the
//! read-only [`LotView`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod space;
pub mod traits;

pub use error::TransitionError;
pub use id::{LotInstanceId, SpaceId, SpaceIdParseError};
pub use space::{Occupancy, Reservation, Space, SpaceType};
pub use traits::LotView;
