//! Lot statistics and optimisation advice for parkgrid.
//!
//! Both entry points are pure reads over a
//! [`LotView`](parkgrid_core::LotView):
//!
//! - [`LotStats::collect`] counts spaces by state and type.
//! - [`analyze`] runs the fixed sequence of allocation heuristics and
//!   returns [`Recommendation`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rules;
pub mod stats;

pub use rules::{analyze, analyze_messages, Recommendation};
pub use stats::{occupied_by_row, type_utilisation, LotStats};
