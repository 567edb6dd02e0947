//! Parking manager context for parkgrid.
//!
//! [`ParkingManager`] owns a single [`Lot`](parkgrid_grid::Lot) and exposes
//! the text-id operations a UI or API layer needs: reservations, occupancy
//! updates, nearest-space search, statistics, and recommendations.
//! [`LotConfig`] describes a generated lot and is validated before any
//! space is built.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generate;
pub mod manager;
pub mod metrics;

pub use config::{ConfigError, LayoutConfig, LotConfig};
pub use generate::{generate_lot, generate_seeds};
pub use manager::ParkingManager;
pub use metrics::ManagerMetrics;
