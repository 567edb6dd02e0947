//! Parkgrid: parking lot allocation on a grid graph.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all parkgrid sub-crates. For most users, adding `parkgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use parkgrid::prelude::*;
//!
//! // A generated 8x12 lot; the same seed always gives the same layout.
//! let config = LotConfig { seed: 42, ..LotConfig::default() };
//! let mut pm = ParkingManager::from_config(&config).unwrap();
//!
//! // Book the free electric space closest to the entrance.
//! let filter = SpaceFilter::any().of_type(SpaceType::Electric);
//! if let Some(id) = pm.reserve_nearest(0, 0, &filter, "ada") {
//!     assert!(pm.lot().get(id).unwrap().is_reserved());
//!     assert!(pm.release(&id.to_string()));
//! }
//!
//! let stats = pm.snapshot();
//! assert_eq!(stats.total_spaces, 96);
//! assert!(!pm.analyze().is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `parkgrid-core` | Space ids, space model, transition errors, `LotView` |
//! | [`grid`] | `parkgrid-grid` | `Lot` storage and the occupancy state machine |
//! | [`search`] | `parkgrid-search` | Nearest-space BFS and filters |
//! | [`advisor`] | `parkgrid-advisor` | Statistics and recommendations |
//! | [`engine`] | `parkgrid-engine` | `ParkingManager`, configuration, generation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`parkgrid-core`).
///
/// Contains [`types::SpaceId`], [`types::Space`], [`types::SpaceType`],
/// [`types::TransitionError`] and the read-only [`types::LotView`] trait.
pub use parkgrid_core as types;

/// Lot storage and state transitions (`parkgrid-grid`).
pub use parkgrid_grid as grid;

/// Nearest-space search (`parkgrid-search`).
///
/// [`search::find_nearest`] runs a breadth-first search from a starting
/// cell; [`search::Frontier`] exposes the walk itself.
pub use parkgrid_search as search;

/// Statistics and optimisation advice (`parkgrid-advisor`).
pub use parkgrid_advisor as advisor;

/// Manager context, configuration, and generation (`parkgrid-engine`).
pub use parkgrid_engine as engine;

/// Common imports for typical parkgrid usage.
///
/// ```rust
/// use parkgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use parkgrid_core::{LotView, Occupancy, Space, SpaceId, SpaceType, TransitionError};

    // Grid
    pub use parkgrid_grid::{GridError, Lot, SpaceSeed, SpaceState};

    // Search
    pub use parkgrid_search::{find_nearest, NearestSpace, SpaceFilter};

    // Advisor
    pub use parkgrid_advisor::{analyze, LotStats, Recommendation};

    // Engine
    pub use parkgrid_engine::{ConfigError, LayoutConfig, LotConfig, ManagerMetrics, ParkingManager};
}
