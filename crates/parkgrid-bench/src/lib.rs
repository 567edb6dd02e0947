//! Benchmark profiles for the parkgrid allocation engine.
//!
//! - [`reference_config`]: 100x100 generated lot (10K spaces)
//! - [`stress_config`]: 316x316 generated lot (~100K spaces)
//! - [`far_corner_lot`]: fully occupied lot except the cell opposite the
//!   origin, the worst case for nearest-space search

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use parkgrid_core::SpaceType;
use parkgrid_engine::LotConfig;
use parkgrid_grid::{GridError, Lot, SpaceSeed};

/// Build a reference benchmark profile: 100x100 lot with default layout.
pub fn reference_config(seed: u64) -> LotConfig {
    LotConfig {
        name: "bench-reference".into(),
        seed,
        ..LotConfig::with_size(100, 100)
    }
}

/// Build a stress benchmark profile: 316x316 lot.
///
/// Same layout as [`reference_config`] at 10x the space count.
pub fn stress_config(seed: u64) -> LotConfig {
    LotConfig {
        name: "bench-stress".into(),
        seed,
        ..LotConfig::with_size(316, 316)
    }
}

/// A `rows x cols` regular lot where only `(rows-1, cols-1)` is free.
///
/// A search from `0-0` has to visit every space before it succeeds.
pub fn far_corner_lot(rows: u32, cols: u32) -> Result<Lot, GridError> {
    let n = rows as usize * cols as usize;
    let seeds = (0..n)
        .map(|i| {
            if i + 1 == n {
                SpaceSeed::free(SpaceType::Regular)
            } else {
                SpaceSeed::occupied(SpaceType::Regular)
            }
        })
        .collect();
    Lot::new(rows, cols, seeds)
}
