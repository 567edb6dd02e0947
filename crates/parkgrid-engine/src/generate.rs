//! Seeded lot generation.
//!
//! Respects the determinism contract: the RNG is a ChaCha8 stream seeded
//! from [`LotConfig::seed`], and cells are drawn in row-major order, so a
//! given config always produces the same lot.

use crate::config::{ConfigError, LayoutConfig, LotConfig};
use parkgrid_core::SpaceType;
use parkgrid_grid::{Lot, SpaceSeed};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Positional type for a cell, before any random compact assignment.
fn fixed_type(layout: &LayoutConfig, row: u32, col: u32) -> Option<SpaceType> {
    if row == 0 && col < layout.disabled_front_spaces {
        Some(SpaceType::Disabled)
    } else if col == 0 && row < layout.electric_left_spaces {
        Some(SpaceType::Electric)
    } else {
        None
    }
}

/// Validate `config` and draw one seed per cell, row-major.
pub fn generate_seeds(config: &LotConfig) -> Result<Vec<SpaceSeed>, ConfigError> {
    config.validate()?;
    let layout = &config.layout;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut seeds = Vec::with_capacity(Lot::check_dimensions(config.rows, config.cols)?);
    for row in 0..config.rows {
        for col in 0..config.cols {
            let space_type = fixed_type(layout, row, col).unwrap_or_else(|| {
                if rng.gen_bool(layout.compact_probability) {
                    SpaceType::Compact
                } else {
                    SpaceType::Regular
                }
            });
            seeds.push(SpaceSeed {
                space_type,
                occupied: rng.gen_bool(layout.occupancy_probability),
            });
        }
    }
    Ok(seeds)
}

/// Validate `config` and build the lot it describes.
pub fn generate_lot(config: &LotConfig) -> Result<Lot, ConfigError> {
    let lot = Lot::new(config.rows, config.cols, generate_seeds(config)?)?;
    tracing::info!(
        lot = %lot.instance_id(),
        name = %config.name,
        seed = config.seed,
        "lot generated"
    );
    Ok(lot.with_name(config.name.clone()))
}
