//! Lot configuration, validation, and error types.
//!
//! [`LotConfig`] is the builder input for a generated lot.
//! [`validate()`](LotConfig::validate) checks every structural invariant up
//! front, so a config that validates always produces a lot.

use std::error::Error;
use std::fmt;

use parkgrid_grid::{GridError, Lot};

// ── LayoutConfig ───────────────────────────────────────────────────

/// How a generated lot assigns space types and initial occupancy.
///
/// Spaces are typed by position first: the first
/// `disabled_front_spaces` columns of row 0 are disabled, then the first
/// `electric_left_spaces` rows of column 0 are electric. Everything else is
/// compact with probability `compact_probability`, otherwise regular.
/// Each space independently starts occupied with probability
/// `occupancy_probability`.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Chance a space starts occupied. Default: 0.4.
    pub occupancy_probability: f64,
    /// Chance an untyped space is compact. Default: 0.2.
    pub compact_probability: f64,
    /// Disabled spaces at the front of row 0. Default: 2.
    pub disabled_front_spaces: u32,
    /// Electric spaces down column 0. Default: 3.
    pub electric_left_spaces: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            occupancy_probability: 0.4,
            compact_probability: 0.2,
            disabled_front_spaces: 2,
            electric_left_spaces: 3,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LotConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The dimensions cannot form a lot.
    Grid(GridError),
    /// A probability is NaN, infinite, or outside `[0, 1]`.
    InvalidProbability {
        /// Which setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The lot name is empty or whitespace.
    EmptyName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be in [0.0, 1.0], got {value}")
            }
            Self::EmptyName => write!(f, "lot name must not be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── LotConfig ──────────────────────────────────────────────────────

/// Complete configuration for generating a lot.
#[derive(Clone, Debug, PartialEq)]
pub struct LotConfig {
    /// Display name. Default: `"Main Parking Lot"`.
    pub name: String,
    /// Number of rows. Default: 8.
    pub rows: u32,
    /// Number of columns. Default: 12.
    pub cols: u32,
    /// RNG seed; the same seed always yields the same lot.
    pub seed: u64,
    /// Type and occupancy assignment.
    pub layout: LayoutConfig,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            name: Lot::DEFAULT_NAME.to_owned(),
            rows: 8,
            cols: 12,
            seed: 0,
            layout: LayoutConfig::default(),
        }
    }
}

impl LotConfig {
    /// A default config with the given dimensions.
    pub fn with_size(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must form a lot of supported size.
        Lot::check_dimensions(self.rows, self.cols)?;
        // 2. Name must be printable.
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        // 3. Probabilities in [0, 1].
        let l = &self.layout;
        for (name, value) in [
            ("occupancy_probability", l.occupancy_probability),
            ("compact_probability", l.compact_probability),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
