//! Heuristic allocation checks.
//!
//! Four checks run in a fixed order, each contributing at most one
//! [`Recommendation`]. When none fires the result is a single
//! [`Recommendation::Optimal`]. Ratio checks are skipped when their
//! denominator is zero, so any lot, including an empty view, is accepted.

use crate::stats::{occupied_by_row, percent, type_utilisation};
use parkgrid_core::{LotView, SpaceType};
use std::fmt;

/// Occupancy percentage above which the lot counts as near capacity.
pub const HIGH_OCCUPANCY_PERCENT: f64 = 80.0;

/// Largest tolerated gap between the busiest and quietest row.
pub const MAX_ROW_SPREAD: usize = 3;

/// Disabled-space utilisation below which conversion is suggested.
pub const LOW_DISABLED_UTILISATION: f64 = 0.1;

/// Electric-space utilisation above which more chargers are suggested.
pub const HIGH_ELECTRIC_UTILISATION: f64 = 0.9;

/// One piece of advice. `Display` renders the human-readable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Occupancy above [`HIGH_OCCUPANCY_PERCENT`].
    HighOccupancy,
    /// Occupied counts per row differ by more than [`MAX_ROW_SPREAD`].
    UnevenDistribution,
    /// Disabled spaces used less than [`LOW_DISABLED_UTILISATION`].
    UnderusedDisabled,
    /// Electric spaces used more than [`HIGH_ELECTRIC_UTILISATION`].
    HighElectricDemand,
    /// Nothing to change.
    Optimal,
}

impl Recommendation {
    /// The message shown to operators.
    pub fn message(&self) -> &'static str {
        match self {
            Self::HighOccupancy => {
                "High occupancy detected (>80%). Consider expanding parking capacity or implementing dynamic pricing."
            }
            Self::UnevenDistribution => {
                "Uneven space distribution detected. Consider guiding traffic to less occupied areas."
            }
            Self::UnderusedDisabled => {
                "Low utilization of disabled spaces. Consider converting some to regular spaces."
            }
            Self::HighElectricDemand => {
                "High demand for electric vehicle spaces. Consider adding more charging stations."
            }
            Self::Optimal => {
                "Current space allocation is optimal. No immediate changes recommended."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run every check against `view`, in order.
///
/// Never fails and never mutates; the same lot state always produces the
/// same list.
///
/// # Examples
///
/// ```
/// use parkgrid_advisor::{analyze, Recommendation};
/// use parkgrid_grid::Lot;
///
/// let lot = Lot::uniform(4, 4).unwrap();
/// assert_eq!(analyze(&lot), vec![Recommendation::Optimal]);
/// ```
pub fn analyze(view: &dyn LotView) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let occupied = view.spaces().iter().filter(|s| s.is_occupied()).count();
    if view.space_count() > 0 && percent(occupied, view.space_count()) > HIGH_OCCUPANCY_PERCENT {
        out.push(Recommendation::HighOccupancy);
    }

    let rows = occupied_by_row(view);
    if let (Some(max), Some(min)) = (rows.iter().max(), rows.iter().min()) {
        if max - min > MAX_ROW_SPREAD {
            out.push(Recommendation::UnevenDistribution);
        }
    }

    let (occ, total) = type_utilisation(view, SpaceType::Disabled);
    if total > 0 && (occ as f64 / total as f64) < LOW_DISABLED_UTILISATION {
        out.push(Recommendation::UnderusedDisabled);
    }

    let (occ, total) = type_utilisation(view, SpaceType::Electric);
    if total > 0 && (occ as f64 / total as f64) > HIGH_ELECTRIC_UTILISATION {
        out.push(Recommendation::HighElectricDemand);
    }

    if out.is_empty() {
        out.push(Recommendation::Optimal);
    }
    out
}

/// [`analyze`], rendered to strings.
pub fn analyze_messages(view: &dyn LotView) -> Vec<String> {
    analyze(view).iter().map(ToString::to_string).collect()
}
