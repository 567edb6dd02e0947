//! Standard lots shared by tests across the workspace.

use crate::lot_from_map;
use parkgrid_grid::Lot;

/// 3x3 lot where only the top-left corner `0-0` is free.
pub fn corner_free_3x3() -> Lot {
    lot_from_map(
        "
        .##
        ###
        ###
        ",
    )
}

/// 4x4 regular lot with 13 of 16 spaces occupied (81.25%).
pub fn busy_4x4() -> Lot {
    lot_from_map(
        "
        ####
        ####
        ####
        #...
        ",
    )
}

/// 3x3 lot with two free spaces, `0-1` and `1-0`, each one step from both
/// the occupied corner `0-0` and the occupied centre `1-1`.
pub fn two_equidistant_3x3() -> Lot {
    lot_from_map(
        "
        #.#
        .##
        ###
        ",
    )
}

/// Lot shaped like the front of a generated lot: disabled bays in row 0,
/// chargers down column 0, a compact bay and mixed occupancy.
pub fn mixed_5x5() -> Lot {
    lot_from_map(
        "
        dD#..
        E.c##
        e#..C
        ..#..
        #...#
        ",
    )
}
