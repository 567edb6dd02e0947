//! Test utilities for parkgrid development.
//!
//! Lots for tests are easiest to read as pictures. [`lot_from_map`] turns
//! an ASCII map into a [`Lot`], and [`fixtures`] holds the standard lots
//! shared across crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use parkgrid_core::{SpaceId, SpaceType};
use parkgrid_grid::{Lot, SpaceSeed};

/// Holder name used for reservations created from a map.
pub const FIXTURE_HOLDER: &str = "fixture";

/// Decode one map character.
///
/// | char | type | state |
/// |------|------|-------|
/// | `.` / `#` | regular | free / occupied |
/// | `d` / `D` | disabled | free / occupied |
/// | `e` / `E` | electric | free / occupied |
/// | `c` / `C` | compact | free / occupied |
/// | `r` | regular | reserved by [`FIXTURE_HOLDER`] |
fn decode(ch: char) -> Option<(SpaceSeed, bool)> {
    let seed = match ch {
        '.' | 'r' => SpaceSeed::free(SpaceType::Regular),
        '#' => SpaceSeed::occupied(SpaceType::Regular),
        'd' => SpaceSeed::free(SpaceType::Disabled),
        'D' => SpaceSeed::occupied(SpaceType::Disabled),
        'e' => SpaceSeed::free(SpaceType::Electric),
        'E' => SpaceSeed::occupied(SpaceType::Electric),
        'c' => SpaceSeed::free(SpaceType::Compact),
        'C' => SpaceSeed::occupied(SpaceType::Compact),
        _ => return None,
    };
    Some((seed, ch == 'r'))
}

/// Build a lot from an ASCII map, one line per row.
///
/// Leading and trailing whitespace on each line is ignored, as are blank
/// lines, so maps can be written as indented raw strings.
///
/// # Panics
///
/// Panics on unknown characters or ragged rows.
pub fn lot_from_map(map: &str) -> Lot {
    let lines: Vec<&str> = map
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!lines.is_empty(), "map has no rows");
    let cols = lines[0].chars().count();

    let mut seeds = Vec::with_capacity(lines.len() * cols);
    let mut reserved = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "row {r} has a different width from row 0"
        );
        for (c, ch) in line.chars().enumerate() {
            let (seed, is_reserved) =
                decode(ch).unwrap_or_else(|| panic!("unknown map character {ch:?} at {r}-{c}"));
            seeds.push(seed);
            if is_reserved {
                reserved.push(SpaceId::new(r as u32, c as u32));
            }
        }
    }

    let mut lot = Lot::new(lines.len() as u32, cols as u32, seeds).expect("map forms a valid lot");
    for id in reserved {
        assert!(lot.reserve(id, FIXTURE_HOLDER), "could not reserve {id}");
    }
    lot
}

/// Render a lot back into map form; inverse of [`lot_from_map`].
pub fn lot_to_map(lot: &Lot) -> String {
    use parkgrid_core::LotView;

    let mut out = String::new();
    for s in lot.iter() {
        let ch = match (s.space_type(), s.is_occupied(), s.is_reserved()) {
            (SpaceType::Regular, _, true) => 'r',
            (SpaceType::Regular, false, _) => '.',
            (SpaceType::Regular, true, _) => '#',
            (SpaceType::Disabled, occ, _) => if occ { 'D' } else { 'd' },
            (SpaceType::Electric, occ, _) => if occ { 'E' } else { 'e' },
            (SpaceType::Compact, occ, _) => if occ { 'C' } else { 'c' },
        };
        out.push(ch);
        if s.col() + 1 == lot.cols() {
            out.push('\n');
        }
    }
    out
}
