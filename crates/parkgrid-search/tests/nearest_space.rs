use parkgrid_core::{LotView, SpaceId, SpaceType};
use parkgrid_grid::Lot;
use parkgrid_search::{find_nearest, Frontier, SpaceFilter};
use parkgrid_test_utils::{fixtures, lot_from_map};
use proptest::prelude::*;

fn id(r: u32, c: u32) -> SpaceId {
    SpaceId::new(r, c)
}

#[test]
fn reaches_beyond_immediate_neighbours() {
    let lot = fixtures::corner_free_3x3();
    let hit = find_nearest(&lot, 1, 1, &SpaceFilter::any()).unwrap();
    assert_eq!(hit.space.id(), id(0, 0));
    assert_eq!(hit.distance, 2);
}

#[test]
fn equidistant_tie_is_deterministic() {
    let lot = fixtures::two_equidistant_3x3();
    // From the centre both are one step away; up (0-1) is enqueued before
    // left (1-0), so 0-1 wins every time.
    let first = find_nearest(&lot, 1, 1, &SpaceFilter::any()).unwrap().space.id();
    for _ in 0..10 {
        let again = find_nearest(&lot, 1, 1, &SpaceFilter::any()).unwrap().space.id();
        assert_eq!(again, first);
    }
    assert_eq!(first, id(0, 1));

    // From 0-0 both are one step away: down (1-0) precedes right (0-1).
    let hit = find_nearest(&lot, 0, 0, &SpaceFilter::any()).unwrap();
    assert_eq!(hit.space.id(), id(1, 0));
    assert_eq!(hit.distance, 1);
}

#[test]
fn out_of_bounds_start_finds_nothing() {
    let lot = Lot::uniform(4, 4).unwrap();
    assert!(find_nearest(&lot, -1, -1, &SpaceFilter::any()).is_none());
    assert!(find_nearest(&lot, 4, 0, &SpaceFilter::any()).is_none());
    assert!(find_nearest(&lot, 0, i32::MAX, &SpaceFilter::any()).is_none());
}

#[test]
fn occupied_start_is_allowed() {
    let lot = lot_from_map(
        "
        #.
        ..
        ",
    );
    let hit = find_nearest(&lot, 0, 0, &SpaceFilter::any()).unwrap();
    assert_eq!(hit.space.id(), id(1, 0));
}

#[test]
fn reserved_spaces_are_skipped() {
    let lot = lot_from_map(
        "
        r.
        ##
        ",
    );
    let hit = find_nearest(&lot, 0, 0, &SpaceFilter::any()).unwrap();
    assert_eq!(hit.space.id(), id(0, 1));
}

#[test]
fn type_filter_walks_past_closer_spaces() {
    let lot = fixtures::mixed_5x5();
    // The only free electric space is 2-0.
    let hit = find_nearest(&lot, 4, 4, &SpaceFilter::any().of_type(SpaceType::Electric)).unwrap();
    assert_eq!(hit.space.id(), id(2, 0));
    assert_eq!(hit.distance, 6);

    // The only free disabled space is 0-0.
    let hit = find_nearest(&lot, 2, 2, &SpaceFilter::any().of_type(SpaceType::Disabled)).unwrap();
    assert_eq!(hit.space.id(), id(0, 0));
}

#[test]
fn row_and_column_preferences() {
    let lot = Lot::uniform(4, 6).unwrap();
    let hit = find_nearest(&lot, 0, 0, &SpaceFilter::any().in_row(3).in_col(5)).unwrap();
    assert_eq!(hit.space.id(), id(3, 5));
    assert_eq!(hit.distance, 8);

    let hit = find_nearest(&lot, 0, 0, &SpaceFilter::any().in_col(2)).unwrap();
    assert_eq!(hit.space.id(), id(0, 2));
}

#[test]
fn unsatisfiable_filter_finds_nothing() {
    let lot = Lot::uniform(3, 3).unwrap();
    assert!(find_nearest(&lot, 1, 1, &SpaceFilter::any().of_type(SpaceType::Compact)).is_none());
    assert!(find_nearest(&lot, 1, 1, &SpaceFilter::any().in_row(7)).is_none());
}

#[test]
fn walk_covers_whole_lot() {
    let lot = Lot::uniform(5, 7).unwrap();
    let mut seen: Vec<_> = Frontier::new(&lot, 2, 3).map(|n| n.space.id()).collect();
    assert_eq!(seen.len(), lot.space_count());
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), lot.space_count());
}

proptest! {
    #[test]
    fn walk_distance_is_manhattan(
        rows in 1u32..8,
        cols in 1u32..8,
        r in 0u32..8,
        c in 0u32..8,
    ) {
        let lot = Lot::uniform(rows, cols).unwrap();
        let (r, c) = (r % rows, c % cols);
        let mut last = 0;
        for n in Frontier::new(&lot, r as i32, c as i32) {
            let manhattan = n.space.row().abs_diff(r) + n.space.col().abs_diff(c);
            prop_assert_eq!(n.distance, manhattan);
            prop_assert!(n.distance >= last);
            last = n.distance;
        }
    }

    #[test]
    fn nearest_on_free_lot_is_start(rows in 1u32..8, cols in 1u32..8, r in 0u32..8, c in 0u32..8) {
        let lot = Lot::uniform(rows, cols).unwrap();
        let (r, c) = (r % rows, c % cols);
        let hit = find_nearest(&lot, r as i32, c as i32, &SpaceFilter::any()).unwrap();
        prop_assert_eq!(hit.space.id(), SpaceId::new(r, c));
        prop_assert_eq!(hit.distance, 0);
    }
}
