//! Criteria a space must meet to be offered by the search.

use parkgrid_core::{Space, SpaceType};

/// Optional constraints on the space a search may return.
///
/// Every field is independently present or absent; an absent field places
/// no constraint. Regardless of the fields, only spaces that are neither
/// occupied nor reserved ever match.
///
/// # Examples
///
/// ```
/// use parkgrid_core::SpaceType;
/// use parkgrid_search::SpaceFilter;
///
/// let f = SpaceFilter::any().of_type(SpaceType::Electric).in_row(0);
/// assert_eq!(f.space_type, Some(SpaceType::Electric));
/// assert_eq!(f.preferred_row, Some(0));
/// assert_eq!(f.preferred_col, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpaceFilter {
    /// Required space type.
    pub space_type: Option<SpaceType>,
    /// Required row.
    pub preferred_row: Option<u32>,
    /// Required column.
    pub preferred_col: Option<u32>,
}

impl SpaceFilter {
    /// A filter matching any available space.
    pub fn any() -> Self {
        Self::default()
    }

    /// Require a space type.
    pub fn of_type(mut self, space_type: SpaceType) -> Self {
        self.space_type = Some(space_type);
        self
    }

    /// Require a row.
    pub fn in_row(mut self, row: u32) -> Self {
        self.preferred_row = Some(row);
        self
    }

    /// Require a column.
    pub fn in_col(mut self, col: u32) -> Self {
        self.preferred_col = Some(col);
        self
    }

    /// `true` if `space` is free and satisfies every present constraint.
    pub fn matches(&self, space: &Space) -> bool {
        space.is_available()
            && self.space_type.is_none_or(|t| space.space_type() == t)
            && self.preferred_row.is_none_or(|r| space.row() == r)
            && self.preferred_col.is_none_or(|c| space.col() == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkgrid_core::{Occupancy, Reservation, SpaceId};

    fn space(r: u32, c: u32, t: SpaceType) -> Space {
        Space::new(SpaceId::new(r, c), t, false)
    }

    #[test]
    fn empty_filter_matches_any_free_space() {
        assert!(SpaceFilter::any().matches(&space(3, 1, SpaceType::Compact)));
    }

    #[test]
    fn occupied_and_reserved_never_match() {
        let taken = Space::new(SpaceId::new(0, 0), SpaceType::Regular, true);
        assert!(!SpaceFilter::any().matches(&taken));

        let held = Space::with_occupancy(
            SpaceId::new(0, 0),
            SpaceType::Regular,
            Occupancy::Reserved(Reservation::new("x", Default::default(), None)),
        );
        assert!(!SpaceFilter::any().matches(&held));
    }

    #[test]
    fn each_field_constrains_independently() {
        let s = space(2, 4, SpaceType::Electric);
        assert!(SpaceFilter::any().of_type(SpaceType::Electric).matches(&s));
        assert!(!SpaceFilter::any().of_type(SpaceType::Disabled).matches(&s));
        assert!(SpaceFilter::any().in_row(2).matches(&s));
        assert!(!SpaceFilter::any().in_row(1).matches(&s));
        assert!(SpaceFilter::any().in_col(4).matches(&s));
        assert!(!SpaceFilter::any().in_col(0).matches(&s));
        assert!(SpaceFilter::any()
            .of_type(SpaceType::Electric)
            .in_row(2)
            .in_col(4)
            .matches(&s));
    }
}
