//! Floor tile sets

use std::collections::BTreeSet;
use std::collections::btree_set;

use super::GridPos;

/// Set of walkable cells
///
/// Ordered so that iteration, and any random pick that indexes into it,
/// is identical between runs with the same seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorSet {
    cells: BTreeSet<GridPos>,
}

impl FloorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell; returns false if it was already present
    pub fn insert(&mut self, pos: GridPos) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, GridPos> {
        self.cells.iter()
    }

    /// Add every cell of `other`
    pub fn union_with(&mut self, other: &FloorSet) {
        self.cells.extend(other.cells.iter().copied());
    }

    /// The `index`-th cell in iteration order
    pub fn nth(&self, index: usize) -> Option<GridPos> {
        self.cells.iter().nth(index).copied()
    }

    pub fn is_superset(&self, other: &FloorSet) -> bool {
        self.cells.is_superset(&other.cells)
    }

    /// How many of `pos + d` for `d` in `directions` are floor
    pub fn neighbour_count(&self, pos: GridPos, directions: &[GridPos]) -> usize {
        directions
            .iter()
            .filter(|&&d| self.contains(pos + d))
            .count()
    }

    /// Inclusive `(min, max)` corners of the occupied area
    pub fn extent(&self) -> Option<(GridPos, GridPos)> {
        let first = *self.cells.first()?;
        let init = (first, first);
        Some(self.cells.iter().fold(init, |(lo, hi), p| {
            (
                GridPos::new(lo.x.min(p.x), lo.y.min(p.y)),
                GridPos::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    pub fn to_vec(&self) -> Vec<GridPos> {
        self.cells.iter().copied().collect()
    }
}

impl FromIterator<GridPos> for FloorSet {
    fn from_iter<I: IntoIterator<Item = GridPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridPos> for FloorSet {
    fn extend<I: IntoIterator<Item = GridPos>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a FloorSet {
    type Item = &'a GridPos;
    type IntoIter = btree_set::Iter<'a, GridPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for FloorSet {
    type Item = GridPos;
    type IntoIter = btree_set::IntoIter<GridPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CARDINAL;

    fn line(len: i32) -> FloorSet {
        (0..len).map(|x| GridPos::new(x, 0)).collect()
    }

    #[test]
    fn test_insert_is_unique() {
        let mut floor = FloorSet::new();
        assert!(floor.insert(GridPos::new(1, 1)));
        assert!(!floor.insert(GridPos::new(1, 1)));
        assert_eq!(floor.len(), 1);
    }

    #[test]
    fn test_union_and_superset() {
        let mut a = line(3);
        let b: FloorSet = [GridPos::new(0, 1)].into_iter().collect();
        a.union_with(&b);
        assert_eq!(a.len(), 4);
        assert!(a.is_superset(&b));
        assert!(!b.is_superset(&a));
    }

    #[test]
    fn test_neighbour_count() {
        let floor = line(3);
        assert_eq!(floor.neighbour_count(GridPos::new(1, 0), &CARDINAL), 2);
        assert_eq!(floor.neighbour_count(GridPos::new(0, 0), &CARDINAL), 1);
        assert_eq!(floor.neighbour_count(GridPos::new(5, 5), &CARDINAL), 0);
    }

    #[test]
    fn test_extent() {
        assert_eq!(FloorSet::new().extent(), None);
        let floor: FloorSet = [GridPos::new(-2, 4), GridPos::new(3, -1)].into_iter().collect();
        assert_eq!(
            floor.extent(),
            Some((GridPos::new(-2, -1), GridPos::new(3, 4)))
        );
    }

    #[test]
    fn test_nth_follows_iteration_order() {
        let floor = line(4);
        assert_eq!(floor.nth(2), Some(GridPos::new(2, 0)));
        assert_eq!(floor.nth(4), None);
    }
}
