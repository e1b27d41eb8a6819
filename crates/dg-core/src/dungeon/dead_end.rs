//! Dead-end detection

use crate::grid::{CARDINAL, FloorSet, GridPos};

/// Floor cells with exactly one cardinal floor neighbour
///
/// Diagonal neighbours are ignored. Order follows the set's iteration order.
pub fn find_dead_ends(floor: &FloorSet) -> Vec<GridPos> {
    floor
        .iter()
        .copied()
        .filter(|&pos| floor.neighbour_count(pos, &CARDINAL) == 1)
        .collect()
}
