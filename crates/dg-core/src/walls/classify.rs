//! Wall placement around a floor set

use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::grid::{CARDINAL, DIAGONAL, EIGHT, FloorSet, GridPos};

use super::WallArchetype;
use super::tables::{lookup_cardinal, lookup_eight};

/// Wall archetype for every non-floor cell bordering the floor
pub type WallMap = HashMap<GridPos, WallArchetype>;

/// Non-floor cells reached by stepping from any floor cell in `directions`
pub fn find_walls_in_directions(floor: &FloorSet, directions: &[GridPos]) -> BTreeSet<GridPos> {
    floor
        .iter()
        .flat_map(|&pos| directions.iter().map(move |&d| pos + d))
        .filter(|&neighbour| !floor.contains(neighbour))
        .collect()
}

/// Bit per direction, first direction most significant, set when floor
pub fn neighbour_mask(pos: GridPos, floor: &FloorSet, directions: &[GridPos]) -> u8 {
    directions
        .iter()
        .fold(0u8, |mask, &d| (mask << 1) | u8::from(floor.contains(pos + d)))
}

/// Classify every wall cell around `floor`
///
/// Cells next to the floor along a cardinal step get a 4-direction
/// archetype. Cells next to the floor along a diagonal step are then
/// looked up with the 8-direction mask, and a match there replaces the
/// 4-direction result. Cells that match no table map to
/// [`WallArchetype::None`].
pub fn classify(floor: &FloorSet) -> WallMap {
    let mut walls = WallMap::new();

    for pos in find_walls_in_directions(floor, &CARDINAL) {
        let mask = neighbour_mask(pos, floor, &CARDINAL);
        walls.insert(pos, lookup_cardinal(mask).unwrap_or_default());
    }

    for pos in find_walls_in_directions(floor, &DIAGONAL) {
        let mask = neighbour_mask(pos, floor, &EIGHT);
        match lookup_eight(mask) {
            Some(archetype) => {
                walls.insert(pos, archetype);
            }
            None => {
                walls.entry(pos).or_default();
            }
        }
    }

    walls
}
