//! Random walk carving
//!
//! Drunkard's-walk paths and the iterated walk used to grow organic rooms.

use log::trace;

use crate::config::WalkParameters;
use crate::grid::{FloorSet, GridPos, random_cardinal};
use crate::rng::GenRng;

/// Walk `length` random cardinal steps from `start`
///
/// Returns the visited cells in order, `start` first, so the result always
/// has `length + 1` entries. Cells may repeat.
pub fn walk(start: GridPos, length: usize, rng: &mut GenRng) -> Vec<GridPos> {
    let mut path = Vec::with_capacity(length + 1);
    let mut current = start;
    path.push(current);
    for _ in 0..length {
        current += random_cardinal(rng);
        path.push(current);
    }
    path
}

/// Union of `params.iterations` walks grown from `start`
///
/// With random restarts, each walk after the first begins at a uniformly
/// chosen cell of everything carved so far, which biases growth toward
/// dense areas. Otherwise each walk continues from the end of the last one.
pub fn run_random_walk(params: &WalkParameters, start: GridPos, rng: &mut GenRng) -> FloorSet {
    let mut floor = FloorSet::new();
    let mut current = start;
    for _ in 0..params.iterations {
        let path = walk(current, params.walk_length, rng);
        floor.extend(path.iter().copied());

        current = if params.start_randomly_each_iteration {
            floor.nth(rng.below(floor.len())).unwrap_or(start)
        } else {
            path.last().copied().unwrap_or(current)
        };
    }
    trace!(
        "random walk from {} carved {} cells in {} iterations",
        start,
        floor.len(),
        params.iterations
    );
    floor
}

/// Straight corridor of `length` steps in one random cardinal direction
///
/// Returns `length + 1` cells starting at `start`.
pub fn random_walk_corridor(start: GridPos, length: usize, rng: &mut GenRng) -> Vec<GridPos> {
    let direction = random_cardinal(rng);
    let mut corridor = Vec::with_capacity(length + 1);
    let mut current = start;
    corridor.push(current);
    for _ in 0..length {
        current += direction;
        corridor.push(current);
    }
    corridor
}
